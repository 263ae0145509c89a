// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod checkins;
pub mod config;
pub mod doctor;
pub mod exporter;
pub mod reports;
pub mod transactions;
pub mod wellness;

use anyhow::Result;
use chrono::NaiveDate;

use crate::repo;
use crate::store::KvStore;
use crate::utils::{parse_date, parse_month};

/// Who is acting and which calendar day counts as today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub today: NaiveDate,
}

impl Session {
    /// Resolves `--user`/`--today`, falling back to the stored default user and `clock_today`.
    pub fn from_matches(
        store: &dyn KvStore,
        m: &clap::ArgMatches,
        clock_today: NaiveDate,
    ) -> Result<Session> {
        let user = match m.get_one::<String>("user").map(|s| s.trim()) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => repo::default_user(store)?,
        };
        let today = match m.get_one::<String>("today") {
            Some(s) => parse_date(s)?,
            None => clock_today,
        };
        Ok(Session { user, today })
    }

    /// `--date` when given, today otherwise.
    pub fn date_or_today(&self, sub: &clap::ArgMatches) -> Result<NaiveDate> {
        match sub.get_one::<String>("date") {
            Some(s) => parse_date(s),
            None => Ok(self.today),
        }
    }

    /// A day inside `--month` when given, inside the current month otherwise.
    pub fn month_or_current(&self, sub: &clap::ArgMatches) -> Result<NaiveDate> {
        match sub.get_one::<String>("month") {
            Some(s) => parse_month(s),
            None => Ok(self.today),
        }
    }
}
