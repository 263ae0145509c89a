// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::commands::Session;
use crate::models::WELLNESS_ACTIVITIES;
use crate::repo;
use crate::store::KvStore;
use crate::streak::project_streak_for_display;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => list(),
        Some(("complete", sub)) => complete(store, session, sub)?,
        Some(("status", sub)) => status(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn list() {
    let data = WELLNESS_ACTIVITIES
        .iter()
        .map(|a| vec![a.title.to_string(), format!("{} min", a.minutes)])
        .collect();
    println!("{}", pretty_table(&["Activity", "Duration"], data));
}

fn complete(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub
        .get_one::<String>("activity")
        .ok_or_else(|| anyhow!("activity is required"))?;
    let date = session.date_or_today(sub)?;
    let done = repo::complete_activity(store, &session.user, title, date)?;
    println!(
        "Completed '{}' on {} ({} today). Streak: {} day(s)",
        done.log.last().map(String::as_str).unwrap_or(title),
        date,
        done.log.len(),
        done.streak.count
    );
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessStatus {
    pub date: NaiveDate,
    pub streak: u32,
    pub completed_today: Vec<String>,
}

pub fn wellness_status(store: &dyn KvStore, user: &str, today: NaiveDate) -> Result<WellnessStatus> {
    let state = repo::load_streak(store, user)?;
    Ok(WellnessStatus {
        date: today,
        streak: project_streak_for_display(state.as_ref(), today),
        completed_today: repo::load_activity_log(store, user, today)?,
    })
}

fn status(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let st = wellness_status(store, &session.user, session.today)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &st)? {
        println!("Current streak: {} day(s) 🔥", st.streak);
        if st.completed_today.is_empty() {
            println!("No activities completed on {}", st.date);
        } else {
            let data = st
                .completed_today
                .iter()
                .enumerate()
                .map(|(i, a)| vec![(i + 1).to_string(), a.clone()])
                .collect();
            println!("{}", pretty_table(&["#", "Completed today"], data));
        }
    }
    Ok(())
}
