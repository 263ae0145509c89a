// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::commands::Session;
use crate::finance::{summarize_month, MonthSummary};
use crate::repo;
use crate::store::KvStore;
use crate::utils::{
    fmt_money, maybe_print_json, month_key, month_transactions, parse_decimal, pretty_table,
};

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, session, sub)?,
        Some(("show", sub)) => show(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub
        .get_one::<String>("amount")
        .ok_or_else(|| anyhow!("amount is required"))?;
    let amount = parse_decimal(raw)?;
    repo::set_budget(store, &session.user, amount)?;
    println!("Monthly budget set to {}", fmt_money(&amount));
    Ok(())
}

/// Income, expenses and budget usage for the month containing `anchor`.
pub fn month_summary(store: &dyn KvStore, user: &str, anchor: NaiveDate) -> Result<MonthSummary> {
    let all = repo::load_transactions(store, user)?;
    let budget = repo::load_budget(store, user)?;
    Ok(summarize_month(&month_transactions(&all, anchor), budget))
}

fn show(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let anchor = session.month_or_current(sub)?;
    let summary = month_summary(store, &session.user, anchor)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        let data = vec![vec![
            month_key(anchor),
            fmt_money(&summary.income),
            fmt_money(&summary.expenses),
            fmt_money(&summary.budget),
            fmt_money(&summary.remaining),
            format!("{}%", summary.budget_progress),
        ]];
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expenses", "Budget", "Remaining", "Used"],
                data
            )
        );
    }
    Ok(())
}
