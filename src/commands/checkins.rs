// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::Session;
use crate::models::{mood_label, CheckinRecord};
use crate::repo;
use crate::store::KvStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, session, sub)?,
        Some(("show", sub)) => show(store, session, sub)?,
        Some(("history", sub)) => history(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the record from `checkin add` arguments without touching the store.
pub fn record_from_args(session: &Session, sub: &clap::ArgMatches) -> Result<CheckinRecord> {
    let spending = match sub.get_one::<String>("spending").map(|s| s.trim()) {
        Some(s) if !s.is_empty() => Some(parse_decimal(s)?),
        _ => None,
    };
    Ok(CheckinRecord {
        date: session.date_or_today(sub)?,
        user_id: Some(session.user.clone()),
        sleep_hours: sub.get_one::<f64>("sleep").copied(),
        mood: sub.get_one::<u8>("mood").copied(),
        water_cups: sub.get_one::<u8>("water").copied().unwrap_or(0),
        physical_activity: sub.get_flag("activity"),
        spending,
    })
}

fn add(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let record = record_from_args(session, sub)?;
    let outcome = repo::save_checkin(store, &session.user, record)?;
    let verb = if outcome.replaced_existing {
        "Updated"
    } else {
        "Saved"
    };
    println!("{} check-in for {}", verb, outcome.record.date);
    if let Some(tx) = outcome.spending_transaction {
        println!("Recorded quick spending {} ({})", fmt_money(&tx.amount), tx.id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CheckinRow {
    pub date: String,
    pub sleep_hours: String,
    pub mood: String,
    pub water_cups: u8,
    pub physical_activity: bool,
    pub spending: String,
}

impl From<&CheckinRecord> for CheckinRow {
    fn from(c: &CheckinRecord) -> Self {
        CheckinRow {
            date: c.date.to_string(),
            sleep_hours: c
                .sleep_hours
                .map(|h| format!("{}h", h))
                .unwrap_or_else(|| "--".into()),
            mood: mood_label(c.mood).unwrap_or("--").to_string(),
            water_cups: c.water_cups,
            physical_activity: c.physical_activity,
            spending: c.spending.map(|s| fmt_money(&s)).unwrap_or_default(),
        }
    }
}

fn print_rows(rows: Vec<CheckinRow>) {
    let data = rows
        .into_iter()
        .map(|r| {
            vec![
                r.date,
                r.sleep_hours,
                r.mood,
                r.water_cups.to_string(),
                (if r.physical_activity { "yes" } else { "no" }).to_string(),
                r.spending,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Sleep", "Mood", "Water", "Activity", "Spending"],
            data
        )
    );
}

fn show(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let date = session.date_or_today(sub)?;
    match repo::load_user_checkin(store, &session.user, date)? {
        Some(c) => {
            let row = CheckinRow::from(&c);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &row)? {
                print_rows(vec![row]);
            }
        }
        None => println!("No check-in for {}", date),
    }
    Ok(())
}

fn history(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let mut records = repo::load_history(store, &session.user)?;
    records.sort_by(|a, b| b.date.cmp(&a.date));
    let rows: Vec<CheckinRow> = records.iter().map(CheckinRow::from).collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        print_rows(rows);
    }
    Ok(())
}
