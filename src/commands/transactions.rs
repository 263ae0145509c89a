// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::commands::Session;
use crate::models::{Transaction, TransactionType, DEFAULT_CATALOG};
use crate::repo::{self, NewTransaction, TransactionPatch};
use crate::store::KvStore;
use crate::utils::{maybe_print_json, month_transactions, parse_decimal, pretty_table};

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, session, sub)?,
        Some(("list", sub)) => list(store, session, sub)?,
        Some(("edit", sub)) => edit(store, session, sub)?,
        Some(("rm", sub)) => rm(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<TransactionType> {
    s.parse::<TransactionType>().map_err(|e| anyhow!(e))
}

fn add(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub.get_one::<String>("type").map_or("expense", |s| s.as_str()))?;
    let amount_raw = sub
        .get_one::<String>("amount")
        .ok_or_else(|| anyhow!("--amount is required"))?;
    let new = NewTransaction {
        kind,
        amount: parse_decimal(amount_raw)?,
        category: sub
            .get_one::<String>("category")
            .cloned()
            .unwrap_or_else(|| "food".into()),
        description: sub.get_one::<String>("description").cloned(),
        date: session.date_or_today(sub)?,
    };
    let tx = repo::add_transaction(store, &session.user, new, &DEFAULT_CATALOG)?;
    println!(
        "Recorded {} {} on {} ({}) id={}",
        tx.kind.as_str(),
        tx.amount,
        tx.date,
        tx.category,
        tx.id
    );
    Ok(())
}

fn edit(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("id is required"))?;
    let patch = TransactionPatch {
        kind: sub
            .get_one::<String>("type")
            .map(|s| parse_kind(s))
            .transpose()?,
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        category: sub.get_one::<String>("category").cloned(),
        description: sub.get_one::<String>("description").cloned(),
    };
    let tx = repo::update_transaction(store, &session.user, id.trim(), patch, &DEFAULT_CATALOG)?;
    println!("Updated {}: {} {} ({})", tx.id, tx.kind.as_str(), tx.amount, tx.category);
    Ok(())
}

fn rm(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("id is required"))?;
    let removed = repo::delete_transaction(store, &session.user, id.trim())?;
    println!("Removed transaction {}", removed.id);
    Ok(())
}

fn list(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.origin.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Amount", "Category", "Description", "Origin"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub origin: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            amount: format!("{:.2}", t.amount),
            category: t.category.clone(),
            description: t.description.clone(),
            origin: (if t.from_checkin { "check-in" } else { "manual" }).to_string(),
        }
    }
}

/// Newest first; month-filtered unless `--all`.
pub fn query_rows(
    store: &dyn KvStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let all = repo::load_transactions(store, &session.user)?;
    let mut selected = if sub.get_flag("all") {
        all
    } else {
        month_transactions(&all, session.month_or_current(sub)?)
    };
    selected.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        selected.truncate(*limit);
    }
    Ok(selected.iter().map(TransactionRow::from).collect())
}
