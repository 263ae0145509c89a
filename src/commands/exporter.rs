// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::path::Path;

use crate::commands::Session;
use crate::models::Transaction;
use crate::repo;
use crate::store::KvStore;

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, session, sub),
        _ => Ok(()),
    }
}

fn export_transactions(
    store: &mut dyn KvStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub
        .get_one::<String>("out")
        .ok_or_else(|| anyhow!("--out is required"))?;

    let mut txs = repo::load_transactions(store, &session.user)?;
    txs.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    write_transactions(&txs, &fmt, Path::new(out))?;
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

pub fn write_transactions(txs: &[Transaction], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "amount",
                "category",
                "description",
                "from_checkin",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    t.from_checkin.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_string(),
                        "type": t.kind.as_str(),
                        "amount": t.amount.to_string(),
                        "category": t.category,
                        "description": t.description,
                        "fromCheckin": t.from_checkin,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        other => return Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    }
    Ok(())
}
