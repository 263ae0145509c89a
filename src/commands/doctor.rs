// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::Session;
use crate::models::DEFAULT_CATALOG;
use crate::repo;
use crate::store::KvStore;
use crate::utils::pretty_table;

/// Stored records that would be rejected by today's write path, as (issue, detail) pairs.
pub fn find_issues(store: &dyn KvStore, user: &str) -> Result<Vec<(String, String)>> {
    let mut rows = Vec::new();

    // 1) Check-ins outside the accepted ranges
    for c in repo::load_history(store, user)? {
        if let Err(e) = c.validate() {
            rows.push(("checkin_out_of_range".into(), format!("{}: {}", c.date, e)));
        }
    }

    // 2) Transactions with bad amounts or categories
    let txs = repo::load_transactions(store, user)?;
    for t in &txs {
        if let Err(e) = t.validate(&DEFAULT_CATALOG) {
            rows.push(("transaction_invalid".into(), format!("{}: {}", t.id, e)));
        }
    }

    // 3) More than one quick-spending expense for the same day
    let mut checkin_days: Vec<_> = txs.iter().filter(|t| t.from_checkin).map(|t| t.date).collect();
    checkin_days.sort();
    for pair in checkin_days.windows(2) {
        if pair[0] == pair[1] {
            rows.push(("duplicate_checkin_spending".into(), pair[0].to_string()));
        }
    }

    Ok(rows)
}

pub fn handle(store: &dyn KvStore, session: &Session) -> Result<()> {
    let rows = find_issues(store, &session.user)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let data = rows.into_iter().map(|(issue, detail)| vec![issue, detail]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], data));
    }
    Ok(())
}
