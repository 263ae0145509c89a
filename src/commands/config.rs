// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};

use crate::commands::Session;
use crate::repo;
use crate::store::KvStore;
use crate::utils::{fmt_money, pretty_table};

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let default_user = repo::default_user(store)?;
            let budget = repo::load_budget(store, &session.user)?;
            let data = vec![
                vec!["default_user".to_string(), default_user],
                vec!["active_user".to_string(), session.user.clone()],
                vec!["today".to_string(), session.today.to_string()],
                vec!["monthly_budget".to_string(), fmt_money(&budget)],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], data));
        }
        Some(("set-user", sub)) => {
            let id = sub
                .get_one::<String>("id")
                .ok_or_else(|| anyhow!("id is required"))?;
            repo::set_default_user(store, id)?;
            println!("Default user set to '{}'", id.trim());
        }
        _ => {}
    }
    Ok(())
}
