// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use equilibrio::commands::{self, Session};
use equilibrio::{cli, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = db::open_or_init()?;
    let today = chrono::Local::now().date_naive();
    let session = Session::from_matches(&store, &matches, today)?;
    tracing::debug!(user = %session.user, today = %session.today, "session");

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("checkin", sub)) => commands::checkins::handle(&mut store, &session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, &session, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut store, &session, sub)?,
        Some(("wellness", sub)) => commands::wellness::handle(&mut store, &session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut store, &session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut store, &session, sub)?,
        Some(("config", sub)) => commands::config::handle(&mut store, &session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store, &session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
