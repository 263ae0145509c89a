// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn date_arg(help: &'static str) -> Arg {
    Arg::new("date").long("date").value_name("YYYY-MM-DD").help(help)
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month (defaults to the month of --today)")
}

pub fn build_cli() -> Command {
    Command::new("equilibrio")
        .version(crate_version!())
        .about("Daily check-ins, wellness streaks, budget and the Equilíbrio score")
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .env("EQUILIBRIO_USER")
                .help("User id (defaults to the configured default user, then 'guest')"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .value_name("YYYY-MM-DD")
                .help("Treat this date as today"),
        )
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("checkin")
                .about("Daily check-in")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Save (or replace) the check-in for a day")
                        .arg(
                            Arg::new("sleep")
                                .long("sleep")
                                .required(true)
                                .value_parser(clap::value_parser!(f64))
                                .help("Hours slept (1-12)"),
                        )
                        .arg(
                            Arg::new("mood")
                                .long("mood")
                                .required(true)
                                .value_parser(clap::value_parser!(u8))
                                .help("Mood from 1 (worst) to 5 (best)"),
                        )
                        .arg(
                            Arg::new("water")
                                .long("water")
                                .value_parser(clap::value_parser!(u8))
                                .default_value("0")
                                .help("Cups of water (0-20)"),
                        )
                        .arg(
                            Arg::new("activity")
                                .long("activity")
                                .action(ArgAction::SetTrue)
                                .help("Did physical activity today"),
                        )
                        .arg(
                            Arg::new("spending")
                                .long("spending")
                                .help("Quick spending amount for the day"),
                        )
                        .arg(date_arg("Check-in date (defaults to today)")),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the check-in for a day")
                        .arg(date_arg("Day to show (defaults to today)"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("history")
                        .about("List all check-ins")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Add a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .value_parser(["expense", "income"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("food")
                                .help("food | transport | leisure | health | others"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(date_arg("Transaction date (defaults to today)")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions")
                        .arg(month_arg())
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("month")
                                .help("Ignore the month filter"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction by id")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["expense", "income"]),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Budget usage for a month")
                        .arg(month_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("wellness")
                .about("Timed wellness activities and streak")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List available activities"))
                .subcommand(
                    Command::new("complete")
                        .about("Record a completed activity")
                        .arg(Arg::new("activity").required(true))
                        .arg(date_arg("Completion date (defaults to today)")),
                )
                .subcommand(
                    Command::new("status")
                        .about("Current streak and today's activities")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand_required(true)
                .subcommand(
                    Command::new("home")
                        .about("Equilíbrio score, sub-scores and today's insight")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("categories")
                        .about("Spending by category")
                        .arg(month_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("profile")
                        .about("Active days, average score and achievements")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(["csv", "json"]),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Local settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Show settings"))
                .subcommand(
                    Command::new("set-user")
                        .about("Set the default user id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Report stored records that fail validation"))
}
