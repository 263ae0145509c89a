// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::commands::Session;
use crate::equilibrium::{evaluate, DayInputs};
use crate::finance::{aggregate_categories, summarize_month, MonthSummary};
use crate::insight::FIRST_CHECKIN_HINT;
use crate::models::{mood_label, CategoryTotal, CheckinRecord, EquilibriumResult, DEFAULT_CATALOG};
use crate::repo;
use crate::scoring::{score_activity, score_mood, score_sleep};
use crate::store::KvStore;
use crate::streak::project_streak_for_display;
use crate::utils::{fmt_money, maybe_print_json, month_key, month_transactions, pretty_table};

const MINUTES_PER_LOGGED_ACTIVITY: u32 = 10;
const MINUTES_FOR_CHECKIN_ACTIVITY: u32 = 30;

pub fn handle(store: &mut dyn KvStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("home", sub)) => home(store, session, sub)?,
        Some(("categories", sub)) => categories(store, session, sub)?,
        Some(("profile", sub)) => profile(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeReport {
    pub date: NaiveDate,
    pub equilibrium: EquilibriumResult,
    pub sleep_hours: Option<f64>,
    pub mood: Option<&'static str>,
    pub activity_minutes: u32,
    pub month: MonthSummary,
}

pub fn home_report(store: &dyn KvStore, user: &str, today: NaiveDate) -> Result<HomeReport> {
    let checkin = repo::load_user_checkin(store, user, today)?;
    let log = repo::load_activity_log(store, user, today)?;
    let transactions = repo::load_transactions(store, user)?;
    let budget = repo::load_budget(store, user)?;

    let equilibrium = evaluate(&DayInputs {
        today,
        checkin: checkin.as_ref(),
        activity_log: Some(log.as_slice()),
        transactions: &transactions,
    });

    let checkin_minutes = if checkin.as_ref().is_some_and(|c| c.physical_activity) {
        MINUTES_FOR_CHECKIN_ACTIVITY
    } else {
        0
    };
    let activity_minutes = checkin_minutes + log.len() as u32 * MINUTES_PER_LOGGED_ACTIVITY;

    Ok(HomeReport {
        date: today,
        equilibrium,
        sleep_hours: checkin.as_ref().and_then(|c| c.sleep_hours),
        mood: checkin.as_ref().and_then(|c| mood_label(c.mood)),
        activity_minutes,
        month: summarize_month(&month_transactions(&transactions, today), budget),
    })
}

fn home(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let report = home_report(store, &session.user, session.today)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let eq = &report.equilibrium;
    println!("Equilíbrio {}: {}/100", report.date, eq.score);
    let data = eq
        .scores
        .iter()
        .map(|(dim, v)| vec![dim.as_str().to_string(), format!("{}/10", v)])
        .collect();
    println!("{}", pretty_table(&["Dimension", "Score"], data));
    let metrics = vec![
        vec![
            "Sleep".to_string(),
            report
                .sleep_hours
                .filter(|h| *h > 0.0)
                .map(|h| format!("{}h", h))
                .unwrap_or_else(|| "--".into()),
        ],
        vec!["Mood".to_string(), report.mood.unwrap_or("--").to_string()],
        vec![
            "Activity".to_string(),
            format!("{} min", report.activity_minutes),
        ],
        vec!["Balance".to_string(), fmt_money(&report.month.balance)],
        vec![
            "Spent / budget".to_string(),
            format!(
                "{} / {} ({}%)",
                fmt_money(&report.month.expenses),
                fmt_money(&report.month.budget),
                report.month.budget_progress
            ),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], metrics));
    println!("{}", eq.insight);
    if report.mood.is_none() {
        println!("{}", FIRST_CHECKIN_HINT);
    }
    Ok(())
}

pub fn category_report(
    store: &dyn KvStore,
    user: &str,
    anchor: NaiveDate,
) -> Result<Vec<CategoryTotal>> {
    let all = repo::load_transactions(store, user)?;
    Ok(aggregate_categories(
        &month_transactions(&all, anchor),
        &DEFAULT_CATALOG,
    ))
}

fn categories(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let anchor = session.month_or_current(sub)?;
    let totals = category_report(store, &session.user, anchor)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    if totals.is_empty() {
        println!("No expenses in {}", month_key(anchor));
        return Ok(());
    }
    let data = totals
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                fmt_money(&c.total),
                format!("{}%", c.percentage),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    pub active_days: usize,
    pub average_score: u32,
    pub streak: u32,
    pub achievements: u32,
}

/// 0-100 day score from the check-in alone: sleep, mood and the activity flag.
pub fn checkin_day_score(c: &CheckinRecord) -> u32 {
    let sum = u32::from(score_sleep(Some(c)))
        + u32::from(score_mood(Some(c)))
        + u32::from(score_activity(Some(c), None));
    // round(sum / 3 * 10), half-up
    (sum * 10 * 2 + 3) / 6
}

pub fn profile_stats(store: &dyn KvStore, user: &str, today: NaiveDate) -> Result<ProfileStats> {
    let history = repo::load_history(store, user)?;
    let active_days = history.len();
    let average_score = if history.is_empty() {
        0
    } else {
        let total: u64 = history.iter().map(|c| u64::from(checkin_day_score(c))).sum();
        let n = active_days as u64;
        ((2 * total + n) / (2 * n)) as u32
    };

    let stored = repo::load_streak(store, user)?;
    let stored_count = stored.map_or(0, |s| s.count);
    let achievements = [
        stored_count >= 7,
        stored_count >= 30,
        active_days >= 7,
        active_days >= 30,
    ]
    .iter()
    .filter(|hit| **hit)
    .count() as u32;

    Ok(ProfileStats {
        active_days,
        average_score,
        streak: project_streak_for_display(stored.as_ref(), today),
        achievements,
    })
}

fn profile(store: &mut dyn KvStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let stats = profile_stats(store, &session.user, session.today)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        let data = vec![
            vec!["Active days".to_string(), stats.active_days.to_string()],
            vec!["Average score".to_string(), stats.average_score.to_string()],
            vec!["Current streak".to_string(), stats.streak.to_string()],
            vec!["Achievements".to_string(), stats.achievements.to_string()],
        ];
        println!("{}", pretty_table(&["Profile", session.user.as_str()], data));
    }
    Ok(())
}
