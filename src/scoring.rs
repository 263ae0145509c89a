// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-dimension sub-scores (0-10) and the 0-100 composite.

use rust_decimal::Decimal;

use crate::models::{CheckinRecord, DimensionScores, Transaction, TransactionType};

pub const MAX_SUBSCORE: u8 = 10;
pub const DIMENSION_WEIGHT: f64 = 2.5;

const POINTS_PER_LOGGED_ACTIVITY: u32 = 2;
const FINANCE_NEUTRAL: u8 = 5;

/// Balance at or below this (exclusive) still earns partial finance credit.
fn overspend_floor() -> Decimal {
    Decimal::from(-500)
}

pub fn score_sleep(checkin: Option<&CheckinRecord>) -> u8 {
    let h = checkin.and_then(|c| c.sleep_hours).unwrap_or(0.0);
    if (7.0..=9.0).contains(&h) {
        10
    } else if (6.0..=10.0).contains(&h) {
        7
    } else {
        4
    }
}

pub fn score_mood(checkin: Option<&CheckinRecord>) -> u8 {
    match checkin.and_then(|c| c.mood) {
        Some(m) => m.saturating_mul(2),
        None => 0,
    }
}

pub fn score_activity(checkin: Option<&CheckinRecord>, activity_log: Option<&[String]>) -> u8 {
    let base: u32 = if checkin.is_some_and(|c| c.physical_activity) {
        u32::from(MAX_SUBSCORE)
    } else {
        0
    };
    let logged = activity_log.map_or(0, |l| l.len()) as u32;
    let total = base.saturating_add(logged.saturating_mul(POINTS_PER_LOGGED_ACTIVITY));
    total.min(u32::from(MAX_SUBSCORE)) as u8
}

/// Income minus expenses over the given transactions.
pub fn balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |acc, t| match t.kind {
        TransactionType::Income => acc + t.amount,
        TransactionType::Expense => acc - t.amount,
    })
}

pub fn score_finance(month_transactions: &[Transaction], has_any_transactions_ever: bool) -> u8 {
    if !has_any_transactions_ever {
        return FINANCE_NEUTRAL;
    }
    let bal = balance(month_transactions);
    if bal > Decimal::ZERO {
        10
    } else if bal > overspend_floor() {
        7
    } else {
        4
    }
}

/// Equal-weight composite, rounded half-up.
pub fn aggregate_score(sleep: u8, mood: u8, activity: u8, finance: u8) -> u32 {
    let sum = f64::from(sleep) + f64::from(mood) + f64::from(activity) + f64::from(finance);
    (sum * DIMENSION_WEIGHT + 0.5).floor() as u32
}

pub fn aggregate(scores: &DimensionScores) -> u32 {
    aggregate_score(scores.sleep, scores.mood, scores.activity, scores.finance)
}
