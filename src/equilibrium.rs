// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::insight::select_insight;
use crate::models::{CheckinRecord, DimensionScores, EquilibriumResult, Transaction};
use crate::scoring::{aggregate, score_activity, score_finance, score_mood, score_sleep};
use crate::utils::month_transactions;

/// Raw records for one user on one day, already loaded by the caller.
#[derive(Debug, Clone, Copy)]
pub struct DayInputs<'a> {
    pub today: NaiveDate,
    pub checkin: Option<&'a CheckinRecord>,
    pub activity_log: Option<&'a [String]>,
    /// Every transaction the user has, not only this month's.
    pub transactions: &'a [Transaction],
}

pub fn dimension_scores(inputs: &DayInputs<'_>) -> DimensionScores {
    let month = month_transactions(inputs.transactions, inputs.today);
    DimensionScores {
        sleep: score_sleep(inputs.checkin),
        mood: score_mood(inputs.checkin),
        activity: score_activity(inputs.checkin, inputs.activity_log),
        finance: score_finance(&month, !inputs.transactions.is_empty()),
    }
}

pub fn evaluate(inputs: &DayInputs<'_>) -> EquilibriumResult {
    let scores = dimension_scores(inputs);
    EquilibriumResult {
        score: aggregate(&scores),
        scores,
        insight: select_insight(&scores),
    }
}
