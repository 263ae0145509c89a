// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Consecutive-day wellness streak.
//!
//! A lapsed streak displays as 0 but keeps its stored count until the next
//! completion resets it.

use chrono::NaiveDate;

use crate::models::StreakState;
use crate::utils::days_between;

/// State after an activity is completed on `completed_on`.
pub fn advance_streak(state: Option<&StreakState>, completed_on: NaiveDate) -> StreakState {
    match state {
        Some(s) if s.last_date == completed_on => *s,
        Some(s) if days_between(s.last_date, completed_on) == 1 => StreakState {
            count: s.count.saturating_add(1),
            last_date: completed_on,
        },
        _ => StreakState {
            count: 1,
            last_date: completed_on,
        },
    }
}

/// Count to show on `today`; 0 once more than a day has passed since the last credit.
pub fn project_streak_for_display(state: Option<&StreakState>, today: NaiveDate) -> u32 {
    match state {
        Some(s) if matches!(days_between(s.last_date, today), 0 | 1) => s.count,
        _ => 0,
    }
}
