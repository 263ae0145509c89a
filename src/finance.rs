// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{CategoryDef, CategoryTotal, Transaction, TransactionType};

pub const DEFAULT_MONTHLY_BUDGET: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Whole percentage of `part` in `whole`, half-up; 0 when `whole` is not positive.
pub fn percent_of(part: Decimal, whole: Decimal) -> u32 {
    if whole <= Decimal::ZERO {
        return 0;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Expense totals per catalog category, in catalog order, zero totals dropped.
pub fn aggregate_categories(
    transactions: &[Transaction],
    catalog: &[CategoryDef],
) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        *sums.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }

    let present: Vec<(&CategoryDef, Decimal)> = catalog
        .iter()
        .filter_map(|c| {
            sums.get(c.id.as_str())
                .copied()
                .filter(|total| *total > Decimal::ZERO)
                .map(|total| (c, total))
        })
        .collect();

    let grand_total: Decimal = present.iter().map(|(_, total)| *total).sum();
    if grand_total.is_zero() {
        return Vec::new();
    }

    present
        .into_iter()
        .map(|(c, total)| CategoryTotal {
            category: c.id.clone(),
            name: c.name.clone(),
            total,
            percentage: percent_of(total, grand_total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    pub budget_progress: u32,
}

pub fn sum_of(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Share of the budget already spent, clamped to 0..=100.
pub fn budget_progress(spent: Decimal, budget: Decimal) -> u32 {
    percent_of(spent, budget).min(100)
}

pub fn summarize_month(month_transactions: &[Transaction], budget: Decimal) -> MonthSummary {
    let income = sum_of(month_transactions, TransactionType::Income);
    let expenses = sum_of(month_transactions, TransactionType::Expense);
    MonthSummary {
        income,
        expenses,
        balance: income - expenses,
        budget,
        remaining: budget - expenses,
        budget_progress: budget_progress(expenses, budget),
    }
}
