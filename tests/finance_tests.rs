// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use equilibrio::finance::{aggregate_categories, budget_progress, percent_of, summarize_month};
use equilibrio::models::{CategoryDef, Transaction, TransactionType, DEFAULT_CATALOG};
use rust_decimal::Decimal;

fn tx(kind: TransactionType, amount: &str, category: &str) -> Transaction {
    Transaction {
        id: format!("{}-{}", category, amount),
        kind,
        amount: amount.parse().unwrap(),
        category: category.into(),
        description: "Sem descrição".into(),
        date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
        from_checkin: false,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn groups_by_category_in_catalog_order() {
    let txs = vec![
        tx(TransactionType::Expense, "50", "transport"),
        tx(TransactionType::Expense, "100", "food"),
        tx(TransactionType::Expense, "50", "food"),
    ];
    let out = aggregate_categories(&txs, &DEFAULT_CATALOG);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].category, "food");
    assert_eq!(out[0].name, "Alimentação");
    assert_eq!(out[0].total, dec("150"));
    assert_eq!(out[0].percentage, 75);
    assert_eq!(out[1].category, "transport");
    assert_eq!(out[1].total, dec("50"));
    assert_eq!(out[1].percentage, 25);
    assert_eq!(out.iter().map(|c| c.percentage).sum::<u32>(), 100);
}

#[test]
fn empty_and_income_only_inputs_give_empty_result() {
    assert!(aggregate_categories(&[], &DEFAULT_CATALOG).is_empty());
    let income = vec![tx(TransactionType::Income, "1000", "food")];
    assert!(aggregate_categories(&income, &DEFAULT_CATALOG).is_empty());
}

#[test]
fn categories_outside_catalog_are_ignored() {
    let txs = vec![
        tx(TransactionType::Expense, "30", "pets"),
        tx(TransactionType::Expense, "10", "health"),
    ];
    let out = aggregate_categories(&txs, &DEFAULT_CATALOG);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, "health");
    assert_eq!(out[0].percentage, 100);

    let custom = vec![CategoryDef::new("pets", "Pets"), CategoryDef::new("health", "Saúde")];
    let out = aggregate_categories(&txs, &custom);
    assert_eq!(out[0].category, "pets");
    assert_eq!(out[0].percentage, 75);
    assert_eq!(out[1].percentage, 25);
}

#[test]
fn percentages_round_half_up() {
    assert_eq!(percent_of(dec("1"), dec("8")), 13); // 12.5
    assert_eq!(percent_of(dec("1"), dec("3")), 33);
    assert_eq!(percent_of(dec("2"), dec("3")), 67);
    assert_eq!(percent_of(dec("5"), Decimal::ZERO), 0);
}

#[test]
fn budget_progress_is_guarded_and_clamped() {
    assert_eq!(budget_progress(dec("500"), dec("2000")), 25);
    assert_eq!(budget_progress(dec("2500"), dec("2000")), 100);
    assert_eq!(budget_progress(dec("500"), Decimal::ZERO), 0);
    assert_eq!(budget_progress(dec("500"), dec("-10")), 0);
}

#[test]
fn month_summary_totals() {
    let txs = vec![
        tx(TransactionType::Income, "3000", "others"),
        tx(TransactionType::Expense, "1200.50", "food"),
        tx(TransactionType::Expense, "99.50", "leisure"),
    ];
    let s = summarize_month(&txs, dec("2000"));
    assert_eq!(s.income, dec("3000"));
    assert_eq!(s.expenses, dec("1300"));
    assert_eq!(s.balance, dec("1700"));
    assert_eq!(s.remaining, dec("700"));
    assert_eq!(s.budget_progress, 65);
}
