// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use equilibrio::errors::{Error, ValidationError};
use equilibrio::models::{CheckinRecord, TransactionType, DEFAULT_CATALOG};
use equilibrio::repo::{self, NewTransaction, TransactionPatch};
use equilibrio::store::{keys, load_text, KvStore, MemoryStore, SqliteStore};
use rust_decimal::Decimal;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn record(date: &str, sleep: f64, mood: u8, spending: Option<&str>) -> CheckinRecord {
    CheckinRecord {
        date: day(date),
        user_id: None,
        sleep_hours: Some(sleep),
        mood: Some(mood),
        water_cups: 6,
        physical_activity: false,
        spending: spending.map(dec),
    }
}

fn expense(amount: &str, category: &str, date: &str) -> NewTransaction {
    NewTransaction {
        kind: TransactionType::Expense,
        amount: dec(amount),
        category: category.into(),
        description: None,
        date: day(date),
    }
}

#[test]
fn checkin_resubmission_replaces_history_entry() {
    let mut store = MemoryStore::new();
    let first = repo::save_checkin(&mut store, "ana", record("2025-08-10", 6.0, 2, None)).unwrap();
    assert!(!first.replaced_existing);
    assert_eq!(first.record.user_id.as_deref(), Some("ana"));

    let second = repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 4, None)).unwrap();
    assert!(second.replaced_existing);

    repo::save_checkin(&mut store, "ana", record("2025-08-11", 7.0, 3, None)).unwrap();

    let history = repo::load_history(&store, "ana").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, day("2025-08-10"));
    assert_eq!(history[0].mood, Some(4));

    let snapshot = repo::load_checkin(&store, day("2025-08-10")).unwrap().unwrap();
    assert_eq!(snapshot.sleep_hours, Some(8.0));
    assert!(repo::load_history(&store, "bia").unwrap().is_empty());
}

#[test]
fn checkin_spending_is_one_transaction_per_day() {
    let mut store = MemoryStore::new();
    let out = repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 4, Some("25.50"))).unwrap();
    let tx = out.spending_transaction.unwrap();
    assert_eq!(tx.id, "checkin_2025-08-10");
    assert_eq!(tx.category, "others");
    assert_eq!(tx.description, "Gasto rápido (Check-in)");
    assert!(tx.from_checkin);

    repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 4, Some("40"))).unwrap();
    let txs = repo::load_transactions(&store, "ana").unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, dec("40"));

    // Zero or absent spending leaves the existing expense alone.
    let out = repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 4, Some("0"))).unwrap();
    assert!(out.spending_transaction.is_none());
    assert_eq!(repo::load_transactions(&store, "ana").unwrap().len(), 1);
}

#[test]
fn invalid_checkins_are_rejected_without_writes() {
    let mut store = MemoryStore::new();

    let err = repo::save_checkin(&mut store, "ana", record("2025-08-10", 0.5, 3, None)).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::SleepHours(_))));

    let err = repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 6, None)).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::Mood(6))));

    let mut no_mood = record("2025-08-10", 8.0, 3, None);
    no_mood.mood = None;
    let err = repo::save_checkin(&mut store, "ana", no_mood).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::MissingMood)));

    let mut flooded = record("2025-08-10", 8.0, 3, None);
    flooded.water_cups = 21;
    assert!(repo::save_checkin(&mut store, "ana", flooded).is_err());

    let err = repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 3, Some("-1"))).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::NegativeSpending(_))));

    let err = repo::save_checkin(&mut store, " ", record("2025-08-10", 8.0, 3, None)).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::EmptyUser)));

    assert!(store.is_empty());
}

#[test]
fn transaction_crud() {
    let mut store = MemoryStore::new();
    let a = repo::add_transaction(&mut store, "ana", expense("12.30", "food", "2025-08-10"), &DEFAULT_CATALOG).unwrap();
    assert_eq!(a.id, "tx_20250810_1");
    assert_eq!(a.description, "Sem descrição");
    assert!(!a.from_checkin);

    let mut with_desc = expense("8", "transport", "2025-08-10");
    with_desc.description = Some("  Ônibus ".into());
    let b = repo::add_transaction(&mut store, "ana", with_desc, &DEFAULT_CATALOG).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(b.description, "Ônibus");

    let edited = repo::update_transaction(
        &mut store,
        "ana",
        &a.id,
        TransactionPatch {
            amount: Some(dec("15")),
            category: Some("leisure".into()),
            ..Default::default()
        },
        &DEFAULT_CATALOG,
    )
    .unwrap();
    assert_eq!(edited.amount, dec("15"));
    assert_eq!(edited.category, "leisure");
    assert_eq!(edited.date, a.date);

    let removed = repo::delete_transaction(&mut store, "ana", &b.id).unwrap();
    assert_eq!(removed.id, b.id);
    let left = repo::load_transactions(&store, "ana").unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0], edited);

    let err = repo::delete_transaction(&mut store, "ana", "nope").unwrap_err();
    assert!(matches!(err, Error::TransactionNotFound(_)));
}

#[test]
fn transaction_validation() {
    let mut store = MemoryStore::new();
    let err = repo::add_transaction(&mut store, "ana", expense("0", "food", "2025-08-10"), &DEFAULT_CATALOG).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::NonPositiveAmount(_))));

    let err = repo::add_transaction(&mut store, "ana", expense("10", "pets", "2025-08-10"), &DEFAULT_CATALOG).unwrap_err();
    assert!(matches!(err, Error::Invalid(ValidationError::UnknownCategory(_))));

    let tx = repo::add_transaction(&mut store, "ana", expense("10", "food", "2025-08-10"), &DEFAULT_CATALOG).unwrap();
    let bad = TransactionPatch {
        amount: Some(dec("-3")),
        ..Default::default()
    };
    assert!(repo::update_transaction(&mut store, "ana", &tx.id, bad, &DEFAULT_CATALOG).is_err());
    assert_eq!(repo::load_transactions(&store, "ana").unwrap()[0].amount, dec("10"));
}

#[test]
fn budget_defaults_and_updates() {
    let mut store = MemoryStore::new();
    assert_eq!(repo::load_budget(&store, "ana").unwrap(), dec("2000"));

    repo::set_budget(&mut store, "ana", dec("1500.50")).unwrap();
    assert_eq!(repo::load_budget(&store, "ana").unwrap(), dec("1500.50"));
    assert_eq!(repo::load_budget(&store, "bia").unwrap(), dec("2000"));

    assert!(repo::set_budget(&mut store, "ana", Decimal::ZERO).is_err());

    store.set(&keys::budget("bia"), b"lots").unwrap();
    assert_eq!(repo::load_budget(&store, "bia").unwrap(), dec("2000"));
}

#[test]
fn completing_activities_logs_and_advances_streak() {
    let mut store = MemoryStore::new();
    let d1 = day("2025-08-10");
    let d2 = day("2025-08-11");

    let c = repo::complete_activity(&mut store, "ana", "meditação matinal", d1).unwrap();
    assert_eq!(c.log, vec!["Meditação Matinal".to_string()]);
    assert_eq!(c.streak.count, 1);

    let c = repo::complete_activity(&mut store, "ana", "Respiração Guiada", d1).unwrap();
    assert_eq!(c.log.len(), 2);
    assert_eq!(c.streak.count, 1);

    let c = repo::complete_activity(&mut store, "ana", "Yoga para Iniciantes", d2).unwrap();
    assert_eq!(c.log.len(), 1);
    assert_eq!(c.streak.count, 2);
    assert_eq!(repo::load_streak(&store, "ana").unwrap().unwrap().last_date, d2);
    assert_eq!(repo::load_activity_log(&store, "ana", d1).unwrap().len(), 2);

    let err = repo::complete_activity(&mut store, "ana", "Parkour", d2).unwrap_err();
    assert!(matches!(err, Error::UnknownActivity(_)));
}

#[test]
fn default_user_setting() {
    let mut store = MemoryStore::new();
    assert_eq!(repo::default_user(&store).unwrap(), "guest");
    repo::set_default_user(&mut store, " ana ").unwrap();
    assert_eq!(repo::default_user(&store).unwrap(), "ana");
    assert!(repo::set_default_user(&mut store, "").is_err());
}

#[test]
fn sqlite_store_persists_camel_case_json() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    repo::save_checkin(&mut store, "ana", record("2025-08-10", 7.5, 5, Some("12"))).unwrap();

    let raw = load_text(&store, "checkin_2025-08-10").unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["sleepHours"], 7.5);
    assert_eq!(v["userId"], "ana");
    assert_eq!(v["physicalActivity"], false);

    let raw = load_text(&store, "transactions_ana").unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v[0]["type"], "expense");
    assert_eq!(v[0]["fromCheckin"], true);

    let n: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 3);

    // Overwrite keeps one row per key.
    repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 4, None)).unwrap();
    let n: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 3);
}

#[test]
fn user_checkin_falls_back_to_own_history() {
    let mut store = MemoryStore::new();
    let d = day("2025-08-10");
    repo::save_checkin(&mut store, "ana", record("2025-08-10", 8.0, 5, None)).unwrap();
    repo::save_checkin(&mut store, "bia", record("2025-08-10", 6.0, 2, None)).unwrap();

    let ana = repo::load_user_checkin(&store, "ana", d).unwrap().unwrap();
    assert_eq!(ana.mood, Some(5));
    let bia = repo::load_user_checkin(&store, "bia", d).unwrap().unwrap();
    assert_eq!(bia.mood, Some(2));
    assert!(repo::load_user_checkin(&store, "caio", d).unwrap().is_none());

    // Snapshots written without an owner still read for anyone.
    let mut legacy = record("2025-08-11", 7.0, 3, None);
    legacy.user_id = None;
    equilibrio::store::save_json(&mut store, &keys::checkin(day("2025-08-11")), &legacy).unwrap();
    let got = repo::load_user_checkin(&store, "caio", day("2025-08-11")).unwrap().unwrap();
    assert_eq!(got.mood, Some(3));
}

#[test]
fn backdated_completion_keeps_live_streak() {
    let mut store = MemoryStore::new();
    for i in 0..6u64 {
        let d = day("2025-08-15") + chrono::Days::new(i);
        repo::complete_activity(&mut store, "ana", "Respiração Guiada", d).unwrap();
    }

    let c = repo::complete_activity(&mut store, "ana", "Meditação Matinal", day("2025-08-10")).unwrap();
    assert_eq!(c.log, vec!["Meditação Matinal".to_string()]);
    assert_eq!(c.streak.count, 6);
    assert_eq!(c.streak.last_date, day("2025-08-20"));

    let stored = repo::load_streak(&store, "ana").unwrap().unwrap();
    assert_eq!(stored.count, 6);
    assert_eq!(stored.last_date, day("2025-08-20"));

    // The streak continues normally afterwards.
    let c = repo::complete_activity(&mut store, "ana", "Yoga para Iniciantes", day("2025-08-21")).unwrap();
    assert_eq!(c.streak.count, 7);
}
