// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use equilibrio::commands::exporter::write_transactions;
use equilibrio::models::{Transaction, TransactionType};
use rust_decimal::Decimal;

fn sample() -> Vec<Transaction> {
    let d = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
    vec![
        Transaction {
            id: "tx_20250810_1".into(),
            kind: TransactionType::Expense,
            amount: "12.34".parse().unwrap(),
            category: "food".into(),
            description: "Padaria, centro".into(),
            date: d,
            from_checkin: false,
        },
        Transaction::from_checkin(d, Decimal::from(20)),
    ]
}

#[test]
fn export_csv_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_transactions(&sample(), "csv", &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "type", "amount", "category", "description", "from_checkin"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][3], "12.34");
    assert_eq!(&rows[0][5], "Padaria, centro");
    assert_eq!(&rows[1][0], "checkin_2025-08-10");
    assert_eq!(&rows[1][6], "true");
}

#[test]
fn export_json_uses_stored_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    write_transactions(&sample(), "json", &path).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "expense");
    assert_eq!(items[0]["amount"], "12.34");
    assert_eq!(items[1]["fromCheckin"], true);
    assert_eq!(items[1]["category"], "others");
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    assert!(write_transactions(&sample(), "xml", &path).is_err());
    assert!(!path.exists());
}
