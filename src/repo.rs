// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read and write paths over the key-value store. Concurrent writers to the same
//! key are last-write-wins; nothing here locks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::errors::{Error, Result, ValidationError};
use crate::finance::DEFAULT_MONTHLY_BUDGET;
use crate::models::{
    find_activity, normalize_description, CategoryDef, CheckinRecord, StreakState, Transaction,
    TransactionType, WellnessActivityLog,
};
use crate::store::{keys, load_json, load_text, save_json, save_text, KvStore};
use crate::streak::advance_streak;

pub const GUEST_USER: &str = "guest";

pub fn ensure_user(user: &str) -> Result<()> {
    if user.trim().is_empty() {
        return Err(ValidationError::EmptyUser.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Settings

pub fn default_user(store: &dyn KvStore) -> Result<String> {
    let v = load_text(store, keys::DEFAULT_USER_SETTING)?;
    Ok(v.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| GUEST_USER.to_string()))
}

pub fn set_default_user(store: &mut dyn KvStore, user: &str) -> Result<()> {
    ensure_user(user)?;
    save_text(store, keys::DEFAULT_USER_SETTING, user.trim())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Check-ins

pub fn load_checkin(store: &dyn KvStore, date: NaiveDate) -> Result<Option<CheckinRecord>> {
    Ok(load_json(store, &keys::checkin(date))?)
}

/// The user's check-in for `date`. The day snapshot is shared across users, so it
/// only counts when it is unowned or owned by `user`; otherwise history decides.
pub fn load_user_checkin(
    store: &dyn KvStore,
    user: &str,
    date: NaiveDate,
) -> Result<Option<CheckinRecord>> {
    if let Some(snapshot) = load_checkin(store, date)? {
        if snapshot.user_id.as_deref().is_none_or(|owner| owner == user) {
            return Ok(Some(snapshot));
        }
    }
    Ok(load_history(store, user)?.into_iter().find(|c| c.date == date))
}

pub fn load_history(store: &dyn KvStore, user: &str) -> Result<Vec<CheckinRecord>> {
    Ok(load_json(store, &keys::checkin_history(user))?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckinOutcome {
    pub record: CheckinRecord,
    pub replaced_existing: bool,
    pub spending_transaction: Option<Transaction>,
}

/// Validates and persists a check-in: the day snapshot, the history entry for
/// that date, and the day's quick-spending expense when spending is positive.
pub fn save_checkin(
    store: &mut dyn KvStore,
    user: &str,
    mut record: CheckinRecord,
) -> Result<CheckinOutcome> {
    ensure_user(user)?;
    if let Err(e) = record.validate() {
        warn!(user, date = %record.date, error = %e, "check-in rejected");
        return Err(e.into());
    }
    record.user_id = Some(user.to_string());

    save_json(store, &keys::checkin(record.date), &record)?;

    let history_key = keys::checkin_history(user);
    let mut history: Vec<CheckinRecord> = load_json(store, &history_key)?.unwrap_or_default();
    let replaced_existing = match history.iter_mut().find(|c| c.date == record.date) {
        Some(existing) => {
            *existing = record.clone();
            true
        }
        None => {
            history.push(record.clone());
            false
        }
    };
    save_json(store, &history_key, &history)?;

    let spending_transaction = match record.positive_spending() {
        Some(amount) => {
            let tx = Transaction::from_checkin(record.date, amount);
            let mut txs = load_transactions(store, user)?;
            upsert_by_id(&mut txs, tx.clone());
            save_json(store, &keys::transactions(user), &txs)?;
            Some(tx)
        }
        None => None,
    };

    info!(
        user,
        date = %record.date,
        replaced_existing,
        spending = spending_transaction.is_some(),
        "check-in saved"
    );
    Ok(CheckinOutcome {
        record,
        replaced_existing,
        spending_transaction,
    })
}

// ---------------------------------------------------------------------------
// Transactions

pub fn load_transactions(store: &dyn KvStore, user: &str) -> Result<Vec<Transaction>> {
    Ok(load_json(store, &keys::transactions(user))?.unwrap_or_default())
}

fn upsert_by_id(txs: &mut Vec<Transaction>, tx: Transaction) {
    match txs.iter_mut().find(|t| t.id == tx.id) {
        Some(existing) => *existing = tx,
        None => txs.push(tx),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

fn next_transaction_id(existing: &[Transaction], date: NaiveDate) -> String {
    let stem = format!("tx_{}", date.format("%Y%m%d"));
    let mut n = existing.len() + 1;
    loop {
        let candidate = format!("{}_{}", stem, n);
        if !existing.iter().any(|t| t.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

pub fn add_transaction(
    store: &mut dyn KvStore,
    user: &str,
    new: NewTransaction,
    catalog: &[CategoryDef],
) -> Result<Transaction> {
    ensure_user(user)?;
    let mut txs = load_transactions(store, user)?;
    let tx = Transaction {
        id: next_transaction_id(&txs, new.date),
        kind: new.kind,
        amount: new.amount,
        category: new.category.trim().to_string(),
        description: normalize_description(new.description.as_deref()),
        date: new.date,
        from_checkin: false,
    };
    tx.validate(catalog)?;
    txs.push(tx.clone());
    save_json(store, &keys::transactions(user), &txs)?;
    debug!(user, id = %tx.id, "transaction added");
    Ok(tx)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Edits keep the id, date and check-in origin of the transaction.
pub fn update_transaction(
    store: &mut dyn KvStore,
    user: &str,
    id: &str,
    patch: TransactionPatch,
    catalog: &[CategoryDef],
) -> Result<Transaction> {
    let mut txs = load_transactions(store, user)?;
    let existing = txs
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::TransactionNotFound(id.to_string()))?;

    let mut updated = existing.clone();
    if let Some(kind) = patch.kind {
        updated.kind = kind;
    }
    if let Some(amount) = patch.amount {
        updated.amount = amount;
    }
    if let Some(category) = patch.category {
        updated.category = category.trim().to_string();
    }
    if patch.description.is_some() {
        updated.description = normalize_description(patch.description.as_deref());
    }
    updated.validate(catalog)?;
    *existing = updated.clone();

    save_json(store, &keys::transactions(user), &txs)?;
    debug!(user, id, "transaction updated");
    Ok(updated)
}

pub fn delete_transaction(store: &mut dyn KvStore, user: &str, id: &str) -> Result<Transaction> {
    let mut txs = load_transactions(store, user)?;
    let pos = txs
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| Error::TransactionNotFound(id.to_string()))?;
    let removed = txs.remove(pos);
    save_json(store, &keys::transactions(user), &txs)?;
    debug!(user, id, "transaction deleted");
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Budget

pub fn load_budget(store: &dyn KvStore, user: &str) -> Result<Decimal> {
    let key = keys::budget(user);
    match load_text(store, &key)? {
        None => Ok(DEFAULT_MONTHLY_BUDGET),
        Some(raw) => match raw.trim().parse::<Decimal>() {
            Ok(v) => Ok(v),
            Err(e) => {
                warn!(%key, %raw, error = %e, "unreadable budget, using default");
                Ok(DEFAULT_MONTHLY_BUDGET)
            }
        },
    }
}

pub fn set_budget(store: &mut dyn KvStore, user: &str, amount: Decimal) -> Result<()> {
    ensure_user(user)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount).into());
    }
    save_text(store, &keys::budget(user), &amount.to_string())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Wellness

pub fn load_activity_log(
    store: &dyn KvStore,
    user: &str,
    date: NaiveDate,
) -> Result<WellnessActivityLog> {
    Ok(load_json(store, &keys::wellness_activities(user, date))?.unwrap_or_default())
}

pub fn load_streak(store: &dyn KvStore, user: &str) -> Result<Option<StreakState>> {
    Ok(load_json(store, &keys::wellness_streak(user))?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub log: WellnessActivityLog,
    pub streak: StreakState,
}

/// Records one completed activity on `date` and writes the advanced streak back.
/// A `date` before the stored streak's last day leaves the streak untouched.
pub fn complete_activity(
    store: &mut dyn KvStore,
    user: &str,
    title: &str,
    date: NaiveDate,
) -> Result<Completion> {
    ensure_user(user)?;
    let activity = find_activity(title).ok_or_else(|| Error::UnknownActivity(title.to_string()))?;

    let log_key = keys::wellness_activities(user, date);
    let mut log: WellnessActivityLog = load_json(store, &log_key)?.unwrap_or_default();
    log.push(activity.title.to_string());
    save_json(store, &log_key, &log)?;

    let previous = load_streak(store, user)?;
    let streak = match previous {
        // Backdated completions are logged but never move the streak backwards.
        Some(p) if date < p.last_date => {
            debug!(user, %date, last_date = %p.last_date, "backdated completion, streak kept");
            p
        }
        _ => {
            let next = advance_streak(previous.as_ref(), date);
            save_json(store, &keys::wellness_streak(user), &next)?;
            next
        }
    };

    info!(user, activity = activity.title, streak = streak.count, "activity completed");
    Ok(Completion { log, streak })
}
