// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Opaque key-value storage and the key naming the screens agree on.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{StoreError, StoreResult};

pub trait KvStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()>;
}

pub mod keys {
    use chrono::NaiveDate;

    pub fn checkin(date: NaiveDate) -> String {
        format!("checkin_{}", date)
    }

    pub fn checkin_history(user: &str) -> String {
        format!("checkin_history_{}", user)
    }

    pub fn transactions(user: &str) -> String {
        format!("transactions_{}", user)
    }

    pub fn budget(user: &str) -> String {
        format!("budget_{}", user)
    }

    pub fn wellness_activities(user: &str, date: NaiveDate) -> String {
        format!("wellness_activities_{}_{}", user, date)
    }

    pub fn wellness_streak(user: &str) -> String {
        format!("wellness_streak_{}", user)
    }

    pub const DEFAULT_USER_SETTING: &str = "settings_default_user";
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Store backed by a single `kv` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> StoreResult<Self> {
        init_schema(&conn)?;
        Ok(SqliteStore { conn })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn init_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value BLOB NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let v: Option<Vec<u8>> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> StoreResult<Option<T>> {
    match store.get(key)? {
        None => Ok(None),
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            }),
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KvStore,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    tracing::debug!(key, bytes = bytes.len(), "store write");
    store.set(key, &bytes)
}

/// Plain string values such as the budget amount and settings.
pub fn load_text(store: &dyn KvStore, key: &str) -> StoreResult<Option<String>> {
    match store.get(key)? {
        None => Ok(None),
        Some(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StoreError::NotUtf8 {
                key: key.to_string(),
            }),
    }
}

pub fn save_text(store: &mut dyn KvStore, key: &str, value: &str) -> StoreResult<()> {
    tracing::debug!(key, "store write");
    store.set(key, value.as_bytes())
}
