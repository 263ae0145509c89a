// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored value under key '{key}' is not valid: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored value under key '{key}' is not UTF-8")]
    NotUtf8 { key: String },
}

/// Range checks applied on the write path before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Sleep must be between 1 and 12 hours (got {0})")]
    SleepHours(f64),

    #[error("Mood must be between 1 and 5 (got {0})")]
    Mood(u8),

    #[error("Mood is required")]
    MissingMood,

    #[error("Water must be between 0 and 20 cups (got {0})")]
    WaterCups(u8),

    #[error("Spending cannot be negative (got {0})")]
    NegativeSpending(rust_decimal::Decimal),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(rust_decimal::Decimal),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("User id cannot be empty")]
    EmptyUser,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Transaction '{0}' not found")]
    TransactionNotFound(String),

    #[error("Unknown wellness activity '{0}'")]
    UnknownActivity(String),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
