// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const DEFAULT_DESCRIPTION: &str = "Sem descrição";
pub const CHECKIN_SPENDING_DESCRIPTION: &str = "Gasto rápido (Check-in)";
pub const CHECKIN_SPENDING_CATEGORY: &str = "others";

/// One daily self-report. Every field except the date tolerates being absent in
/// stored data; absence is scored as its own case, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRecord {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default)]
    pub water_cups: u8,
    #[serde(default)]
    pub physical_activity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending: Option<Decimal>,
}

impl CheckinRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let sleep = self.sleep_hours.unwrap_or(0.0);
        if !(1.0..=12.0).contains(&sleep) {
            return Err(ValidationError::SleepHours(sleep));
        }
        match self.mood {
            None => return Err(ValidationError::MissingMood),
            Some(m) if !(1..=5).contains(&m) => return Err(ValidationError::Mood(m)),
            Some(_) => {}
        }
        if self.water_cups > 20 {
            return Err(ValidationError::WaterCups(self.water_cups));
        }
        if let Some(s) = self.spending {
            if s < Decimal::ZERO {
                return Err(ValidationError::NegativeSpending(s));
            }
        }
        Ok(())
    }

    /// Quick spending that should become a transaction, if any.
    pub fn positive_spending(&self) -> Option<Decimal> {
        self.spending.filter(|s| *s > Decimal::ZERO)
    }
}

const MOOD_LABELS: [&str; 5] = ["Péssimo", "Ruim", "Ok", "Bom", "Ótimo"];

/// Display label for a 1-5 mood; out-of-range values read as "Ok".
pub fn mood_label(mood: Option<u8>) -> Option<&'static str> {
    mood.map(|m| {
        usize::from(m)
            .checked_sub(1)
            .and_then(|i| MOOD_LABELS.get(i))
            .copied()
            .unwrap_or("Ok")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(format!("Unknown transaction type '{}' (use expense|income)", other)),
        }
    }
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    #[serde(default = "default_description")]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub from_checkin: bool,
}

impl Transaction {
    /// Deterministic id shared by every re-submission of the same day's check-in spending.
    pub fn checkin_id(date: NaiveDate) -> String {
        format!("checkin_{}", date)
    }

    pub fn from_checkin(date: NaiveDate, amount: Decimal) -> Self {
        Transaction {
            id: Self::checkin_id(date),
            kind: TransactionType::Expense,
            amount,
            category: CHECKIN_SPENDING_CATEGORY.to_string(),
            description: CHECKIN_SPENDING_DESCRIPTION.to_string(),
            date,
            from_checkin: true,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn validate(&self, catalog: &[CategoryDef]) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if !catalog.iter().any(|c| c.id == self.category) {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }
}

/// Empty description falls back to the placeholder text.
pub fn normalize_description(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
}

impl CategoryDef {
    pub fn new(id: &str, name: &str) -> Self {
        CategoryDef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Expense categories in display order.
pub static DEFAULT_CATALOG: Lazy<Vec<CategoryDef>> = Lazy::new(|| {
    vec![
        CategoryDef::new("food", "Alimentação"),
        CategoryDef::new("transport", "Transporte"),
        CategoryDef::new("leisure", "Lazer"),
        CategoryDef::new("health", "Saúde"),
        CategoryDef::new("others", "Outros"),
    ]
});

/// Names of the wellness activities completed on one day, in completion order.
pub type WellnessActivityLog = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellnessActivity {
    pub title: &'static str,
    pub minutes: u32,
}

pub const WELLNESS_ACTIVITIES: &[WellnessActivity] = &[
    WellnessActivity { title: "Respiração Guiada", minutes: 5 },
    WellnessActivity { title: "Meditação Matinal", minutes: 10 },
    WellnessActivity { title: "Relaxamento Noturno", minutes: 15 },
    WellnessActivity { title: "Alongamento Rápido", minutes: 7 },
    WellnessActivity { title: "Yoga para Iniciantes", minutes: 20 },
];

pub fn find_activity(title: &str) -> Option<&'static WellnessActivity> {
    let needle = title.trim();
    WELLNESS_ACTIVITIES
        .iter()
        .find(|a| a.title.eq_ignore_ascii_case(needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    pub count: u32,
    pub last_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sleep,
    Mood,
    Activity,
    Finance,
}

impl Dimension {
    /// Tie-break order for weakest/strongest selection.
    pub const PRIORITY: [Dimension; 4] = [
        Dimension::Sleep,
        Dimension::Mood,
        Dimension::Activity,
        Dimension::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Sleep => "sleep",
            Dimension::Mood => "mood",
            Dimension::Activity => "activity",
            Dimension::Finance => "finance",
        }
    }
}

/// The four 0-10 sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub sleep: u8,
    pub mood: u8,
    pub activity: u8,
    pub finance: u8,
}

impl DimensionScores {
    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Sleep => self.sleep,
            Dimension::Mood => self.mood,
            Dimension::Activity => self.activity,
            Dimension::Finance => self.finance,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::PRIORITY.into_iter().map(|d| (d, self.get(d)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilibriumResult {
    pub score: u32,
    pub scores: DimensionScores,
    pub insight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub name: String,
    pub total: Decimal,
    pub percentage: u32,
}
