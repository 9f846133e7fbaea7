//! Expense models and the closed category set

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expense logged against a trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    /// Smallest currency unit
    pub amount: i64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or replacing an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: i64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub memo: Option<String>,
}

/// Expense category.
///
/// Deserialization never fails: legacy Japanese labels map to their
/// category and any unknown string becomes [`ExpenseCategory::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ExpenseCategory {
    Transportation,
    Lodging,
    Food,
    Sightseeing,
    Other,
}

impl ExpenseCategory {
    /// Canonical display order
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Transportation,
        ExpenseCategory::Lodging,
        ExpenseCategory::Food,
        ExpenseCategory::Sightseeing,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Lodging => "lodging",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Sightseeing => "sightseeing",
            ExpenseCategory::Other => "other",
        }
    }

    /// Strict lookup by key or Japanese label
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transportation" | "交通費" => Some(ExpenseCategory::Transportation),
            "lodging" | "accommodation" | "宿泊費" => Some(ExpenseCategory::Lodging),
            "food" | "食費" => Some(ExpenseCategory::Food),
            "sightseeing" | "観光費" => Some(ExpenseCategory::Sightseeing),
            "other" | "その他" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }

    /// Lenient lookup used at every ingestion boundary
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::debug!(category = s, "Unrecognized expense category folded into other");
            ExpenseCategory::Other
        })
    }

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Transportation => "交通費",
            ExpenseCategory::Lodging => "宿泊費",
            ExpenseCategory::Food => "食費",
            ExpenseCategory::Sightseeing => "観光費",
            ExpenseCategory::Other => "その他",
        }
    }

    /// Chart color
    pub fn color(&self) -> &'static str {
        match self {
            ExpenseCategory::Transportation => "#82ca9d",
            ExpenseCategory::Lodging => "#8884d8",
            ExpenseCategory::Food => "#ffc658",
            ExpenseCategory::Sightseeing => "#ff7c7c",
            ExpenseCategory::Other => "#8dd1e1",
        }
    }
}

impl From<String> for ExpenseCategory {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl From<&str> for ExpenseCategory {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
