//! Trip models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DateRange;

/// Where a trip goes: region, localized city name, and the English name
/// used for forecast lookups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub region: String,
    pub city_name: String,
    pub city_en: String,
}

/// A user-owned travel plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Smallest currency unit
    pub budget: i64,
    pub destination: Destination,
    #[serde(default)]
    pub memo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Fields accepted when creating or replacing a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub budget: i64,
    pub destination: Destination,
    pub memo: Option<String>,
}
