//! Weather forecast models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One 3-hour step of a forecast feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastEntry {
    /// Feed-local wall clock time, no timezone conversion applied
    pub timestamp: NaiveDateTime,
    /// Whole degrees Celsius
    pub temperature: i32,
    pub condition: String,
    pub icon: String,
}

impl ForecastEntry {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Forecast entries for a single calendar day, in time order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub entries: Vec<ForecastEntry>,
}

/// A forecast record as read off the wire, before required fields are checked
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedRecord {
    pub timestamp: Option<String>,
    pub temperature: Option<f64>,
    pub condition: Option<String>,
    pub icon: Option<String>,
}

/// Why a trip's weather window holds what it holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ForecastCoverage {
    /// The window overlaps the forecast horizon
    Available,
    /// The trip ended before today
    TripEnded,
    /// The trip starts after the last forecast date
    BeyondHorizon,
}
