//! Forecast feed parsing and trip weather windows

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DomainError;
use crate::models::{FeedRecord, ForecastCoverage, ForecastDay, ForecastEntry};
use crate::types::DateRange;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Round to whole degrees, halves rounding up (-2.5 becomes -2)
pub fn round_temperature(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
}

impl TryFrom<FeedRecord> for ForecastEntry {
    type Error = DomainError;

    fn try_from(record: FeedRecord) -> Result<Self, Self::Error> {
        let timestamp = record
            .timestamp
            .as_deref()
            .and_then(parse_timestamp)
            .ok_or(DomainError::malformed("timestamp"))?;

        let temperature = record
            .temperature
            .filter(|t| t.is_finite())
            .map(round_temperature)
            .ok_or(DomainError::malformed("temperature"))?;

        let condition = record
            .condition
            .filter(|c| !c.trim().is_empty())
            .ok_or(DomainError::malformed("condition"))?;

        Ok(ForecastEntry {
            timestamp,
            temperature,
            condition,
            icon: record.icon.unwrap_or_default(),
        })
    }
}

/// Convert raw feed records, dropping the ones that cannot be read
pub fn parse_feed(records: Vec<FeedRecord>) -> Vec<ForecastEntry> {
    let total = records.len();
    let entries: Vec<ForecastEntry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match ForecastEntry::try_from(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed forecast record");
                None
            }
        })
        .collect();

    if entries.len() < total {
        tracing::debug!(kept = entries.len(), total, "Forecast feed parsed with skips");
    }
    entries
}

/// Group entries by calendar date, ascending, each day in time order
pub fn group_by_day(entries: &[ForecastEntry]) -> Vec<ForecastDay> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut days: BTreeMap<NaiveDate, Vec<ForecastEntry>> = BTreeMap::new();
    for entry in sorted {
        days.entry(entry.date()).or_default().push(entry);
    }

    days.into_iter()
        .map(|(date, entries)| ForecastDay { date, entries })
        .collect()
}

/// Entries that fall inside `range`, grouped by day.
///
/// A range with no overlap yields an empty list.
pub fn select_window(entries: &[ForecastEntry], range: &DateRange) -> Vec<ForecastDay> {
    let inside: Vec<ForecastEntry> = entries
        .iter()
        .filter(|e| range.contains(e.date()))
        .cloned()
        .collect();
    group_by_day(&inside)
}

/// Explain whether a trip's range can be served by the feed
pub fn coverage(entries: &[ForecastEntry], range: &DateRange, today: NaiveDate) -> ForecastCoverage {
    if range.end < today {
        return ForecastCoverage::TripEnded;
    }
    match entries.iter().map(ForecastEntry::date).max() {
        Some(last) if range.start <= last => ForecastCoverage::Available,
        _ => ForecastCoverage::BeyondHorizon,
    }
}
