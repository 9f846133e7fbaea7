//! Nearest upcoming trip selection

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::models::Trip;

/// Offset used when none is configured: +09:00
pub const DEFAULT_UTC_OFFSET_SECONDS: i32 = 9 * 3600;

/// Calendar date of `now` at the given UTC offset.
///
/// An out-of-range offset falls back to UTC.
pub fn local_today(now: DateTime<Utc>, utc_offset_seconds: i32) -> NaiveDate {
    match FixedOffset::east_opt(utc_offset_seconds) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => {
            tracing::warn!(utc_offset_seconds, "Invalid UTC offset, using UTC");
            now.date_naive()
        }
    }
}

/// The trip with the earliest start date on or after `today`.
///
/// Trips sharing a start date are ordered by id, so the result does not
/// depend on input order.
pub fn nearest_upcoming_trip_on(trips: &[Trip], today: NaiveDate) -> Option<&Trip> {
    trips
        .iter()
        .filter(|t| t.start_date >= today)
        .min_by_key(|t| (t.start_date, t.id))
}

/// Same as [`nearest_upcoming_trip_on`], with `today` derived from `now`
pub fn nearest_upcoming_trip(
    trips: &[Trip],
    now: DateTime<Utc>,
    utc_offset_seconds: i32,
) -> Option<&Trip> {
    nearest_upcoming_trip_on(trips, local_today(now, utc_offset_seconds))
}
