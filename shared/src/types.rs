//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::validation(
                "end_date",
                "End date must be on or after the start date",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(date("2025-06-02"), date("2025-06-03")).unwrap();
        assert!(range.contains(date("2025-06-02")));
        assert!(range.contains(date("2025-06-03")));
        assert!(!range.contains(date("2025-06-01")));
        assert!(!range.contains(date("2025-06-04")));
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date("2025-06-02"), date("2025-06-02")).unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = DateRange::new(date("2025-06-03"), date("2025-06-02")).unwrap_err();
        assert_eq!(err.field(), "end_date");
    }
}
