//! Calendar day and daily seed utilities
//!
//! Selection works at calendar-day granularity in a single reference time
//! zone (UTC), so every visitor resolves the same day for the same instant.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// UTC calendar day containing `instant`
pub fn calendar_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Integer seed derived from year, month and day only (`YYYYMMDD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DailySeed(i64);

impl DailySeed {
    /// Seed for a calendar day, e.g. 2024-06-15 -> 20240615
    pub fn from_date(day: NaiveDate) -> Self {
        let year = i64::from(day.year());
        let month = i64::from(day.month());
        let date = i64::from(day.day());
        Self(year * 10_000 + month * 100 + date)
    }

    /// Seed for the UTC calendar day containing `instant`
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self::from_date(calendar_day(instant))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for DailySeed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DailySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
