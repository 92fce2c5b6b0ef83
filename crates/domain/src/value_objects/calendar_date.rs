//! Calendar date value object
//!
//! A validated Gregorian (year, month, day) triple without time of day.
//!
//! # Examples
//!
//! ```
//! use domain::CalendarDate;
//!
//! let date = CalendarDate::new(2025, 2, 13).unwrap();
//! assert_eq!(date.to_string(), "2025-02-13");
//! assert_eq!(date.to_day_first_string(), "13/2/2025");
//!
//! // Impossible dates are rejected, never clamped
//! assert!(CalendarDate::new(2025, 2, 30).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated calendar date
///
/// Serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date, validating month and day against the Gregorian calendar
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the month is outside 1..=12 or
    /// the day does not exist in that month (leap years included).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Wrap an existing chrono date
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying chrono date
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Render as unpadded day-first `D/M/Y`
    pub fn to_day_first_string(&self) -> String {
        format!("{}/{}/{}", self.day(), self.month(), self.year())
    }

    /// Signed number of days from `earlier` to `self`
    pub fn days_since(&self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Date `days` days before this one, if representable
    #[must_use]
    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Date `days` days after this one, if representable
    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    /// Parse an ISO `YYYY-MM-DD` date
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| DomainError::InvalidDate(format!("{s}: {e}")))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
