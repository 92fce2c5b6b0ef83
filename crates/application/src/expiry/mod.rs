//! Expiry-date engine
//!
//! Turns noisy recognized label text into a calendar date and a days-left
//! count:
//!
//! ```text
//! raw text -> extract_date -> DateCandidate -> normalize_candidate
//!          -> CalendarDate -> days_left -> build_record
//! ```
//!
//! Everything in here is synchronous and pure. Nothing logs; failures are
//! returned as [`ExtractionError`] values for the caller to present.

mod calculator;
mod error;
mod normalizer;
mod pattern_matcher;
mod record_builder;

use domain::CalendarDate;
use serde::Serialize;

pub use calculator::{days_left, refresh_days_left, reminder_date};
pub use error::ExtractionError;
pub use normalizer::{DateOrder, date_order, normalize, normalize_candidate};
pub use pattern_matcher::{CandidateKind, DateCandidate, extract_date};
pub use record_builder::build_record;

/// Result of reading an expiry date out of recognized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryReading {
    /// The substring the date was read from
    pub candidate: DateCandidate,
    /// Normalized expiry date
    pub expiry: CalendarDate,
    /// Whole days between today and the expiry date
    pub days_left: u64,
}

/// Run the full extraction pipeline on recognized text
///
/// # Errors
///
/// `NoPatternMatch` when no candidate is found, otherwise whatever
/// normalization reports for the chosen candidate.
pub fn read_expiry(text: &str, today: CalendarDate) -> Result<ExpiryReading, ExtractionError> {
    let candidate = extract_date(text).ok_or(ExtractionError::NoPatternMatch)?;
    let expiry = normalize_candidate(&candidate)?;
    Ok(ExpiryReading {
        days_left: days_left(today, expiry),
        candidate,
        expiry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn labeled_text_reads_through() {
        let reading = read_expiry("EXP: 05/06/2025 BATCH123", date(2025, 6, 1)).unwrap();
        assert_eq!(reading.candidate.text(), "05/06/2025");
        assert_eq!(reading.expiry, date(2025, 6, 5));
        assert_eq!(reading.days_left, 4);
    }

    #[test]
    fn month_name_text_reads_through() {
        let reading = read_expiry("Best before Mar 10, 2025", date(2025, 3, 1)).unwrap();
        assert_eq!(reading.expiry, date(2025, 3, 10));
        assert_eq!(reading.days_left, 9);
    }

    #[test]
    fn separatorless_text_reads_through_fallback() {
        let reading = read_expiry("15 04 2025", date(2025, 4, 10)).unwrap();
        assert_eq!(reading.candidate.kind(), CandidateKind::NumericGroups);
        assert_eq!(reading.expiry, date(2025, 4, 15));
        assert_eq!(reading.days_left, 5);
    }

    #[test]
    fn ascii_date_after_foreign_numerals_reads_through() {
        let reading = read_expiry("PKD ١٢/٠٣/٢٠٢٥ 15/04/2025", date(2025, 4, 1)).unwrap();
        assert_eq!(reading.expiry, date(2025, 4, 15));
        assert_eq!(reading.days_left, 14);
    }

    #[test]
    fn year_first_with_impossible_month_is_rejected() {
        let err = read_expiry("Packed 2025-25-04", date(2025, 4, 1)).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidCalendarDate { month: 25, .. }));
    }

    #[test]
    fn empty_text_has_no_match() {
        assert_eq!(
            read_expiry("", date(2025, 1, 1)),
            Err(ExtractionError::NoPatternMatch)
        );
    }

    #[test]
    fn invalid_date_is_reported() {
        let err = read_expiry("Use by 31/02/2025", date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidCalendarDate { .. }));
    }
}
