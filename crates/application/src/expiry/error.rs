//! Extraction failures

use thiserror::Error;

/// Why an expiry date could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Neither a pattern nor the numeric-group scan found a candidate
    #[error("No expiry date found in recognized text")]
    NoPatternMatch,

    /// Candidate did not split into exactly three numeric groups
    #[error("Malformed date candidate '{0}': expected three numeric groups")]
    MalformedCandidate(String),

    /// Three groups parsed but they do not form a Gregorian date
    #[error("Invalid calendar date: day {day}, month {month}, year {year}")]
    InvalidCalendarDate { year: u32, month: u32, day: u32 },
}
