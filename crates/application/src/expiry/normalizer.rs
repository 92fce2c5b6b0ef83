//! Candidate normalization into a calendar date
//!
//! Day/month ordering is resolved with one fixed rule and no locale
//! awareness: when the first group can be a day and the second a month the
//! candidate is read day-first, otherwise month-first. `03/04/2025` is
//! therefore always 3 April.

use domain::CalendarDate;

use super::error::ExtractionError;
use super::pattern_matcher::{CandidateKind, DateCandidate, month_name_to_numeric};

const SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Order in which the first two numeric groups are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// (day, month, year)
    DayMonthYear,
    /// (month, day, year)
    MonthDayYear,
}

/// Decide how to read the first two groups of a candidate
#[must_use]
pub const fn date_order(first: u32, second: u32) -> DateOrder {
    if first <= 31 && second <= 12 {
        DateOrder::DayMonthYear
    } else {
        DateOrder::MonthDayYear
    }
}

/// Parse a candidate string into a calendar date
///
/// Everything except digits and `/ - .` is stripped first, so a leading
/// label such as `EXP:` is harmless. Two-digit years are kept as-is.
///
/// # Errors
///
/// `MalformedCandidate` unless exactly three numeric groups remain,
/// `InvalidCalendarDate` when the groups do not form a Gregorian date.
pub fn normalize(candidate: &str) -> Result<CalendarDate, ExtractionError> {
    let [first, second, year] = numeric_groups(candidate)?;

    let (day, month) = match date_order(first, second) {
        DateOrder::DayMonthYear => (first, second),
        DateOrder::MonthDayYear => (second, first),
    };

    calendar_date(year, month, day)
}

fn calendar_date(year: u32, month: u32, day: u32) -> Result<CalendarDate, ExtractionError> {
    let invalid = || ExtractionError::InvalidCalendarDate { year, month, day };
    let signed_year = i32::try_from(year).map_err(|_| invalid())?;
    CalendarDate::new(signed_year, month, day).map_err(|_| invalid())
}

/// Normalize a candidate according to the pattern that produced it
///
/// Year-first candidates are read as (year, month, day) with no reordering.
/// Month-name candidates are rewritten as `D/M/Y` before going through
/// [`normalize`]; all other kinds go straight through.
///
/// # Errors
///
/// Same as [`normalize`].
pub fn normalize_candidate(candidate: &DateCandidate) -> Result<CalendarDate, ExtractionError> {
    match candidate.kind() {
        CandidateKind::YearFirst => {
            let [year, month, day] = numeric_groups(candidate.text())?;
            calendar_date(year, month, day)
        },
        CandidateKind::MonthName => {
            let numeric = month_name_to_numeric(candidate.text())
                .ok_or_else(|| ExtractionError::MalformedCandidate(candidate.text().to_string()))?;
            normalize(&numeric)
        },
        CandidateKind::Labeled | CandidateKind::DayFirst | CandidateKind::NumericGroups => {
            normalize(candidate.text())
        },
    }
}

fn numeric_groups(candidate: &str) -> Result<[u32; 3], ExtractionError> {
    let malformed = || ExtractionError::MalformedCandidate(candidate.to_string());

    let cleaned: String = candidate
        .chars()
        .filter(|c| c.is_ascii_digit() || SEPARATORS.contains(c))
        .collect();
    let groups: Vec<&str> = cleaned
        .split(SEPARATORS)
        .filter(|group| !group.is_empty())
        .collect();

    let [a, b, c] = groups.as_slice() else {
        return Err(malformed());
    };
    let parse = |group: &str| group.parse::<u32>().map_err(|_| malformed());
    Ok([parse(*a)?, parse(*b)?, parse(*c)?])
}
