//! Date candidate extraction from recognized label text
//!
//! Patterns are tried in strict priority order and the leftmost match of the
//! first pattern that matches anywhere wins. Labeled dates come first because
//! unlabeled digit runs (batch codes, prices) are common false positives.
//! When no pattern matches, integer runs are scanned in threes, since
//! recognizers often drop separator characters.
//!
//! Digits and word boundaries are ASCII-only; other numeral scripts are
//! treated as plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

/// Which pattern produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// `best before`, `exp`, `expiry` or `use by` followed by `D/M/Y`
    Labeled,
    /// Unlabeled `D/M/Y`
    DayFirst,
    /// Unlabeled `Y/M/D`
    YearFirst,
    /// `Mon D, Y` or `D Mon Y`
    MonthName,
    /// Three consecutive integers found by the fallback scan
    NumericGroups,
}

impl CandidateKind {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Labeled => "labeled",
            Self::DayFirst => "day-first",
            Self::YearFirst => "year-first",
            Self::MonthName => "month name",
            Self::NumericGroups => "numeric groups",
        }
    }
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A substring of recognized text believed to encode a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCandidate {
    text: String,
    kind: CandidateKind,
}

impl DateCandidate {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn kind(&self) -> CandidateKind {
        self.kind
    }
}

impl std::fmt::Display for DateCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.kind)
    }
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[allow(clippy::expect_used)] // Infallible with valid static patterns
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Failed to compile date pattern")
}

static LABELED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?-u:\b)(?:best\s+before|use\s+by|exp(?:iry|\.)?)\s*:?\s*([0-9]{1,2}[/.\-][0-9]{1,2}[/.\-][0-9]{2,4})(?-u:\b)",
    )
});
static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?-u:\b)[0-9]{1,2}[/.\-][0-9]{1,2}[/.\-][0-9]{2,4}(?-u:\b)"));
static YEAR_FIRST: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?-u:\b)[0-9]{2,4}[/.\-][0-9]{1,2}[/.\-][0-9]{1,2}(?-u:\b)"));
static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?-u:\b)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+([0-9]{1,2}),?\s+([0-9]{2,4})(?-u:\b)",
    )
});
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?-u:\b)([0-9]{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+([0-9]{2,4})(?-u:\b)",
    )
});
static INTEGER_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?-u:\b)[0-9]+(?-u:\b)"));

/// Find the best date candidate in recognized text
///
/// Returns `None` when neither a pattern nor the numeric-group scan finds
/// anything.
pub fn extract_date(text: &str) -> Option<DateCandidate> {
    if let Some(date) = LABELED.captures(text).and_then(|c| c.get(1)) {
        return Some(DateCandidate::new(date.as_str(), CandidateKind::Labeled));
    }

    let ordered = [
        (&*DAY_FIRST, CandidateKind::DayFirst),
        (&*YEAR_FIRST, CandidateKind::YearFirst),
        (&*MONTH_DAY_YEAR, CandidateKind::MonthName),
        (&*DAY_MONTH_YEAR, CandidateKind::MonthName),
    ];
    for (pattern, kind) in ordered {
        if let Some(found) = pattern.find(text) {
            return Some(DateCandidate::new(found.as_str(), kind));
        }
    }

    scan_numeric_groups(text)
}

/// Slide a window of three integers and accept the first plausible day/month
fn scan_numeric_groups(text: &str) -> Option<DateCandidate> {
    let numbers: Vec<Option<u64>> = INTEGER_RUN
        .find_iter(text)
        .map(|m| m.as_str().parse().ok())
        .collect();

    numbers.windows(3).find_map(|window| match *window {
        [Some(day), Some(month), Some(year)]
            if (1..=31).contains(&day) && (1..=12).contains(&month) =>
        {
            Some(DateCandidate::new(
                format!("{day}/{month}/{year}"),
                CandidateKind::NumericGroups,
            ))
        },
        _ => None,
    })
}

/// Rewrite a month-name candidate as `D/M/Y`
pub(crate) fn month_name_to_numeric(text: &str) -> Option<String> {
    let (day, month, year) = MONTH_DAY_YEAR
        .captures(text)
        .and_then(|c| month_parts(&c, 2, 1, 3))
        .or_else(|| {
            DAY_MONTH_YEAR
                .captures(text)
                .and_then(|c| month_parts(&c, 1, 2, 3))
        })?;
    Some(format!("{day}/{month}/{year}"))
}

fn month_parts<'t>(
    captures: &Captures<'t>,
    day: usize,
    month: usize,
    year: usize,
) -> Option<(&'t str, usize, &'t str)> {
    let name = captures.get(month)?.as_str().to_lowercase();
    let number = MONTHS.iter().position(|m| *m == name)? + 1;
    Some((
        captures.get(day)?.as_str(),
        number,
        captures.get(year)?.as_str(),
    ))
}
