//! Property-based tests for the expiry-date engine

use application::{
    CandidateKind, ExtractionError, days_left, extract_date, normalize, read_expiry,
};
use domain::CalendarDate;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

// ============================================================================
// Pattern priority
// ============================================================================

proptest! {
    #[test]
    fn labeled_date_wins_over_trailing_digits(
        expiry in any_date(),
        extra in prop::collection::vec(0u32..100_000, 0..6),
    ) {
        let labeled = expiry.to_day_first_string();
        let noise: Vec<String> = extra.iter().map(ToString::to_string).collect();
        let text = format!("EXP: {labeled} {}", noise.join(" "));

        let candidate = extract_date(&text).unwrap();
        prop_assert_eq!(candidate.kind(), CandidateKind::Labeled);
        prop_assert_eq!(candidate.text(), labeled.as_str());
    }

    #[test]
    fn labeled_date_wins_over_earlier_unlabeled_date(
        packed in any_date(),
        expiry in any_date(),
    ) {
        let text = format!(
            "PKD {} BATCH 42 best before {}",
            packed.to_day_first_string(),
            expiry.to_day_first_string()
        );
        let reading = read_expiry(&text, expiry).unwrap();
        prop_assert_eq!(reading.expiry, expiry);
        prop_assert_eq!(reading.days_left, 0);
    }

    #[test]
    fn extraction_never_panics(text in ".{0,80}") {
        let _ = read_expiry(&text, date(2025, 1, 1));
    }
}

// ============================================================================
// Normalization
// ============================================================================

proptest! {
    #[test]
    fn day_first_string_is_a_fixed_point(d in any_date()) {
        prop_assert_eq!(normalize(&d.to_day_first_string()), Ok(d));
    }

    #[test]
    fn second_group_above_12_reads_month_first(
        year in 1900i32..2200,
        month in 1u32..=12,
        day in 13u32..=28,
    ) {
        let text = format!("{month}/{day}/{year}");
        prop_assert_eq!(normalize(&text), Ok(date(year, month, day)));
    }

    #[test]
    fn month_13_or_more_never_normalizes(
        first in 13u32..=31,
        year in 1900u32..2200,
    ) {
        // first group <= 31 and second > 12 reads month-first, so month = first
        let text = format!("{first}/{first}/{year}");
        let is_invalid = matches!(
            normalize(&text),
            Err(ExtractionError::InvalidCalendarDate { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn year_first_with_month_above_12_is_rejected(
        year in 1900u32..2200,
        month in 13u32..=31,
        day in 1u32..=12,
    ) {
        let text = format!("Packed {year}-{month:02}-{day:02}");
        let is_invalid = matches!(
            read_expiry(&text, date(2025, 1, 1)),
            Err(ExtractionError::InvalidCalendarDate { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn any_separator_gives_same_date(d in any_date(), sep in prop::sample::select(vec!['/', '-', '.'])) {
        let text = format!("{}{sep}{}{sep}{}", d.day(), d.month(), d.year());
        prop_assert_eq!(normalize(&text), Ok(d));
    }
}

// ============================================================================
// Days left
// ============================================================================

proptest! {
    #[test]
    fn days_left_is_symmetric(a in any_date(), b in any_date()) {
        prop_assert_eq!(days_left(a, b), days_left(b, a));
    }

    #[test]
    fn days_left_counts_added_days(d in any_date(), n in 0u64..3650) {
        let later = d.checked_add_days(n).unwrap();
        prop_assert_eq!(days_left(d, later), n);
    }
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn labeled_date_with_batch_code() {
    let candidate = extract_date("EXP: 05/06/2025 BATCH123").unwrap();
    assert_eq!(candidate.text(), "05/06/2025");
}

#[test]
fn separators_dropped_by_recognizer() {
    let candidate = extract_date("15 04 2025").unwrap();
    assert_eq!(candidate.kind(), CandidateKind::NumericGroups);
    assert_eq!(normalize(candidate.text()), Ok(date(2025, 4, 15)));
}

#[test]
fn first_group_above_12() {
    assert_eq!(normalize("13/02/2025"), Ok(date(2025, 2, 13)));
}

#[test]
fn thirteenth_month() {
    assert!(matches!(
        normalize("13/13/2025"),
        Err(ExtractionError::InvalidCalendarDate { .. })
    ));
}

#[test]
fn days_left_in_both_directions() {
    assert_eq!(days_left(date(2025, 4, 1), date(2025, 4, 3)), 2);
    assert_eq!(days_left(date(2025, 4, 10), date(2025, 4, 1)), 9);
}

#[test]
fn nothing_to_read() {
    assert_eq!(
        read_expiry("ORGANIC WHOLE MILK", date(2025, 4, 1)),
        Err(ExtractionError::NoPatternMatch)
    );
}
