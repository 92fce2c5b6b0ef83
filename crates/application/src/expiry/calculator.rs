//! Days-left arithmetic

use domain::{CalendarDate, InventoryRecord};

/// Whole days between `today` and `expiry`
///
/// The difference is taken in absolute value: an item that expired `n` days
/// ago reports the same count as one expiring `n` days from now.
pub fn days_left(today: CalendarDate, expiry: CalendarDate) -> u64 {
    expiry.days_since(today).unsigned_abs()
}

/// Copy of `record` with its days-left count recomputed for `today`
///
/// The stored record is left untouched.
#[must_use]
pub fn refresh_days_left(record: &InventoryRecord, today: CalendarDate) -> InventoryRecord {
    record
        .clone()
        .with_days_left(days_left(today, record.expiry_date))
}

/// Date a reminder should fire, `reminder_days` before expiry
pub fn reminder_date(expiry: CalendarDate, reminder_days: u64) -> Option<CalendarDate> {
    expiry.checked_sub_days(reminder_days)
}

#[cfg(test)]
mod tests {
    use domain::{Category, ItemId};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn future_expiry() {
        assert_eq!(days_left(date(2025, 4, 1), date(2025, 4, 3)), 2);
    }

    #[test]
    fn past_expiry_counts_the_same_way() {
        assert_eq!(days_left(date(2025, 4, 10), date(2025, 4, 1)), 9);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_left(date(2025, 4, 1), date(2025, 4, 1)), 0);
    }

    #[test]
    fn spans_leap_day_and_year_end() {
        assert_eq!(days_left(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_left(date(2025, 12, 31), date(2026, 1, 1)), 1);
        assert_eq!(days_left(date(2025, 1, 1), date(2026, 1, 1)), 365);
    }

    #[test]
    fn refresh_recomputes_without_touching_original() {
        let record = InventoryRecord::new(
            ItemId::new(),
            "Milk",
            Category::Dairy,
            date(2025, 4, 15),
            12,
        );
        let refreshed = refresh_days_left(&record, date(2025, 4, 13));
        assert_eq!(refreshed.days_left, 2);
        assert_eq!(record.days_left, 12);
        assert_eq!(refreshed.id, record.id);
    }

    #[test]
    fn reminder_two_days_before() {
        assert_eq!(reminder_date(date(2025, 4, 1), 2), Some(date(2025, 3, 30)));
        assert_eq!(reminder_date(date(2025, 4, 1), 0), Some(date(2025, 4, 1)));
    }
}
