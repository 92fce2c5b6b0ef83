//! Date provider adapters

use application::ports::DateProvider;
use chrono::Local;
use domain::CalendarDate;

/// Today's date from the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider(CalendarDate);

impl FixedDateProvider {
    #[must_use]
    pub const fn new(today: CalendarDate) -> Self {
        Self(today)
    }
}

impl DateProvider for FixedDateProvider {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_date_is_local_today() {
        let before = Local::now().date_naive();
        let today = SystemDateProvider.today().as_naive();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn fixed_date_does_not_move() {
        let date = CalendarDate::new(2025, 4, 1).unwrap();
        let clock = FixedDateProvider::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }
}
