//! Current-date port

use domain::CalendarDate;
#[cfg(test)]
use mockall::automock;

/// Source of "today" at day granularity
#[cfg_attr(test, automock)]
pub trait DateProvider: Send + Sync {
    /// Today's date, without time of day
    fn today(&self) -> CalendarDate;
}
