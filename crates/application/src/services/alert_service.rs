//! Alert service for items close to expiry
//!
//! Scans the inventory with days-left refreshed to today and prepares alerts
//! for everything inside the expiring-soon window, most urgent first.

use std::sync::Arc;

use domain::{ExpiryUrgency, InventoryRecord, UrgencyThresholds};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::expiry;
use crate::ports::{DateProvider, InventoryStorePort};

/// An alert ready to be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryAlert {
    /// The record, with days-left as of today
    pub record: InventoryRecord,
    pub urgency: ExpiryUrgency,
    /// The formatted message text
    pub message: String,
}

/// Configuration for the alert service
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Items with at most this many days left are alerted (default: 3)
    pub expiring_soon_days: u64,
    /// Urgency classification thresholds
    pub thresholds: UrgencyThresholds,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: 3,
            thresholds: UrgencyThresholds::default(),
        }
    }
}

/// Service that finds items about to expire
pub struct AlertService<S: InventoryStorePort> {
    store: Arc<S>,
    clock: Arc<dyn DateProvider>,
    config: AlertConfig,
}

impl<S: InventoryStorePort> std::fmt::Debug for AlertService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: InventoryStorePort> AlertService<S> {
    /// Create a new alert service
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<dyn DateProvider>, config: AlertConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Urgency of an item with `days_left` days
    #[must_use]
    pub const fn urgency_of(&self, days_left: u64) -> ExpiryUrgency {
        ExpiryUrgency::classify(days_left, &self.config.thresholds)
    }

    /// Alerts for every item inside the expiring-soon window
    ///
    /// Sorted by days left, ascending. Ties keep insertion order.
    #[instrument(skip(self))]
    pub async fn expiring_soon(&self) -> Result<Vec<ExpiryAlert>, ApplicationError> {
        let today = self.clock.today();
        let mut due: Vec<InventoryRecord> = self
            .store
            .list()
            .await?
            .iter()
            .map(|r| expiry::refresh_days_left(r, today))
            .filter(|r| r.days_left <= self.config.expiring_soon_days)
            .collect();

        if due.is_empty() {
            debug!("Nothing expiring soon");
            return Ok(Vec::new());
        }

        due.sort_by_key(|r| r.days_left);
        info!(count = due.len(), "Items expiring soon");

        Ok(due
            .into_iter()
            .map(|record| ExpiryAlert {
                urgency: self.urgency_of(record.days_left),
                message: alert_message(&record),
                record,
            })
            .collect())
    }

    /// One-line summary of the expiring-soon window, if anything is in it
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<Option<String>, ApplicationError> {
        let count = self.expiring_soon().await?.len();
        Ok((count > 0).then(|| {
            format!(
                "You have {count} {} expiring in the next {} days",
                if count == 1 { "item" } else { "items" },
                self.config.expiring_soon_days
            )
        }))
    }
}

fn alert_message(record: &InventoryRecord) -> String {
    let unit = if record.days_left == 1 { "day" } else { "days" };
    format!("{} will expire in {} {unit}", record.name, record.days_left)
}

#[cfg(test)]
mod tests {
    use domain::{CalendarDate, Category, ItemId};

    use super::*;
    use crate::ports::{MockDateProvider, MockInventoryStorePort};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn record(name: &str, expiry: CalendarDate) -> InventoryRecord {
        InventoryRecord::new(ItemId::new(), name, Category::Other, expiry, 0)
    }

    fn service(records: Vec<InventoryRecord>) -> AlertService<MockInventoryStorePort> {
        let mut store = MockInventoryStorePort::new();
        store
            .expect_list()
            .returning(move || Ok(records.clone()));
        let mut clock = MockDateProvider::new();
        clock.expect_today().return_const(date(2025, 4, 1));
        AlertService::new(Arc::new(store), Arc::new(clock), AlertConfig::default())
    }

    #[tokio::test]
    async fn only_items_inside_window_sorted_ascending() {
        let svc = service(vec![
            record("Cheese", date(2025, 4, 4)),
            record("Ham", date(2025, 4, 20)),
            record("Milk", date(2025, 4, 2)),
            record("Bread", date(2025, 4, 1)),
        ]);

        let alerts = svc.expiring_soon().await.unwrap();
        let names: Vec<&str> = alerts.iter().map(|a| a.record.name.as_str()).collect();
        assert_eq!(names, ["Bread", "Milk", "Cheese"]);
        assert_eq!(alerts[0].record.days_left, 0);
        assert_eq!(alerts[2].record.days_left, 3);
    }

    #[tokio::test]
    async fn alert_messages_and_urgency() {
        let svc = service(vec![
            record("Milk", date(2025, 4, 2)),
            record("Cheese", date(2025, 4, 4)),
        ]);

        let alerts = svc.expiring_soon().await.unwrap();
        assert_eq!(alerts[0].message, "Milk will expire in 1 day");
        assert_eq!(alerts[0].urgency, ExpiryUrgency::Critical);
        assert_eq!(alerts[1].message, "Cheese will expire in 3 days");
        assert_eq!(alerts[1].urgency, ExpiryUrgency::Warning);
    }

    #[tokio::test]
    async fn past_expiry_is_alerted_by_absolute_distance() {
        let svc = service(vec![
            record("Old yogurt", date(2025, 3, 30)),
            record("Ancient soup", date(2025, 1, 1)),
        ]);

        let alerts = svc.expiring_soon().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].record.days_left, 2);
    }

    #[tokio::test]
    async fn summary_counts_items() {
        let svc = service(vec![
            record("Milk", date(2025, 4, 2)),
            record("Cheese", date(2025, 4, 4)),
        ]);
        assert_eq!(
            svc.summary().await.unwrap().as_deref(),
            Some("You have 2 items expiring in the next 3 days")
        );
    }

    #[tokio::test]
    async fn summary_is_none_when_nothing_due() {
        let svc = service(vec![record("Rice", date(2026, 1, 1))]);
        assert!(svc.summary().await.unwrap().is_none());
        assert!(svc.expiring_soon().await.unwrap().is_empty());
    }

    #[test]
    fn urgency_uses_configured_thresholds() {
        let svc = service(Vec::new());
        assert_eq!(svc.urgency_of(2), ExpiryUrgency::Critical);
        assert_eq!(svc.urgency_of(5), ExpiryUrgency::Warning);
        assert_eq!(svc.urgency_of(6), ExpiryUrgency::Fresh);
    }
}
