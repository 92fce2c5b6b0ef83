//! Inventory and alert configuration.

use application::{AlertConfig, InventoryServiceConfig};
use domain::UrgencyThresholds;
use serde::{Deserialize, Serialize};

/// Inventory behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAppConfig {
    /// Quantity recorded for scanned items
    #[serde(default = "default_quantity")]
    pub default_quantity: u32,

    /// Items with at most this many days left show up in alerts
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: u64,

    /// Days left at or below which an item is critical
    #[serde(default = "default_critical_days")]
    pub critical_days: u64,

    /// Days left at or below which an item is expiring soon
    #[serde(default = "default_warning_days")]
    pub warning_days: u64,

    /// Days before expiry a reminder is planned
    #[serde(default = "default_reminder_days")]
    pub reminder_days: u64,
}

const fn default_quantity() -> u32 {
    1
}

const fn default_expiring_soon_days() -> u64 {
    3
}

const fn default_critical_days() -> u64 {
    2
}

const fn default_warning_days() -> u64 {
    5
}

const fn default_reminder_days() -> u64 {
    2
}

impl Default for InventoryAppConfig {
    fn default() -> Self {
        Self {
            default_quantity: default_quantity(),
            expiring_soon_days: default_expiring_soon_days(),
            critical_days: default_critical_days(),
            warning_days: default_warning_days(),
            reminder_days: default_reminder_days(),
        }
    }
}

impl InventoryAppConfig {
    /// Urgency thresholds
    #[must_use]
    pub const fn thresholds(&self) -> UrgencyThresholds {
        UrgencyThresholds {
            critical_days: self.critical_days,
            warning_days: self.warning_days,
        }
    }

    /// Settings for the inventory service
    #[must_use]
    pub const fn service_config(&self) -> InventoryServiceConfig {
        InventoryServiceConfig {
            default_quantity: self.default_quantity,
            reminder_days: self.reminder_days,
        }
    }

    /// Settings for the alert service
    #[must_use]
    pub const fn alert_config(&self) -> AlertConfig {
        AlertConfig {
            expiring_soon_days: self.expiring_soon_days,
            thresholds: self.thresholds(),
        }
    }

    /// Check the thresholds are ordered and quantities usable
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_quantity == 0 {
            return Err("inventory.default_quantity must be at least 1".to_string());
        }
        if self.critical_days > self.warning_days {
            return Err(format!(
                "inventory.critical_days ({}) must not exceed inventory.warning_days ({})",
                self.critical_days, self.warning_days
            ));
        }
        Ok(())
    }
}
