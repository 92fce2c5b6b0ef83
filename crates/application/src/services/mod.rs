//! Application services - Use case implementations

mod alert_service;
mod inventory_service;

pub use alert_service::{AlertConfig, AlertService, ExpiryAlert};
pub use inventory_service::{InventoryService, InventoryServiceConfig, ReminderPlan};
