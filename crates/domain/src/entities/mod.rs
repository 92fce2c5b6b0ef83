//! Domain entities - Objects with identity and lifecycle

mod expiry_urgency;
mod inventory_record;

pub use expiry_urgency::{ExpiryUrgency, UrgencyThresholds};
pub use inventory_record::InventoryRecord;
