//! Inventory storage port
//!
//! Defines the interface for persisting inventory records. Adapters in the
//! infrastructure layer implement this port with SQLite or in memory.

use async_trait::async_trait;
use domain::{InventoryRecord, ItemId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for inventory persistence
///
/// Records are appended whole and never updated in place.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InventoryStorePort: Send + Sync {
    /// Append a new record
    async fn append(&self, record: &InventoryRecord) -> Result<(), ApplicationError>;

    /// All records in insertion order
    async fn list(&self) -> Result<Vec<InventoryRecord>, ApplicationError>;

    /// Remove a record
    ///
    /// # Returns
    /// true if the record was removed, false if it didn't exist
    async fn remove(&self, id: &ItemId) -> Result<bool, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn InventoryStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn InventoryStorePort>();
    }
}
