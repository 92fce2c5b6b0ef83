//! In-memory inventory store
//!
//! Process-local storage for tests and `:memory:`-style runs where nothing
//! needs to survive a restart.

use application::{error::ApplicationError, ports::InventoryStorePort};
use async_trait::async_trait;
use domain::{InventoryRecord, ItemId};
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Inventory store backed by a vector
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    records: RwLock<Vec<InventoryRecord>>,
}

impl InMemoryInventoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl InventoryStorePort for InMemoryInventoryStore {
    #[instrument(skip(self, record), fields(item_id = %record.id))]
    async fn append(&self, record: &InventoryRecord) -> Result<(), ApplicationError> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id == record.id) {
            return Err(ApplicationError::Storage(format!(
                "Inventory item {} already exists",
                record.id
            )));
        }
        records.push(record.clone());
        debug!(count = records.len(), "Appended inventory record");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<InventoryRecord>, ApplicationError> {
        Ok(self.records.read().clone())
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn remove(&self, id: &ItemId) -> Result<bool, ApplicationError> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.id != *id);
        Ok(records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use domain::{CalendarDate, Category};

    use super::*;

    fn record(name: &str) -> InventoryRecord {
        InventoryRecord::new(
            ItemId::new(),
            name,
            Category::Fruits,
            CalendarDate::new(2025, 6, 5).unwrap(),
            1,
        )
    }

    #[tokio::test]
    async fn append_list_remove() {
        let store = InMemoryInventoryStore::new();
        let apples = record("Apples");
        let pears = record("Pears");

        store.append(&apples).await.unwrap();
        store.append(&pears).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list().await.unwrap(), vec![apples.clone(), pears.clone()]);

        assert!(store.remove(&apples.id).await.unwrap());
        assert!(!store.remove(&apples.id).await.unwrap());
        assert_eq!(store.list().await.unwrap(), vec![pears]);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let store = InMemoryInventoryStore::new();
        let apples = record("Apples");

        store.append(&apples).await.unwrap();
        assert!(matches!(
            store.append(&apples).await,
            Err(ApplicationError::Storage(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn starts_empty() {
        assert!(InMemoryInventoryStore::new().is_empty());
    }
}
