//! SQLite inventory store implementation
//!
//! Implements the `InventoryStorePort` for persisting inventory records.

use std::sync::Arc;

use application::{error::ApplicationError, ports::InventoryStorePort};
use async_trait::async_trait;
use domain::{CalendarDate, Category, InventoryRecord, ItemId};
use rusqlite::{Row, params, types::Type};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based inventory store
#[derive(Debug, Clone)]
pub struct SqliteInventoryStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteInventoryStore {
    /// Create a new SQLite inventory store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn storage_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Storage(e.to_string())
}

#[async_trait]
impl InventoryStorePort for SqliteInventoryStore {
    #[instrument(skip(self, record), fields(item_id = %record.id))]
    async fn append(&self, record: &InventoryRecord) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let record = record.clone();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;
            let days_left = i64::try_from(record.days_left).map_err(storage_error)?;

            conn.execute(
                "INSERT INTO inventory_items (id, name, category, expiry_date, days_left, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id.to_string(),
                    record.name,
                    record.category.as_str(),
                    record.expiry_date.to_string(),
                    days_left,
                    record.quantity,
                ],
            )
            .map_err(storage_error)?;

            debug!("Appended inventory record");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<InventoryRecord>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, name, category, expiry_date, days_left, quantity
                     FROM inventory_items
                     ORDER BY seq ASC",
                )
                .map_err(storage_error)?;

            let records = stmt
                .query_map([], row_to_record)
                .map_err(storage_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(storage_error)?;

            debug!(count = records.len(), "Listed inventory records");
            Ok(records)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn remove(&self, id: &ItemId) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id_str = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            let deleted = conn
                .execute("DELETE FROM inventory_items WHERE id = ?1", [&id_str])
                .map_err(storage_error)?;

            debug!(deleted = deleted > 0, "Removed inventory record");
            Ok(deleted > 0)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

/// Convert a database row to an `InventoryRecord`
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<InventoryRecord> {
    let id_str: String = row.get(0)?;
    let name: String = row.get(1)?;
    let category_str: String = row.get(2)?;
    let expiry_str: String = row.get(3)?;
    let days_left: i64 = row.get(4)?;
    let quantity: u32 = row.get(5)?;

    let id = ItemId::parse(&id_str).map_err(|e| conversion_failure(0, e))?;
    let category: Category = category_str
        .parse()
        .map_err(|e| conversion_failure(2, e))?;
    let expiry: CalendarDate = expiry_str.parse().map_err(|e| conversion_failure(3, e))?;
    let days_left = u64::try_from(days_left).map_err(|e| conversion_failure(4, e))?;

    Ok(InventoryRecord::new(id, name, category, expiry, days_left).with_quantity(quantity))
}

fn conversion_failure(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DatabaseConfig, persistence::connection::create_pool};

    fn create_test_store() -> SqliteInventoryStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        SqliteInventoryStore::new(Arc::new(pool))
    }

    fn record(name: &str, category: Category) -> InventoryRecord {
        InventoryRecord::new(
            ItemId::new(),
            name,
            category,
            CalendarDate::new(2025, 6, 5).unwrap(),
            4,
        )
    }

    #[tokio::test]
    async fn append_and_list() {
        let store = create_test_store();
        let milk = record("Milk", Category::Dairy).with_quantity(2);

        store.append(&milk).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![milk]);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = create_test_store();
        let names = ["Milk", "Bread", "Apples"];
        for name in names {
            store.append(&record(name, Category::Other)).await.unwrap();
        }

        let listed: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn duplicate_id_is_storage_error() {
        let store = create_test_store();
        let milk = record("Milk", Category::Dairy);

        store.append(&milk).await.unwrap();
        let err = store.append(&milk).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[tokio::test]
    async fn remove_reports_whether_deleted() {
        let store = create_test_store();
        let milk = record("Milk", Category::Dairy);
        store.append(&milk).await.unwrap();

        assert!(store.remove(&milk.id).await.unwrap());
        assert!(!store.remove(&milk.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_row_is_reported() {
        let store = create_test_store();
        {
            let conn = store.pool.get().unwrap();
            conn.execute(
                "INSERT INTO inventory_items (id, name, category, expiry_date, days_left, quantity)
                 VALUES ('not-a-uuid', 'Milk', 'dairy', '2025-06-05', 1, 1)",
                [],
            )
            .unwrap();
        }

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }
}
