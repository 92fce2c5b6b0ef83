//! Inventory service
//!
//! Business logic for the food inventory: reading expiry dates from scanned
//! labels, adding scanned or manually entered items, listing and searching
//! with days-left refreshed to today, removal, and calendar reminder plans.

use std::{fmt, sync::Arc};

use domain::{CalendarDate, Category, InventoryRecord, ItemId};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    expiry::{self, ExpiryReading},
    ports::{DateProvider, IdGenerator, InventoryStorePort, TextRecognitionPort},
};

/// Configuration for the inventory service
#[derive(Debug, Clone)]
pub struct InventoryServiceConfig {
    /// Quantity used for scanned items (default: 1)
    pub default_quantity: u32,
    /// Days before expiry a reminder fires (default: 2)
    pub reminder_days: u64,
}

impl Default for InventoryServiceConfig {
    fn default() -> Self {
        Self {
            default_quantity: 1,
            reminder_days: 2,
        }
    }
}

/// When to be reminded about an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderPlan {
    pub item_id: ItemId,
    pub product_name: String,
    pub expiry_date: CalendarDate,
    pub reminder_date: CalendarDate,
    pub message: String,
}

/// Service for managing the inventory
pub struct InventoryService<S: InventoryStorePort> {
    store: Arc<S>,
    recognizer: Option<Arc<dyn TextRecognitionPort>>,
    clock: Arc<dyn DateProvider>,
    ids: Arc<dyn IdGenerator>,
    config: InventoryServiceConfig,
}

impl<S: InventoryStorePort> fmt::Debug for InventoryService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryService")
            .field("config", &self.config)
            .field("has_recognizer", &self.recognizer.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: InventoryStorePort> Clone for InventoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            recognizer: self.recognizer.as_ref().map(Arc::clone),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
            config: self.config.clone(),
        }
    }
}

impl<S: InventoryStorePort> InventoryService<S> {
    /// Create a new inventory service
    #[must_use]
    pub fn new(
        store: Arc<S>,
        clock: Arc<dyn DateProvider>,
        ids: Arc<dyn IdGenerator>,
        config: InventoryServiceConfig,
    ) -> Self {
        Self {
            store,
            recognizer: None,
            clock,
            ids,
            config,
        }
    }

    /// Attach a text recognizer for image scanning
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn TextRecognitionPort>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Read an expiry date from already recognized text
    #[instrument(skip(self, raw_text), fields(text_len = raw_text.len()))]
    pub fn read_text(&self, raw_text: &str) -> Result<ExpiryReading, ApplicationError> {
        let today = self.clock.today();
        match expiry::read_expiry(raw_text, today) {
            Ok(reading) => {
                debug!(
                    candidate = %reading.candidate,
                    expiry = %reading.expiry,
                    days_left = reading.days_left,
                    "Expiry date read"
                );
                Ok(reading)
            },
            Err(e) => {
                debug!(error = %e, "No usable expiry date in text");
                Err(e.into())
            },
        }
    }

    /// Recognize a captured image and read its expiry date
    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    pub async fn scan_image(&self, image: &[u8]) -> Result<ExpiryReading, ApplicationError> {
        let recognizer = self.recognizer.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("No text recognizer configured".to_string())
        })?;

        let raw_text = recognizer.recognize(image).await?;
        if raw_text.trim().is_empty() {
            warn!("Recognizer returned no text");
        }
        self.read_text(&raw_text)
    }

    /// Add an item whose expiry date is read from recognized text
    #[instrument(skip(self, raw_text))]
    pub async fn add_scanned(
        &self,
        name: &str,
        category: Category,
        raw_text: &str,
    ) -> Result<InventoryRecord, ApplicationError> {
        let name = validate_name(name)?;
        let reading = self.read_text(raw_text)?;

        let record = expiry::build_record(
            name,
            category,
            reading.expiry,
            reading.days_left,
            self.config.default_quantity,
            self.ids.as_ref(),
        );
        self.store.append(&record).await?;

        info!(id = %record.id, expiry = %record.expiry_date, "Scanned item added");
        Ok(record)
    }

    /// Add an item with a manually entered expiry date
    #[instrument(skip(self))]
    pub async fn add_manual(
        &self,
        name: &str,
        category: Category,
        expiry: CalendarDate,
        quantity: Option<u32>,
    ) -> Result<InventoryRecord, ApplicationError> {
        let name = validate_name(name)?;
        let quantity = quantity.unwrap_or(self.config.default_quantity);
        if quantity == 0 {
            return Err(ApplicationError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let days_left = expiry::days_left(self.clock.today(), expiry);
        let record = expiry::build_record(
            name,
            category,
            expiry,
            days_left,
            quantity,
            self.ids.as_ref(),
        );
        self.store.append(&record).await?;

        info!(id = %record.id, %expiry, "Manual item added");
        Ok(record)
    }

    /// All items with days-left recomputed for today
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<InventoryRecord>, ApplicationError> {
        let today = self.clock.today();
        let records = self.store.list().await?;
        debug!(count = records.len(), "Listed inventory");
        Ok(records
            .iter()
            .map(|r| expiry::refresh_days_left(r, today))
            .collect())
    }

    /// Items whose name or category contains `query`, case-insensitively
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<InventoryRecord>, ApplicationError> {
        let mut records = self.list().await?;
        records.retain(|r| r.matches_query(query));
        Ok(records)
    }

    /// Look up a single item
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn get(&self, id: &ItemId) -> Result<InventoryRecord, ApplicationError> {
        self.list()
            .await?
            .into_iter()
            .find(|r| r.id == *id)
            .ok_or_else(|| ApplicationError::NotFound(format!("Inventory item {id}")))
    }

    /// Remove an item
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn remove(&self, id: &ItemId) -> Result<(), ApplicationError> {
        if self.store.remove(id).await? {
            info!("Item removed");
            Ok(())
        } else {
            Err(ApplicationError::NotFound(format!("Inventory item {id}")))
        }
    }

    /// Plan a calendar reminder `reminder_days` before an item expires
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn plan_reminder(
        &self,
        id: &ItemId,
        reminder_days: Option<u64>,
    ) -> Result<ReminderPlan, ApplicationError> {
        let record = self.get(id).await?;
        let days = reminder_days.unwrap_or(self.config.reminder_days);
        let reminder_date = expiry::reminder_date(record.expiry_date, days).ok_or_else(|| {
            ApplicationError::Validation(format!("Cannot remind {days} days before expiry"))
        })?;

        let message = format!(
            "Reminder for \"{}\" on {reminder_date}, expiring on {}",
            record.name, record.expiry_date
        );
        Ok(ReminderPlan {
            item_id: record.id,
            product_name: record.name,
            expiry_date: record.expiry_date,
            reminder_date,
            message,
        })
    }
}

fn validate_name(name: &str) -> Result<String, ApplicationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApplicationError::Validation(
            "Product name is required".to_string(),
        ));
    }
    Ok(name.to_string())
}
