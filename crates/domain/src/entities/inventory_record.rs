//! Inventory record entity - A tracked food item with its expiry date

use serde::{Deserialize, Serialize};

use crate::value_objects::{CalendarDate, Category, ItemId};

/// A food item held in the inventory
///
/// `days_left` is the count captured when the record was built; it is not
/// updated in place as days pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Unique identifier
    pub id: ItemId,
    /// Product name as entered by the user
    pub name: String,
    /// Food category
    pub category: Category,
    /// Normalized expiry date
    pub expiry_date: CalendarDate,
    /// Whole days between the build date and the expiry date
    pub days_left: u64,
    /// Number of units
    pub quantity: u32,
}

impl InventoryRecord {
    /// Create a record with quantity 1
    #[must_use]
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: Category,
        expiry_date: CalendarDate,
        days_left: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            expiry_date,
            days_left,
            quantity: 1,
        }
    }

    /// Set the quantity
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Copy of this record carrying a different days-left count
    #[must_use]
    pub const fn with_days_left(mut self, days_left: u64) -> Self {
        self.days_left = days_left;
        self
    }

    /// Case-insensitive substring match on name or category
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.as_str().contains(&query)
    }
}

impl std::fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} [{}] expires {}",
            self.name, self.quantity, self.category, self.expiry_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InventoryRecord {
        InventoryRecord::new(
            ItemId::new(),
            "Greek Yogurt",
            Category::Dairy,
            CalendarDate::new(2025, 4, 15).unwrap(),
            12,
        )
    }

    #[test]
    fn new_record_has_quantity_one() {
        let record = sample();
        assert_eq!(record.quantity, 1);
        assert_eq!(record.days_left, 12);
    }

    #[test]
    fn builder_methods() {
        let record = sample().with_quantity(3).with_days_left(4);
        assert_eq!(record.quantity, 3);
        assert_eq!(record.days_left, 4);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        assert!(sample().matches_query("yogurt"));
        assert!(sample().matches_query("GREEK"));
        assert!(!sample().matches_query("bread"));
    }

    #[test]
    fn query_matches_category() {
        assert!(sample().matches_query("dairy"));
        assert!(sample().matches_query("Dai"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(sample().matches_query(""));
        assert!(sample().matches_query("   "));
    }

    #[test]
    fn display_format() {
        let display = sample().to_string();
        assert!(display.contains("Greek Yogurt"));
        assert!(display.contains("Dairy"));
        assert!(display.contains("2025-04-15"));
    }

    #[test]
    fn serialization_uses_camel_case() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["expiryDate"], "2025-04-15");
        assert_eq!(json["daysLeft"], 12);
        assert_eq!(json["category"], "dairy");

        let back: InventoryRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
