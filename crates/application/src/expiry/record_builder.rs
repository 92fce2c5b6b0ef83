//! Inventory record assembly

use domain::{CalendarDate, Category, InventoryRecord};

use crate::ports::IdGenerator;

/// Assemble an inventory record, taking its id from `ids`
pub fn build_record(
    name: impl Into<String>,
    category: Category,
    expiry: CalendarDate,
    days_left: u64,
    quantity: u32,
    ids: &dyn IdGenerator,
) -> InventoryRecord {
    InventoryRecord::new(ids.next_id(), name, category, expiry, days_left).with_quantity(quantity)
}

#[cfg(test)]
mod tests {
    use domain::ItemId;

    use super::*;
    use crate::ports::MockIdGenerator;

    fn sequential_ids() -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        let mut next = 0u128;
        ids.expect_next_id().returning(move || {
            next += 1;
            ItemId::from_uuid(uuid::Uuid::from_u128(next))
        });
        ids
    }

    #[test]
    fn assembles_all_fields() {
        let ids = sequential_ids();
        let expiry = CalendarDate::new(2025, 6, 5).unwrap();
        let record = build_record("Butter", Category::Dairy, expiry, 4, 2, &ids);

        assert_eq!(record.name, "Butter");
        assert_eq!(record.category, Category::Dairy);
        assert_eq!(record.expiry_date, expiry);
        assert_eq!(record.days_left, 4);
        assert_eq!(record.quantity, 2);
    }

    #[test]
    fn ids_come_from_the_generator() {
        let ids = sequential_ids();
        let expiry = CalendarDate::new(2025, 6, 5).unwrap();
        let first = build_record("A", Category::Other, expiry, 0, 1, &ids);
        let second = build_record("B", Category::Other, expiry, 0, 1, &ids);

        assert_eq!(first.id.as_uuid().as_u128(), 1);
        assert_eq!(second.id.as_uuid().as_u128(), 2);
    }
}
