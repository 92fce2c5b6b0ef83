//! Identifier generator adapters

use std::sync::atomic::{AtomicU64, Ordering};

use application::ports::IdGenerator;
use domain::ItemId;
use uuid::Uuid;

/// Time-ordered UUIDv7 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7IdGenerator;

impl IdGenerator for UuidV7IdGenerator {
    fn next_id(&self) -> ItemId {
        ItemId::from_uuid(Uuid::now_v7())
    }
}

/// Counter-based identifiers, unique within one process
///
/// Only suitable for stores that do not outlive the generator.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting at `first`
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ItemId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ItemId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}
