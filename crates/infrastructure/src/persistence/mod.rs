//! Persistence module
//!
//! SQLite and in-memory storage for inventory records.

pub mod connection;
pub mod inventory_store;
pub mod memory_store;
pub mod migrations;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use inventory_store::SqliteInventoryStore;
pub use memory_store::InMemoryInventoryStore;
