//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: SQLite and in-memory
//! inventory stores, the tesseract text recognizer, clocks and id
//! generators. Also owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DatabaseConfig, InventoryAppConfig, LogFormat, LoggingConfig, RecognizerAppConfig,
};
pub use persistence::{
    ConnectionPool, DatabaseError, InMemoryInventoryStore, SqliteInventoryStore, create_pool,
};
pub use telemetry::{TelemetryError, init_logging};
