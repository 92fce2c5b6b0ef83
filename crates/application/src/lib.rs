//! Application layer - Use cases and orchestration
//!
//! Contains the expiry-date engine, port definitions and the inventory and
//! alert services that wire the engine to storage and text recognition.

pub mod error;
pub mod expiry;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use expiry::{
    CandidateKind, DateCandidate, DateOrder, ExpiryReading, ExtractionError, build_record,
    date_order, days_left, extract_date, normalize, normalize_candidate, read_expiry,
    refresh_days_left, reminder_date,
};
pub use ports::*;
pub use services::*;
