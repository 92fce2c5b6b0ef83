//! Domain layer for FreshTrack
//!
//! Contains the inventory vocabulary: calendar dates, item identifiers,
//! categories, inventory records and expiry urgency. This layer has no
//! knowledge of storage, text recognition or presentation.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
