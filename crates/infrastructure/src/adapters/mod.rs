//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod id_generator;
mod system_clock;
mod tesseract_adapter;

pub use id_generator::{SequentialIdGenerator, UuidV7IdGenerator};
pub use system_clock::{FixedDateProvider, SystemDateProvider};
pub use tesseract_adapter::TesseractCliAdapter;
