//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod date_provider;
mod id_generator;
mod inventory_store;
mod text_recognition_port;

pub use date_provider::DateProvider;
#[cfg(test)]
pub use date_provider::MockDateProvider;
pub use id_generator::IdGenerator;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use inventory_store::InventoryStorePort;
#[cfg(test)]
pub use inventory_store::MockInventoryStorePort;
pub use text_recognition_port::TextRecognitionPort;
#[cfg(test)]
pub use text_recognition_port::MockTextRecognitionPort;
