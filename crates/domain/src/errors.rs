//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Year, month and day do not form a Gregorian date
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    /// Unknown product category
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Malformed item identifier
    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
