//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::expiry::ExtractionError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Expiry date could not be read from the recognized text
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Text recognition failed
    #[error("Text recognition error: {0}")]
    Recognition(String),

    /// Persistence failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Recognition failures are worth retrying with another captured frame.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::Recognition(_) | ApplicationError::Storage(_)
        )
    }

    /// Check if the caller should fall back to manual date entry
    pub fn needs_manual_entry(&self) -> bool {
        matches!(self, ApplicationError::Extraction(_))
    }
}
