//! Text recognition port
//!
//! The only capability the application needs from an OCR engine. Engine
//! settings such as language or character whitelists belong to the adapter.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning a captured image into raw text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextRecognitionPort: Send + Sync {
    /// Recognize all text in an encoded image (PNG, JPEG, ...)
    async fn recognize(&self, image: &[u8]) -> Result<String, ApplicationError>;
}
