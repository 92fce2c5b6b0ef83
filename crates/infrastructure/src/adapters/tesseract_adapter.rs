//! Tesseract OCR adapter
//!
//! Implements `TextRecognitionPort` by running the tesseract CLI on a
//! temporary copy of the captured image.
//!
//! # Prerequisites
//!
//! tesseract must be installed with the configured language data:
//!
//! ```bash
//! sudo apt install tesseract-ocr tesseract-ocr-eng
//! ```

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use application::{error::ApplicationError, ports::TextRecognitionPort};
use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

use crate::config::RecognizerAppConfig;

/// Text recognizer backed by the tesseract CLI
#[derive(Debug, Clone)]
pub struct TesseractCliAdapter {
    config: RecognizerAppConfig,
}

impl TesseractCliAdapter {
    /// Create a new tesseract adapter
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the configuration is invalid.
    pub fn new(config: RecognizerAppConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        Ok(Self { config })
    }

    fn executable(&self) -> &Path {
        &self.config.executable_path
    }

    /// Command-line arguments for recognizing `image_path` to stdout
    fn build_args(&self, image_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            image_path.into(),
            "stdout".into(),
            "-l".into(),
            self.config.language.clone().into(),
        ];
        if let Some(whitelist) = &self.config.char_whitelist {
            args.push("-c".into());
            args.push(format!("tessedit_char_whitelist={whitelist}").into());
        }
        if self.config.preserve_interword_spaces {
            args.push("-c".into());
            args.push("preserve_interword_spaces=1".into());
        }
        args
    }

    /// Write image bytes to a temporary file for tesseract
    async fn write_temp_image(&self, image: &[u8]) -> Result<NamedTempFile, ApplicationError> {
        let temp_file = NamedTempFile::new().map_err(|e| {
            ApplicationError::Recognition(format!("Failed to create temp file: {e}"))
        })?;

        let mut file = tokio::fs::File::create(temp_file.path())
            .await
            .map_err(|e| ApplicationError::Recognition(format!("Failed to write temp file: {e}")))?;
        file.write_all(image).await.map_err(|e| {
            ApplicationError::Recognition(format!("Failed to write image data: {e}"))
        })?;
        file.flush().await.map_err(|e| {
            ApplicationError::Recognition(format!("Failed to flush temp file: {e}"))
        })?;

        Ok(temp_file)
    }

    /// Run tesseract on an image file
    #[instrument(skip(self, image_path), fields(language = %self.config.language))]
    async fn run_tesseract(&self, image_path: &Path) -> Result<String, ApplicationError> {
        let mut cmd = Command::new(self.executable());
        cmd.args(self.build_args(image_path))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(?cmd, "Running tesseract");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApplicationError::Configuration(format!(
                    "tesseract not found at '{}'. Please install tesseract-ocr.",
                    self.executable().display()
                ))
            } else {
                ApplicationError::Recognition(format!("Failed to run tesseract: {e}"))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(status = %output.status, stderr = %stderr.trim(), "tesseract failed");
            return Err(ApplicationError::Recognition(format!(
                "tesseract exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whether the tesseract executable can be started
    pub async fn is_available(&self) -> bool {
        Command::new(self.executable())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|s| s.success())
    }
}

#[async_trait]
impl TextRecognitionPort for TesseractCliAdapter {
    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    async fn recognize(&self, image: &[u8]) -> Result<String, ApplicationError> {
        if image.is_empty() {
            return Err(ApplicationError::Validation("Image is empty".to_string()));
        }

        let temp_file = self.write_temp_image(image).await?;
        let text = self.run_tesseract(temp_file.path()).await?;

        if text.trim().is_empty() {
            warn!("tesseract returned no text");
        } else {
            debug!(chars = text.len(), "Recognized text");
        }
        Ok(text)
    }
}
