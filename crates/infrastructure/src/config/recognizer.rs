//! Text recognizer (tesseract) configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Tesseract CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerAppConfig {
    /// Path to the tesseract executable
    #[serde(default = "default_executable_path")]
    pub executable_path: PathBuf,

    /// Tesseract language code(s), e.g. `eng` or `eng+deu`
    #[serde(default = "default_language")]
    pub language: String,

    /// Restrict recognition to these characters
    ///
    /// Unset by default: a digits-only whitelist would drop the
    /// `best before` / `exp` labels that rank candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_whitelist: Option<String>,

    /// Keep runs of spaces between words
    #[serde(default = "default_true")]
    pub preserve_interword_spaces: bool,
}

fn default_executable_path() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_language() -> String {
    "eng".to_string()
}

impl Default for RecognizerAppConfig {
    fn default() -> Self {
        Self {
            executable_path: default_executable_path(),
            language: default_language(),
            char_whitelist: None,
            preserve_interword_spaces: true,
        }
    }
}

impl RecognizerAppConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.executable_path.as_os_str().is_empty() {
            return Err("recognizer.executable_path must not be empty".to_string());
        }
        if self.language.trim().is_empty() {
            return Err("recognizer.language must not be empty".to_string());
        }
        if self
            .char_whitelist
            .as_deref()
            .is_some_and(|w| w.is_empty())
        {
            return Err("recognizer.char_whitelist must not be empty when set".to_string());
        }
        Ok(())
    }
}
