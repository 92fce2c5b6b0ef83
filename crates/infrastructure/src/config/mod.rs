//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: SQLite database settings
//! - `inventory`: quantities, alert window and urgency thresholds
//! - `recognizer`: tesseract CLI settings
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` (or an explicit file), then `FRESHTRACK_*` environment
//! variables using `__` between nested keys
//! (e.g. `FRESHTRACK_DATABASE__PATH`).

mod database;
mod inventory;
mod recognizer;

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use inventory::InventoryAppConfig;
pub use recognizer::RecognizerAppConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Inventory and alert settings
    #[serde(default)]
    pub inventory: InventoryAppConfig,

    /// Text recognizer settings
    #[serde(default)]
    pub recognizer: RecognizerAppConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `config.toml` when given
    ///
    /// An explicit path must exist; the implicit `config.toml` is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("database.path", "freshtrack.db")?
            .set_default("recognizer.executable_path", "tesseract")?
            .add_source(file)
            // Override with environment variables (e.g., FRESHTRACK_DATABASE__PATH)
            .add_source(
                config::Environment::with_prefix("FRESHTRACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.database.path.trim().is_empty() {
            return Err("database.path must not be empty".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("database.max_connections must be at least 1".to_string());
        }
        self.inventory.validate()?;
        self.recognizer.validate()
    }
}
