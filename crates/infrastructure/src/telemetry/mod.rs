//! Logging initialization
//!
//! Installs a global `tracing` subscriber with an `EnvFilter` and a text or
//! JSON formatter writing to stderr. `RUST_LOG` takes precedence over the
//! configured filter.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur during logging initialization
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise `fallback`
///
/// # Errors
///
/// Returns `InvalidFilter` when `fallback` is not a valid directive list.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|e| TelemetryError::InvalidFilter {
        filter: fallback.to_string(),
        reason: e.to_string(),
    })
}

/// Initialize global logging
///
/// `filter_override` replaces the configured filter (e.g. from a `-v` flag)
/// but still yields to `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(
    config: &LoggingConfig,
    filter_override: Option<&str>,
) -> Result<(), TelemetryError> {
    let filter = build_filter(filter_override.unwrap_or(&config.filter))?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(format = %config.format, "Logging initialized");
    Ok(())
}
