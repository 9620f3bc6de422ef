//! # SwineTrace Telemetry
//!
//! Structured logging setup shared by every SwineTrace service. Wraps
//! `tracing-subscriber` with an env-filter and either human-readable or
//! JSON output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use st_telemetry::{TelemetryConfig, init_logging};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ST_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ST_JSON_LOGS` | `false` | JSON output for containers |
//! | `ST_SERVICE_NAME` | `swinetrace` | Service name in log fields |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Telemetry setup failures.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directive was invalid.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed.
    #[error("Subscriber already set: {0}")]
    AlreadyInitialized(String),
}

/// Install the global tracing subscriber.
///
/// Call once at process start; a second call reports
/// [`TelemetryError::AlreadyInitialized`].
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
