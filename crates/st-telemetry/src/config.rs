//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration for a SwineTrace service.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name included in log fields.
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Whether to emit JSON formatted logs.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "swinetrace".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `ST_SERVICE_NAME`: service name (default: swinetrace)
    /// - `ST_LOG_LEVEL` or `RUST_LOG`: log level (default: info)
    /// - `ST_JSON_LOGS`: enable JSON logs (default: true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("ST_SERVICE_NAME").unwrap_or_else(|_| "swinetrace".to_string()),

            log_level: env::var("ST_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("ST_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }
}
