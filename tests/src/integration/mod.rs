//! Cross-crate integration flows.

mod attestation_flow;
mod batch_flow;
mod content_flow;

/// Install the shared logging stack once per test binary. Later calls
/// lose the race and that is fine.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let config = st_telemetry::TelemetryConfig {
        log_level: "warn".to_string(),
        ..st_telemetry::TelemetryConfig::default()
    };
    let _ = st_telemetry::init_logging(&config);
}
