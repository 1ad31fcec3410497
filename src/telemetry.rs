//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or any embedding service).

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Environment variable switching log output to JSON.
pub const TRACE_JSON_ENV: &str = "CPU_SCHEDULE_TRACE_JSON";

/// Installs the global `tracing` subscriber.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - CPU_SCHEDULE_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so stdout stays free for simulation output.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}
