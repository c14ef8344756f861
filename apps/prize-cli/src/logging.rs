//! # Logging
//!
//! Diagnostics go to stderr so stdout stays clean for results and JSON.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show pool derivation steps
//! - `RUST_LOG=prize_core=trace` - Show trace for the core only
//! - Default: WARN level

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Call once, before any command runs.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
