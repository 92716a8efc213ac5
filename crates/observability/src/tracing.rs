//! Subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the level filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a JSON `fmt` subscriber for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    // JSON logs + timestamps, configurable via RUST_LOG
    // (e.g. `RUST_LOG=gildedrose_inventory=trace` for per-item transitions).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
