//! Logging setup shared by anything that drives the catalog.
//!
//! The domain crates only emit `tracing` spans and events; installing a
//! subscriber is left to the host process through [`init`].

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
