//! Shared test utilities for collection integration tests.

#![allow(dead_code)]

use collection::Collection;

/// Initialize tracing for a test, honouring `RUST_LOG` (default `debug`).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Try to initialize, ignore error if already initialized
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a string collection from comma-separated data. `""` yields `[""]`,
/// matching `str::split`.
pub fn from_csv(data: &str) -> Collection<String> {
    data.split(',').map(str::to_string).collect()
}
