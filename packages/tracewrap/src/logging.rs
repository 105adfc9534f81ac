//! Logging setup
//!
//! The crate reports its own diagnostics through `tracing`. With the `log`
//! feature enabled those events reach the `log` facade, so installing
//! `env_logger` here is enough to see them. Levels come from `RUST_LOG`,
//! e.g. `RUST_LOG=tracewrap=trace` shows every stack capture.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Install `env_logger` (call once at application startup)
///
/// Repeated calls are ignored.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        let installed = env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!("logging initialized");
        }
    });
}

/// Install a test-friendly logger
///
/// Safe to call from every test; only the first call in a process installs it.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
