//! Tracing/logging initialization for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "HOMESTOCK_LOG";

/// Install a stderr subscriber. `verbose` forces `debug`; otherwise the filter
/// comes from [`LOG_ENV`] and falls back to `warn`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
