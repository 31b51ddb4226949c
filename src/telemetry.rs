//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` when `RUST_LOG` is unset or invalid. Logs
/// go to stderr so stdout stays machine-readable. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
