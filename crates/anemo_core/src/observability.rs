//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Output goes to stderr so interactive stdout stays readable. Calling this
/// again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Tracing initialized");
    }
}
