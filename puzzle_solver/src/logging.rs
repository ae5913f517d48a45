//! Logging initialization shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` fmt subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Stdout is left to
/// the boards and results the binaries print.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
