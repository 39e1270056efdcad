//! Log subscriber for the binary. Library code only emits `tracing` events.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}
