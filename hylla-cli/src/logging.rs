//! Tracing subscriber setup for the `hylla` binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter variable; falls back to `warn`.
const LOG_ENV: &str = "HYLLA_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
