//! Structured logging.

use tracing_subscriber::EnvFilter;

/// Initialize a plain-text subscriber honoring `RUST_LOG`, falling back to
/// the given default directive.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
