#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Initializes a compact stderr subscriber honoring `RUST_LOG`, defaulting
/// to `info` for the example binaries.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
