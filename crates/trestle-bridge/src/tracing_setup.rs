//! Diagnostics subscriber setup for embedding hosts.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `info` for the bridge crates. Safe to call more than once; later calls
/// are no-ops.
pub fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trestle_bridge=info,trestle_core=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
