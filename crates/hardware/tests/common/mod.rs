//! Shared test infrastructure.



use tracing_subscriber::EnvFilter;

/// Installs a test-writer `tracing` subscriber once per process.
///
/// Honours `RUST_LOG`; silent otherwise.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
