//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber with an explicit default level.
///
/// `RUST_LOG`, when set, still overrides the default.
pub fn init_tracing_with_level(default_level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
