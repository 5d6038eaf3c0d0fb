use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over `fallback_directive`.
pub fn init_tracing(fallback_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
