use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for the embedding shell.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the configured
/// default filter scoped to this crate.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_filter))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
