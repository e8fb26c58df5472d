//! Process lifecycle helpers for the one-shot watcher.

use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing_subscriber.
///
/// `RUST_LOG` directives take precedence; otherwise `info` and above is shown.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_ansi(false)
        .init();
}
