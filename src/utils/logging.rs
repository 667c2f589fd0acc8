//! Tracing subscriber setup

use crate::config::Settings;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Subscriber used while configuration is still being loaded
///
/// Honors `RUST_LOG`, otherwise logs at `info` (`debug` when verbose).
pub fn bootstrap_subscriber(verbose: bool) -> impl tracing::Subscriber + Send + Sync {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .finish()
}

/// Install the global fmt subscriber
///
/// Calling this more than once is harmless; later calls keep the first subscriber.
pub fn init(settings: &Settings) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
