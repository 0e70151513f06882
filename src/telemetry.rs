//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use arsmachina_core::config::logging::LoggingConfig;
use arsmachina_core::error::AppError;

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = if config.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init()
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    installed.map_err(|e| AppError::internal(format!("Failed to install tracing subscriber: {e}")))
}
