use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::{Config, ConfigError, LogFormat};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize logging: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global tracing subscriber described by `config`.
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_new(&config.log_filter).map_err(|e| ConfigError::InvalidFilter {
            directive: config.log_filter.clone(),
            reason: e.to_string(),
        })?;

    let fmt_layer = match config.log_format {
        LogFormat::Compact => fmt::layer().with_target(false).compact().boxed(),
        LogFormat::Full => fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(filter = %config.log_filter, format = ?config.log_format, "logging initialized");
    Ok(())
}
