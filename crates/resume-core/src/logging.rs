//! Tracing subscriber setup.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("failed to initialize tracing subscriber: {0}")]
    AlreadyInstalled(String),
}

/// Build the event filter: `RUST_LOG` when set, the configured level otherwise.
///
/// # Errors
///
/// Returns `LoggingError::InvalidLevel` if `config.level` is not a level name.
pub fn filter(config: &LogConfig) -> Result<EnvFilter, LoggingError> {
    let level: Level = config
        .level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(config.level.clone()))?;

    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy())
}

/// Install a global fmt subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if the level is invalid or a global subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))
}
