//! Tracing subscriber bootstrap.
//!
//! The engine itself only emits events through `tracing`; binaries and
//! tests that want to see them call [`init_tracing`] once.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LoggingConfig, ValidationError};

/// Installs a global fmt subscriber filtered by `config.level`, writing to
/// stderr as text or JSON lines.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
///
/// # Errors
///
/// `InvalidLogLevel` if the filter directive does not parse.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, ValidationError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|_| ValidationError::InvalidLogLevel(config.level.clone()))?;

    let installed = if config.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
    };
    Ok(installed.is_ok())
}
