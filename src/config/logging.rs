//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::ValidationError;

/// Log filter and output format for [`crate::telemetry::init_tracing`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,mcda_engine=debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,mcda_engine=debug".to_string()
}

impl LoggingConfig {
    /// Validate that the level parses as a filter directive
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))
    }
}
