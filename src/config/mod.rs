//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MCDA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mcda_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("ELECTRE thresholds: p={} q={}", config.electre.p, config.electre.q);
//! ```

mod error;
mod logging;
mod methods;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use methods::{ElectreConfig, SimusConfig, TopsisConfig};

use serde::Deserialize;

/// Root engine configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`EngineConfig::load()`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// ELECTRE I thresholds
    #[serde(default)]
    pub electre: ElectreConfig,

    /// SIMUS scoring and solver limits
    #[serde(default)]
    pub simus: SimusConfig,

    /// TOPSIS distance metric
    #[serde(default)]
    pub topsis: TopsisConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA__ELECTRE__P=0.7` -> `electre.p = 0.7`
    /// - `MCDA__TOPSIS__METRIC=cityblock` -> `topsis.metric = cityblock`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("MCDA").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.electre.validate()?;
        self.simus.validate()?;
        Ok(())
    }
}
