//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("ELECTRE threshold {name} must be in [0, 1], found {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("SIMUS rank_by must be 1 or 2, found {0}")]
    InvalidRankBy(u8),

    #[error("SIMUS max_iterations must be positive")]
    InvalidMaxIterations,

    #[error("SIMUS tolerance must be positive and finite, found {0}")]
    InvalidTolerance(f64),
}
