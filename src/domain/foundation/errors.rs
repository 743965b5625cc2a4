//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Which axis of the decision matrix a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Alternatives,
    Criteria,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Alternatives => write!(f, "alternatives"),
            Axis::Criteria => write!(f, "criteria"),
        }
    }
}

/// Errors raised while building, transforming or ranking a decision matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdaError {
    #[error("Invalid criteria objective '{alias}'")]
    InvalidObjective { alias: String },

    #[error("Invalid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Duplicate label '{label}' in {axis}")]
    DuplicateLabel { axis: Axis, label: String },

    #[error("{operation} would divide by zero in {location}")]
    DivisionByZero { operation: String, location: String },

    #[error("{method} can't operate: {reason}")]
    InvalidValue { method: String, reason: String },

    #[error("SIMUS stage '{stage}' failed: {reason}")]
    SolverFailure { stage: String, reason: String },

    #[error("Unknown ranking method '{name}'")]
    UnknownMethod { name: String },
}

impl McdaError {
    pub fn invalid_objective(alias: impl Into<String>) -> Self {
        McdaError::InvalidObjective {
            alias: alias.into(),
        }
    }

    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        McdaError::InvalidShape {
            reason: reason.into(),
        }
    }

    pub fn duplicate_label(axis: Axis, label: impl Into<String>) -> Self {
        McdaError::DuplicateLabel {
            axis,
            label: label.into(),
        }
    }

    pub fn division_by_zero(operation: impl Into<String>, location: impl Into<String>) -> Self {
        McdaError::DivisionByZero {
            operation: operation.into(),
            location: location.into(),
        }
    }

    pub fn invalid_value(method: impl Into<String>, reason: impl Into<String>) -> Self {
        McdaError::InvalidValue {
            method: method.into(),
            reason: reason.into(),
        }
    }

    pub fn solver_failure(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        McdaError::SolverFailure {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        McdaError::UnknownMethod { name: name.into() }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            McdaError::InvalidObjective { .. } => ErrorCode::InvalidObjective,
            McdaError::InvalidShape { .. } => ErrorCode::InvalidShape,
            McdaError::DuplicateLabel { .. } => ErrorCode::DuplicateLabel,
            McdaError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            McdaError::InvalidValue { .. } => ErrorCode::InvalidValue,
            McdaError::SolverFailure { .. } => ErrorCode::SolverFailure,
            McdaError::UnknownMethod { .. } => ErrorCode::UnknownMethod,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction errors
    InvalidObjective,
    InvalidShape,
    DuplicateLabel,

    // Numeric errors
    DivisionByZero,
    InvalidValue,
    SolverFailure,

    // Lookup errors
    UnknownMethod,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidObjective => "INVALID_OBJECTIVE",
            ErrorCode::InvalidShape => "INVALID_SHAPE",
            ErrorCode::DuplicateLabel => "DUPLICATE_LABEL",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::SolverFailure => "SOLVER_FAILURE",
            ErrorCode::UnknownMethod => "UNKNOWN_METHOD",
        };
        write!(f, "{}", s)
    }
}

/// Shorthand for results produced by the engine.
pub type McdaResult<T> = Result<T, McdaError>;
