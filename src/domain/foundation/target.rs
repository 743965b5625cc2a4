//! Which part of a decision matrix a transformer operates on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::McdaError;

/// Transformation target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Transform the alternative x criteria values only.
    #[default]
    Matrix,
    /// Transform the weights only.
    Weights,
    /// Transform both values and weights.
    Both,
}

impl Target {
    pub fn includes_matrix(&self) -> bool {
        matches!(self, Target::Matrix | Target::Both)
    }

    pub fn includes_weights(&self) -> bool {
        matches!(self, Target::Weights | Target::Both)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Target::Matrix => "matrix",
            Target::Weights => "weights",
            Target::Both => "both",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Target {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matrix" | "m" => Ok(Target::Matrix),
            "weights" | "w" => Ok(Target::Weights),
            "both" | "mw" => Ok(Target::Both),
            _ => Err(McdaError::invalid_value(
                "Target",
                format!("'{}' is not one of matrix, weights, both", s),
            )),
        }
    }
}
