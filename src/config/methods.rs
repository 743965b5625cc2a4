//! Ranking method parameters

use serde::Deserialize;

use super::ValidationError;
use crate::domain::ranking::Metric;

/// ELECTRE I thresholds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElectreConfig {
    /// Concordance threshold
    #[serde(default = "default_p")]
    pub p: f64,

    /// Discordance threshold
    #[serde(default = "default_q")]
    pub q: f64,
}

impl Default for ElectreConfig {
    fn default() -> Self {
        Self {
            p: default_p(),
            q: default_q(),
        }
    }
}

fn default_p() -> f64 {
    0.65
}

fn default_q() -> f64 {
    0.35
}

impl ElectreConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [("p", self.p), ("q", self.q)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// SIMUS scoring choice and LP solver limits
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimusConfig {
    /// 1 ranks by the first method, 2 by the second
    #[serde(default = "default_rank_by")]
    pub rank_by: u8,

    /// Pivot limit per linear program
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Values within this distance of zero are treated as zero
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SimusConfig {
    fn default() -> Self {
        Self {
            rank_by: default_rank_by(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_rank_by() -> u8 {
    1
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_tolerance() -> f64 {
    1e-9
}

impl SimusConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.rank_by, 1 | 2) {
            return Err(ValidationError::InvalidRankBy(self.rank_by));
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ValidationError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// TOPSIS distance metric
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopsisConfig {
    #[serde(default)]
    pub metric: Metric,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_defaults_are_valid() {
        assert!(ElectreConfig::default().validate().is_ok());
        assert!(SimusConfig::default().validate().is_ok());
        assert_eq!(TopsisConfig::default().metric, Metric::Euclidean);
    }

    #[test]
    fn test_electre_threshold_range() {
        let config = ElectreConfig { p: 0.65, q: -0.1 };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ThresholdOutOfRange { name: "q", value: -0.1 })
        );
    }

    #[test]
    fn test_simus_validation() {
        let rank_by = SimusConfig {
            rank_by: 3,
            ..SimusConfig::default()
        };
        assert_eq!(rank_by.validate(), Err(ValidationError::InvalidRankBy(3)));

        let iterations = SimusConfig {
            max_iterations: 0,
            ..SimusConfig::default()
        };
        assert_eq!(iterations.validate(), Err(ValidationError::InvalidMaxIterations));

        let tolerance = SimusConfig {
            tolerance: 0.0,
            ..SimusConfig::default()
        };
        assert_eq!(tolerance.validate(), Err(ValidationError::InvalidTolerance(0.0)));
    }

    #[test]
    fn test_method_deserialization() {
        let topsis: TopsisConfig = serde_json::from_str(r#"{"metric": "cityblock"}"#).unwrap();
        assert_eq!(topsis.metric, Metric::Cityblock);

        let simus: SimusConfig = serde_json::from_str(r#"{"rank_by": 2}"#).unwrap();
        assert_eq!(simus.rank_by, 2);
        assert_eq!(simus.max_iterations, 10_000);
    }
}
