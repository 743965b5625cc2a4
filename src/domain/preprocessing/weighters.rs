//! Weighters - derive criterion weights from the data itself.
//!
//! A weighter discards the incoming weights and computes fresh ones from the
//! matrix (and, for CRITIC, the objectives). The values are left untouched.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use super::distance::cenit_distance_named;
use super::stats::{self, ColumnNames};
use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};

/// Every criterion gets `base_value / C`.
pub fn equal_weights(criteria_count: usize, base_value: f64) -> Vec<f64> {
    vec![base_value / criteria_count as f64; criteria_count]
}

/// Weights proportional to each column's standard deviation.
pub fn std_weights(matrix: &DMatrix<f64>) -> McdaResult<Vec<f64>> {
    let raw = (0..matrix.ncols())
        .map(|j| stats::std(&stats::column(matrix, j), 0))
        .collect();
    normalize(raw, "StdWeighter")
}

/// Weights from the diversification degree `1 - e_j` of each column, where
/// `e_j` is its Shannon entropy normalised by `ln(A)`.
pub fn entropy_weights(matrix: &DMatrix<f64>) -> McdaResult<Vec<f64>> {
    entropy_weights_named(matrix, ColumnNames::unlabeled())
}

/// CRITIC weights: contrast intensity times conflict with the other criteria.
pub fn critic_weights(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    correlation: Correlation,
    scale: bool,
) -> McdaResult<Vec<f64>> {
    critic_weights_named(matrix, objectives, correlation, scale, ColumnNames::unlabeled())
}

fn normalize(raw: Vec<f64>, operation: &str) -> McdaResult<Vec<f64>> {
    let total = stats::sum(&raw);
    if total == 0.0 || !total.is_finite() {
        return Err(McdaError::division_by_zero(operation, "sum of unnormalized weights"));
    }
    Ok(raw.into_iter().map(|w| w / total).collect())
}

fn entropy_weights_named(matrix: &DMatrix<f64>, names: ColumnNames<'_>) -> McdaResult<Vec<f64>> {
    let a_number = matrix.nrows();
    let max_entropy = (a_number as f64).ln();
    if max_entropy == 0.0 {
        return Err(McdaError::division_by_zero(
            "EntropyWeighter",
            "entropy normalization of a single alternative",
        ));
    }

    let mut diversification = Vec::with_capacity(matrix.ncols());
    for j in 0..matrix.ncols() {
        let values = stats::column(matrix, j);
        if values.iter().any(|v| *v < 0.0) {
            return Err(McdaError::invalid_value(
                "EntropyWeighter",
                format!("{} has negative values", names.describe(j)),
            ));
        }
        let total = stats::sum(&values);
        if total == 0.0 {
            return Err(McdaError::division_by_zero("EntropyWeighter", names.describe(j)));
        }
        // 0 * ln(0) is taken as 0
        let entropy: f64 = values
            .iter()
            .map(|v| v / total)
            .filter(|p| *p > 0.0)
            .map(|p| -p * p.ln())
            .sum();
        diversification.push(1.0 - entropy / max_entropy);
    }
    normalize(diversification, "EntropyWeighter")
}

fn critic_weights_named(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    correlation: Correlation,
    scale: bool,
    names: ColumnNames<'_>,
) -> McdaResult<Vec<f64>> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    let matrix = if scale {
        cenit_distance_named(matrix, objectives, names)?
    } else {
        matrix.clone()
    };

    let corr = match correlation {
        Correlation::Pearson => stats::correlation_matrix(&matrix, names, "Critic")?,
        Correlation::Spearman => {
            let ranked: Vec<Vec<f64>> = (0..matrix.ncols())
                .map(|j| stats::average_ranks(&stats::column(&matrix, j)))
                .collect();
            stats::correlation_matrix(&stats::from_columns(matrix.nrows(), &ranked), names, "Critic")?
        }
    };

    let raw = (0..matrix.ncols())
        .map(|j| {
            let contrast = stats::std(&stats::column(&matrix, j), 0);
            let conflict: f64 = corr.column(j).iter().map(|r| 1.0 - r).sum();
            contrast * conflict
        })
        .collect();
    normalize(raw, "Critic")
}

/// Correlation used by CRITIC to measure conflict between criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    #[default]
    Pearson,
    Spearman,
}

impl FromStr for Correlation {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pearson" => Ok(Correlation::Pearson),
            "spearman" => Ok(Correlation::Spearman),
            _ => Err(McdaError::invalid_value(
                "Critic",
                format!("unknown correlation '{}'", s),
            )),
        }
    }
}

fn reweight(name: &'static str, dm: &DecisionMatrix, weights: Vec<f64>) -> DecisionMatrix {
    debug!(
        transformer = name,
        criteria = dm.criteria_count(),
        ?weights,
        "derived weights"
    );
    dm.clone().replace_weights(weights)
}

/// Assigns the same weight to every criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWeighter {
    pub base_value: f64,
}

impl EqualWeighter {
    pub fn new(base_value: f64) -> Self {
        Self { base_value }
    }
}

impl Default for EqualWeighter {
    fn default() -> Self {
        Self { base_value: 1.0 }
    }
}

impl Transformer for EqualWeighter {
    fn name(&self) -> &'static str {
        "EqualWeighter"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let weights = equal_weights(dm.criteria_count(), self.base_value);
        Ok(reweight(self.name(), dm, weights))
    }
}

/// Weights each criterion by its dispersion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdWeighter;

impl Transformer for StdWeighter {
    fn name(&self) -> &'static str {
        "StdWeighter"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let weights = std_weights(dm.matrix())?;
        Ok(reweight(self.name(), dm, weights))
    }
}

/// Weights each criterion by how much information its values carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyWeighter;

impl Transformer for EntropyWeighter {
    fn name(&self) -> &'static str {
        "EntropyWeighter"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let weights = entropy_weights_named(dm.matrix(), ColumnNames(Some(dm.criteria())))?;
        Ok(reweight(self.name(), dm, weights))
    }
}

/// CRiteria Importance Through Intercriteria Correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Critic {
    pub correlation: Correlation,
    /// Apply the cenit distance before measuring contrast and conflict.
    pub scale: bool,
}

impl Critic {
    pub fn new(correlation: Correlation, scale: bool) -> Self {
        Self { correlation, scale }
    }
}

impl Default for Critic {
    fn default() -> Self {
        Self {
            correlation: Correlation::Pearson,
            scale: true,
        }
    }
}

impl Transformer for Critic {
    fn name(&self) -> &'static str {
        "Critic"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let weights = critic_weights_named(
            dm.matrix(),
            dm.objectives(),
            self.correlation,
            self.scale,
            ColumnNames(Some(dm.criteria())),
        )?;
        Ok(reweight(self.name(), dm, weights))
    }
}
