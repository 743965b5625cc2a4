//! TOPSIS - Technique for Order of Preference by Similarity to Ideal Solution.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::rank::{scored_result, Better};
use super::{RankResult, RankingMethod};
use crate::config::TopsisConfig;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};
use crate::domain::preprocessing::stats;

/// Distance between an alternative and a reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Cityblock,
    Chebyshev,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Cityblock => "cityblock",
            Metric::Chebyshev => "chebyshev",
        }
    }

    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        let diffs = a.iter().zip(b).map(|(x, y)| (x - y).abs());
        match self {
            Metric::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Metric::Cityblock => diffs.sum(),
            Metric::Chebyshev => diffs.fold(0.0, f64::max),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            "cityblock" | "manhattan" => Ok(Metric::Cityblock),
            "chebyshev" => Ok(Metric::Chebyshev),
            other => Err(McdaError::invalid_value(
                "TOPSIS",
                format!("unknown metric '{}'", other),
            )),
        }
    }
}

/// Output of the TOPSIS computation.
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisOutcome {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
    pub similarity: Vec<f64>,
}

/// Runs TOPSIS on a matrix, weighting it first.
///
/// The ideal holds each weighted column's best value and the anti-ideal its
/// worst, oriented by objective. The similarity of an alternative is
/// `d_worst / (d_best + d_worst)`.
///
/// # Errors
///
/// `InvalidShape` if `objectives` or `weights` disagree with the column
/// count. `InvalidValue` if an alternative is as far from the ideal as from the
/// anti-ideal at distance zero, which only happens when they coincide.
pub fn topsis(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    weights: &[f64],
    metric: Metric,
) -> McdaResult<TopsisOutcome> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    stats::ensure_len("weights", weights.len(), matrix.ncols())?;
    let weighted = DMatrix::from_fn(matrix.nrows(), matrix.ncols(), |i, j| matrix[(i, j)] * weights[j]);

    let mut ideal = Vec::with_capacity(objectives.len());
    let mut anti_ideal = Vec::with_capacity(objectives.len());
    for (j, objective) in objectives.iter().enumerate() {
        let column = weighted.column(j);
        let (max, min) = (column.max(), column.min());
        match objective {
            Objective::Max => {
                ideal.push(max);
                anti_ideal.push(min);
            }
            Objective::Min => {
                ideal.push(min);
                anti_ideal.push(max);
            }
        }
    }

    let similarity = weighted
        .row_iter()
        .map(|row| {
            let row: Vec<f64> = row.iter().copied().collect();
            let d_better = metric.distance(&row, &ideal);
            let d_worst = metric.distance(&row, &anti_ideal);
            let total = d_better + d_worst;
            if total == 0.0 {
                return Err(McdaError::invalid_value(
                    "TOPSIS",
                    "ideal and anti-ideal points coincide",
                ));
            }
            Ok(d_worst / total)
        })
        .collect::<McdaResult<Vec<_>>>()?;

    Ok(TopsisOutcome {
        ideal,
        anti_ideal,
        similarity,
    })
}

/// TOPSIS ranking: the closer to the ideal relative to the anti-ideal, the better.
///
/// Expects comparable units, so scale the matrix first (usually with the
/// vector scaler).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TOPSIS {
    pub metric: Metric,
}

impl TOPSIS {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    pub fn from_config(config: &TopsisConfig) -> Self {
        Self::new(config.metric)
    }
}

impl RankingMethod for TOPSIS {
    fn name(&self) -> &'static str {
        "TOPSIS"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), metric = %self.metric, "ranking");
        let outcome = topsis(dm.matrix(), dm.objectives(), dm.weights(), self.metric)?;
        Ok(
            scored_result(self.name(), dm, outcome.similarity.clone(), Better::Higher)?
                .with_extra("similarity", outcome.similarity)
                .with_extra("ideal", outcome.ideal)
                .with_extra("anti_ideal", outcome.anti_ideal),
        )
    }
}
