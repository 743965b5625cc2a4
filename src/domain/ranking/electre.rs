//! ELECTRE I - outranking by concordance and discordance.
//!
//! The method yields a partial order: the kernel (alternatives nothing
//! outranks) gets rank 1 and every other alternative rank 2.

use nalgebra::DMatrix;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{RankResult, RankingMethod};
use crate::config::ElectreConfig;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};
use crate::domain::preprocessing::stats;

/// Share of the total weight held by the criteria where `a` is at least as
/// good as `b`, for every ordered pair. The diagonal is NaN.
pub fn concordance(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    weights: &[f64],
) -> McdaResult<DMatrix<f64>> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    stats::ensure_len("weights", weights.len(), matrix.ncols())?;
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(McdaError::invalid_value("ELECTRE1", "weights sum to zero"));
    }

    let a_number = matrix.nrows();
    Ok(DMatrix::from_fn(a_number, a_number, |a, b| {
        if a == b {
            return f64::NAN;
        }
        let agreeing: f64 = objectives
            .iter()
            .zip(weights)
            .enumerate()
            .filter(|(j, (o, _))| {
                let diff = matrix[(a, *j)] - matrix[(b, *j)];
                match o {
                    Objective::Max => diff >= 0.0,
                    Objective::Min => diff <= 0.0,
                }
            })
            .map(|(_, (_, w))| w)
            .sum();
        agreeing / total
    }))
}

/// Largest shortfall of `a` against `b`, each criterion's shortfall taken
/// relative to that criterion's range. The diagonal is NaN; constant
/// criteria never contribute.
pub fn discordance(matrix: &DMatrix<f64>, objectives: &[Objective]) -> McdaResult<DMatrix<f64>> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    let ranges: Vec<f64> = (0..matrix.ncols())
        .map(|j| {
            let column = matrix.column(j);
            column.max() - column.min()
        })
        .collect();

    let a_number = matrix.nrows();
    Ok(DMatrix::from_fn(a_number, a_number, |a, b| {
        if a == b {
            return f64::NAN;
        }
        objectives
            .iter()
            .enumerate()
            .filter(|(j, _)| ranges[*j] > 0.0)
            .map(|(j, o)| {
                let advantage = f64::from(o.code()) * (matrix[(a, j)] - matrix[(b, j)]);
                if advantage < 0.0 {
                    -advantage / ranges[j]
                } else {
                    0.0
                }
            })
            .fold(0.0, f64::max)
    }))
}

/// ELECTRE I with concordance threshold `p` and discordance threshold `q`.
///
/// `a` outranks `b` when `concordance[a][b] >= p` and `discordance[a][b] <= q`.
/// Kernel members rank 1 and the rest rank 2. A cyclic relation leaves the
/// kernel empty, and then every alternative ranks 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ELECTRE1 {
    pub p: f64,
    pub q: f64,
}

impl ELECTRE1 {
    pub fn new(p: f64, q: f64) -> Self {
        Self { p, q }
    }

    pub fn from_config(config: &ElectreConfig) -> Self {
        Self::new(config.p, config.q)
    }
}

impl Default for ELECTRE1 {
    fn default() -> Self {
        Self { p: 0.65, q: 0.35 }
    }
}

impl RankingMethod for ELECTRE1 {
    fn name(&self) -> &'static str {
        "ELECTRE1"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), p = self.p, q = self.q, "ranking");
        for (name, value) in [("p", self.p), ("q", self.q)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(McdaError::invalid_value(
                    self.name(),
                    format!("threshold {} must be in [0, 1], found {}", name, value),
                ));
            }
        }

        let concordance = concordance(dm.matrix(), dm.objectives(), dm.weights())?;
        let discordance = discordance(dm.matrix(), dm.objectives())?;

        let a_number = dm.alternative_count();
        let outrank = DMatrix::from_fn(a_number, a_number, |a, b| {
            a != b && concordance[(a, b)] >= self.p && discordance[(a, b)] <= self.q
        });
        let kernel: Vec<bool> = (0..a_number)
            .map(|b| !(0..a_number).any(|a| outrank[(a, b)]))
            .collect();
        let ranks = if kernel.contains(&true) {
            kernel.iter().map(|k| if *k { 1 } else { 2 }).collect()
        } else {
            warn!(method = self.name(), "outranking relation has no kernel");
            vec![1; a_number]
        };

        Ok(RankResult::new(self.name(), dm.alternatives().to_vec(), ranks, BTreeMap::new())?
            .with_extra("kernel", kernel)
            .with_extra("outrank", outrank.map(|o| if o { 1.0 } else { 0.0 }))
            .with_extra("concordance", concordance)
            .with_extra("discordance", discordance)
            .with_extra("p", self.p)
            .with_extra("q", self.q))
    }
}
