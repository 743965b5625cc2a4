//! SIMUS - Sequential Interactive Model for Urban Systems.
//!
//! Every criterion in turn becomes the objective of a linear program whose
//! decision variables are the alternatives' intensities, with the remaining
//! criteria as constraints. The normalized optimal solutions form the
//! efficient results matrix, which two procedures turn into scores.

mod simplex;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use super::rank::{rank_scores, Better};
use super::{RankResult, RankingMethod};
use crate::config::SimusConfig;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};
use crate::domain::preprocessing::stats;

pub use simplex::{
    Constraint, LinearProgram, LpError, Relation, Sense, SimplexOptions, Solution,
};

/// Scoring procedure that drives the final rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    /// Sum of normalized stage values times the participation factor.
    #[default]
    FirstMethod,
    /// Net flow of the pairwise dominance matrix.
    SecondMethod,
}

impl TryFrom<u8> for RankBy {
    type Error = McdaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RankBy::FirstMethod),
            2 => Ok(RankBy::SecondMethod),
            other => Err(McdaError::invalid_value(
                "SIMUS",
                format!("'rank_by' must be 1 or 2, found {}", other),
            )),
        }
    }
}

/// Per-stage solutions and the scores derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimusOutcome {
    /// Constraint bounds used, one per criterion.
    pub b: Vec<f64>,
    /// Optimal objective value of every stage.
    pub stage_values: Vec<f64>,
    /// Alternatives x stages, every stage column normalized to sum 1.
    pub efficient_results: DMatrix<f64>,
    /// `dominance[(a, b)]`: how much `a` exceeds `b`, summed over stages.
    pub dominance: DMatrix<f64>,
    pub method_1_score: Vec<f64>,
    pub method_2_score: Vec<f64>,
}

/// Default constraint bounds: column max for MAX criteria, column min for MIN.
pub fn default_b(matrix: &DMatrix<f64>, objectives: &[Objective]) -> Vec<f64> {
    objectives
        .iter()
        .enumerate()
        .map(|(j, o)| match o {
            Objective::Max => matrix.column(j).max(),
            Objective::Min => matrix.column(j).min(),
        })
        .collect()
}

/// Builds the linear program of one stage.
fn stage_program(matrix: &DMatrix<f64>, objectives: &[Objective], b: &[f64], stage: usize) -> LinearProgram {
    let sense = match objectives[stage] {
        Objective::Max => Sense::Maximize,
        Objective::Min => Sense::Minimize,
    };
    let constraints = (0..matrix.ncols())
        .filter(|&k| k != stage)
        .map(|k| Constraint {
            coefficients: matrix.column(k).iter().copied().collect(),
            relation: match objectives[k] {
                Objective::Max => Relation::LessEq,
                Objective::Min => Relation::GreaterEq,
            },
            rhs: b[k],
        })
        .collect();
    LinearProgram {
        sense,
        objective: matrix.column(stage).iter().copied().collect(),
        constraints,
    }
}

/// Runs every stage and both scoring procedures.
///
/// `labels` name the criteria in solver errors.
///
/// # Errors
///
/// `InvalidShape` if `objectives` or `b` disagree with the column count.
/// `SolverFailure` if a stage is infeasible, unbounded or exceeds the
/// iteration limit.
pub fn simus(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    b: &[f64],
    labels: &[String],
    options: SimplexOptions,
) -> McdaResult<SimusOutcome> {
    let (a_number, c_number) = matrix.shape();
    stats::ensure_len("objectives", objectives.len(), c_number)?;
    stats::ensure_len("b", b.len(), c_number)?;
    let mut stage_values = Vec::with_capacity(c_number);
    let mut efficient_results = DMatrix::zeros(a_number, c_number);

    for stage in 0..c_number {
        let label = labels.get(stage).cloned().unwrap_or_else(|| stage.to_string());
        let solution = stage_program(matrix, objectives, b, stage)
            .solve(options)
            .map_err(|err| McdaError::solver_failure(label.clone(), err.to_string()))?;
        trace!(stage = %label, value = solution.value, x = ?solution.x, "solved SIMUS stage");

        let total: f64 = solution.x.iter().sum();
        if total > options.tolerance {
            for (i, x) in solution.x.iter().enumerate() {
                efficient_results[(i, stage)] = x / total;
            }
        } else {
            warn!(stage = %label, "SIMUS stage optimum is the zero vector");
        }
        stage_values.push(solution.value);
    }

    let method_1_score = (0..a_number)
        .map(|i| {
            let row = efficient_results.row(i);
            let participation = row.iter().filter(|v| **v > options.tolerance).count() as f64 / c_number as f64;
            row.sum() * participation
        })
        .collect();

    let dominance = DMatrix::from_fn(a_number, a_number, |a, b| {
        (0..c_number)
            .map(|l| (efficient_results[(a, l)] - efficient_results[(b, l)]).max(0.0))
            .sum::<f64>()
    });
    let method_2_score = (0..a_number)
        .map(|i| dominance.row(i).sum() - dominance.column(i).sum())
        .collect();

    Ok(SimusOutcome {
        b: b.to_vec(),
        stage_values,
        efficient_results,
        dominance,
        method_1_score,
        method_2_score,
    })
}

/// SIMUS ranking. Requires a non-negative matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SIMUS {
    pub rank_by: RankBy,
    /// Constraint bounds; `None` uses [`default_b`].
    pub b: Option<Vec<f64>>,
    pub options: SimplexOptions,
}

impl SIMUS {
    pub fn new(rank_by: RankBy) -> Self {
        Self {
            rank_by,
            b: None,
            options: SimplexOptions::default(),
        }
    }

    pub fn with_b(mut self, b: Vec<f64>) -> Self {
        self.b = Some(b);
        self
    }

    pub fn from_config(config: &SimusConfig) -> McdaResult<Self> {
        Ok(Self {
            rank_by: RankBy::try_from(config.rank_by)?,
            b: None,
            options: SimplexOptions {
                max_iterations: config.max_iterations,
                tolerance: config.tolerance,
            },
        })
    }
}

impl Default for SIMUS {
    fn default() -> Self {
        Self::new(RankBy::default())
    }
}

impl RankingMethod for SIMUS {
    fn name(&self) -> &'static str {
        "SIMUS"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), rank_by = ?self.rank_by, "ranking");
        if let Some(j) = (0..dm.criteria_count()).find(|&j| dm.matrix().column(j).iter().any(|v| *v < 0.0)) {
            return Err(McdaError::invalid_value(
                self.name(),
                format!("negative values in criterion '{}'", dm.criteria()[j]),
            ));
        }

        let b = match &self.b {
            Some(b) => b.clone(),
            None => default_b(dm.matrix(), dm.objectives()),
        };

        let outcome = simus(dm.matrix(), dm.objectives(), &b, dm.criteria(), self.options)?;
        let score = match self.rank_by {
            RankBy::FirstMethod => outcome.method_1_score.clone(),
            RankBy::SecondMethod => outcome.method_2_score.clone(),
        };
        let ranks = rank_scores(self.name(), &score, Better::Higher, Some(dm.alternatives()))?;

        Ok(RankResult::new(self.name(), dm.alternatives().to_vec(), ranks, BTreeMap::new())?
            .with_extra("score", score)
            .with_extra("b", outcome.b)
            .with_extra("stage_values", outcome.stage_values)
            .with_extra("efficient_results", outcome.efficient_results)
            .with_extra("dominance", outcome.dominance)
            .with_extra("method_1_score", outcome.method_1_score)
            .with_extra("method_2_score", outcome.method_2_score))
    }
}
