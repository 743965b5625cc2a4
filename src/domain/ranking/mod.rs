//! Ranking module - aggregation of a decision matrix into a ranking.
//!
//! # Components
//!
//! - `RankingMethod` - the `rank(dm) -> RankResult` capability
//! - `WeightedSumModel`, `WeightedProductModel`
//! - `RatioMOORA`, `ReferencePointMOORA`, `FullMultiplicativeFormMOORA`, `MultiMOORA`
//! - `TOPSIS`, `ELECTRE1`, `SIMUS`
//! - `Method` - closed set of the above, built by name
//! - `RankResult` / `ExtraValue` - ranks plus method diagnostics
//! - `rank_values` - shared score to rank conversion
//!
//! Methods are pure: they read the matrix, check their preconditions and
//! never coerce invalid input.

mod electre;
mod method;
mod moora;
mod rank;
mod result;
mod simus;
mod topsis;
mod weighted;

use std::fmt;

use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::McdaResult;

pub use electre::{concordance, discordance, ELECTRE1};
pub use method::Method;
pub use moora::{
    fmf, ratio, refpoint, FullMultiplicativeFormMOORA, MultiMOORA, RatioMOORA,
    ReferencePointMOORA,
};
pub use rank::{rank_values, Better};
pub use result::{ExtraValue, RankResult};
pub use simus::{
    default_b, simus, Constraint, LinearProgram, LpError, RankBy, Relation, Sense,
    SimplexOptions, SimusOutcome, Solution, SIMUS,
};
pub use topsis::{topsis, Metric, TopsisOutcome, TOPSIS};
pub use weighted::{wpm, wsm, WeightedProductModel, WeightedSumModel};

/// A method that ranks the alternatives of a decision matrix.
pub trait RankingMethod: fmt::Debug + Send + Sync {
    /// Name reported in the result.
    fn name(&self) -> &'static str;

    /// Ranks `dm`, failing if a precondition of the method does not hold.
    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult>;
}
