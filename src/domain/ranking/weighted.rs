//! Weighted aggregation models - WSM and WPM.
//!
//! Both assume comparable units (normalize first) and maximizing criteria.

use nalgebra::DMatrix;
use tracing::debug;

use super::rank::{require_all_max, require_positive, scored_result, Better};
use super::{RankResult, RankingMethod};
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::McdaResult;

/// Weighted sum of each row, without validation.
pub fn wsm(matrix: &DMatrix<f64>, weights: &[f64]) -> Vec<f64> {
    matrix
        .row_iter()
        .map(|row| row.iter().zip(weights).map(|(x, w)| x * w).sum())
        .collect()
}

/// Weighted sum of the base-10 logarithms of each row, without validation.
pub fn wpm(matrix: &DMatrix<f64>, weights: &[f64]) -> Vec<f64> {
    matrix
        .row_iter()
        .map(|row| row.iter().zip(weights).map(|(x, w)| w * x.log10()).sum())
        .collect()
}

/// The weighted sum model: `score_i = Σ w_j x_ij`, higher is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedSumModel;

impl RankingMethod for WeightedSumModel {
    fn name(&self) -> &'static str {
        "WeightedSumModel"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        require_all_max(self.name(), dm)?;
        scored_result(self.name(), dm, wsm(dm.matrix(), dm.weights()), Better::Higher)
    }
}

/// The weighted product model, computed in log space to avoid underflow:
/// `score_i = Σ w_j log10(x_ij)`, higher is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedProductModel;

impl RankingMethod for WeightedProductModel {
    fn name(&self) -> &'static str {
        "WeightedProductModel"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        require_all_max(self.name(), dm)?;
        require_positive(self.name(), dm)?;
        scored_result(self.name(), dm, wpm(dm.matrix(), dm.weights()), Better::Higher)
    }
}
