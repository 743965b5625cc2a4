//! MOORA family - Multi-Objective Optimization on the basis of Ratio Analysis.
//!
//! The ratio, reference point and full multiplicative forms each rank on
//! their own; MultiMOORA aggregates the three by dominance.

use nalgebra::DMatrix;
use std::collections::BTreeMap;
use tracing::debug;

use super::rank::{rank_scores, require_positive, scored_result, Better};
use super::{RankResult, RankingMethod};
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaResult, Objective};

/// `Σ w_j s_j x_ij`, where `s_j` is the objective code, without validation.
pub fn ratio(matrix: &DMatrix<f64>, objectives: &[Objective], weights: &[f64]) -> Vec<f64> {
    matrix
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(objectives)
                .zip(weights)
                .map(|((x, o), w)| w * f64::from(o.code()) * x)
                .sum()
        })
        .collect()
}

/// Tchebycheff distance of every row to the reference point.
///
/// Returns `(scores, reference_point)`; the reference point holds each
/// column's maximum for MAX criteria and minimum for MIN criteria.
pub fn refpoint(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    weights: &[f64],
) -> (Vec<f64>, Vec<f64>) {
    let reference_point: Vec<f64> = objectives
        .iter()
        .enumerate()
        .map(|(j, o)| {
            let column = matrix.column(j);
            match o {
                Objective::Max => column.max(),
                Objective::Min => column.min(),
            }
        })
        .collect();

    let scores = matrix
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(&reference_point)
                .zip(weights)
                .map(|((x, r), w)| (w * (x - r)).abs())
                .fold(0.0, f64::max)
        })
        .collect();
    (scores, reference_point)
}

/// `Σ_{MAX} w_j ln x_ij - Σ_{MIN} w_j ln x_ij`, without validation.
///
/// This is the natural log of the weighted products ratio. When one group
/// is empty only the other contributes.
pub fn fmf(matrix: &DMatrix<f64>, objectives: &[Objective], weights: &[f64]) -> Vec<f64> {
    matrix
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(objectives)
                .zip(weights)
                .map(|((x, o), w)| f64::from(o.code()) * w * x.ln())
                .sum()
        })
        .collect()
}

/// Ratio system: weighted sum of benefits minus weighted sum of costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioMOORA;

impl RankingMethod for RatioMOORA {
    fn name(&self) -> &'static str {
        "RatioMOORA"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        let scores = ratio(dm.matrix(), dm.objectives(), dm.weights());
        scored_result(self.name(), dm, scores, Better::Higher)
    }
}

/// Reference point approach: the smallest maximum deviation wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferencePointMOORA;

impl RankingMethod for ReferencePointMOORA {
    fn name(&self) -> &'static str {
        "ReferencePointMOORA"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        let (scores, reference_point) = refpoint(dm.matrix(), dm.objectives(), dm.weights());
        Ok(scored_result(self.name(), dm, scores, Better::Lower)?
            .with_extra("reference_point", reference_point))
    }
}

/// Full multiplicative form; needs strictly positive values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullMultiplicativeFormMOORA;

impl RankingMethod for FullMultiplicativeFormMOORA {
    fn name(&self) -> &'static str {
        "FullMultiplicativeFormMOORA"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        require_positive(self.name(), dm)?;
        let scores = fmf(dm.matrix(), dm.objectives(), dm.weights());
        scored_result(self.name(), dm, scores, Better::Higher)
    }
}

/// MultiMOORA: dominance aggregation of the three MOORA rankings.
///
/// An alternative scores one point for every other alternative it beats in
/// at least two of the three rankings, and the scores are ranked higher
/// first. Equal scores fall back to the lower sum of the three ranks, then
/// the ratio rank, then input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiMOORA;

impl RankingMethod for MultiMOORA {
    fn name(&self) -> &'static str {
        "MultiMOORA"
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        debug!(method = self.name(), shape = ?dm.shape(), "ranking");
        require_positive(self.name(), dm)?;

        let (m, o, w) = (dm.matrix(), dm.objectives(), dm.weights());
        let labels = Some(dm.alternatives());
        let ratio_score = ratio(m, o, w);
        let (refpoint_score, reference_point) = refpoint(m, o, w);
        let fmf_score = fmf(m, o, w);

        let ratio_rank = rank_scores(self.name(), &ratio_score, Better::Higher, labels)?;
        let refpoint_rank = rank_scores(self.name(), &refpoint_score, Better::Lower, labels)?;
        let fmf_rank = rank_scores(self.name(), &fmf_score, Better::Higher, labels)?;

        let sub_ranks = [&ratio_rank, &refpoint_rank, &fmf_rank];
        let a_number = dm.alternative_count();
        let score: Vec<usize> = (0..a_number)
            .map(|i| {
                (0..a_number)
                    .filter(|&k| k != i)
                    .filter(|&k| sub_ranks.iter().filter(|r| r[i] < r[k]).count() >= 2)
                    .count()
            })
            .collect();
        let rank_sum: Vec<usize> = (0..a_number)
            .map(|i| sub_ranks.iter().map(|r| r[i]).sum())
            .collect();

        let mut order: Vec<usize> = (0..a_number).collect();
        order.sort_by(|&a, &b| {
            score[b]
                .cmp(&score[a])
                .then(rank_sum[a].cmp(&rank_sum[b]))
                .then(ratio_rank[a].cmp(&ratio_rank[b]))
        });
        let mut ranks = vec![0; a_number];
        for (position, idx) in order.into_iter().enumerate() {
            ranks[idx] = position + 1;
        }

        Ok(RankResult::new(self.name(), dm.alternatives().to_vec(), ranks, BTreeMap::new())?
            .with_extra("score", score)
            .with_extra("ratio_score", ratio_score)
            .with_extra("refpoint_score", refpoint_score)
            .with_extra("fmf_score", fmf_score)
            .with_extra("ratio_rank", ratio_rank)
            .with_extra("refpoint_rank", refpoint_rank)
            .with_extra("fmf_rank", fmf_rank)
            .with_extra("reference_point", reference_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_matrix::mkdm;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::preprocessing::{Transformer, VectorScaler};
    use approx::assert_abs_diff_eq;

    fn scaled(rows: Vec<Vec<f64>>, objectives: Vec<&str>) -> DecisionMatrix {
        let dm = mkdm(rows, objectives, None, None, None).unwrap();
        VectorScaler::default().transform(&dm).unwrap()
    }

    fn three_by_three(objective: &str) -> DecisionMatrix {
        scaled(
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]],
            vec![objective; 3],
        )
    }

    // Ratio Tests

    #[test]
    fn ratio_subtracts_costs_from_benefits() {
        let dm = mkdm(
            vec![vec![1.0, 2.0], vec![3.0, 1.0]],
            vec!["max", "min"],
            Some(vec![2.0, 1.0]),
            None,
            None,
        )
        .unwrap();
        let result = RatioMOORA.rank(&dm).unwrap();
        assert_eq!(result.score(), Some(&[0.0, 5.0][..]));
        assert_eq!(result.ranks(), &[2, 1]);
    }

    // Reference Point Tests

    #[test]
    fn refpoint_weights_the_deviation() {
        let dm = mkdm(
            vec![vec![1.0, 2.0], vec![3.0, 1.0]],
            vec!["max", "min"],
            Some(vec![1.0, 3.0]),
            None,
            None,
        )
        .unwrap();
        let result = ReferencePointMOORA.rank(&dm).unwrap();
        assert_eq!(result.score(), Some(&[3.0, 0.0][..]));
        assert_eq!(result.ranks(), &[2, 1]);
        let reference = result.extra("reference_point").and_then(|e| e.as_vector());
        assert_eq!(reference, Some(&[3.0, 1.0][..]));
    }

    // Full Multiplicative Form Tests

    #[test]
    fn fmf_only_minimize() {
        let dm = three_by_three("min");
        let result = FullMultiplicativeFormMOORA.rank(&dm).unwrap();
        assert_eq!(result.ranks(), &[1, 2, 3]);
        // ln(1 / product of the costs), with no benefit side at all
        let expected = [4.98750860f64, 1.99177633, 0.55669180];
        for (i, (s, e)) in result.score().unwrap().iter().zip(expected).enumerate() {
            assert_abs_diff_eq!(*s, e, epsilon = 1e-6);
            let direct: f64 = -dm.matrix().row(i).iter().map(|x| x.ln()).sum::<f64>();
            assert_abs_diff_eq!(*s, direct, epsilon = 1e-12);
        }
    }

    #[test]
    fn fmf_only_maximize() {
        let result = FullMultiplicativeFormMOORA.rank(&three_by_three("max")).unwrap();
        assert_eq!(result.ranks(), &[3, 2, 1]);
        let expected = [0.00682264f64, 0.13645283, 0.57310187];
        for (s, e) in result.score().unwrap().iter().zip(expected) {
            assert_abs_diff_eq!(*s, e.ln(), epsilon = 1e-4);
        }
    }

    #[test]
    fn fmf_rejects_zero() {
        let dm = mkdm(
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 6.0]],
            vec!["max"; 3],
            None,
            None,
            None,
        )
        .unwrap();
        let err = FullMultiplicativeFormMOORA.rank(&dm).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert!(err.to_string().contains("criterion 'C1'"));
    }

    // MultiMOORA Tests

    #[test]
    fn multimoora_follows_majority() {
        let dm = scaled(
            vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]],
            vec!["max", "min"],
        );
        let result = MultiMOORA.rank(&dm).unwrap();
        assert_eq!(result.ranks(), &[3, 2, 1]);
        let score = result.score().unwrap();
        assert_eq!(score, &[0.0, 1.0, 2.0]);
        assert!(result.extra("ratio_rank").is_some());
        assert!(result.extra("reference_point").is_some());
    }

    #[test]
    fn multimoora_ranks_are_a_permutation() {
        let dm = scaled(
            vec![vec![2.0, 2.0, 2.0], vec![2.0, 2.0, 2.0], vec![1.0, 3.0, 5.0]],
            vec!["max", "min", "max"],
        );
        let mut ranks = MultiMOORA.rank(&dm).unwrap().ranks().to_vec();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
