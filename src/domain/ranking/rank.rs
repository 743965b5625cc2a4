//! Score to rank conversion shared by every method.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::RankResult;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};

/// Which end of the score range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Better {
    Higher,
    Lower,
}

/// Converts scores into ranks 1..=n.
///
/// Ranks are strict: equal scores get consecutive ranks in input order.
///
/// # Errors
///
/// `InvalidValue` if a score is NaN.
pub fn rank_values(scores: &[f64], better: Better) -> McdaResult<Vec<usize>> {
    rank_scores("rank_values", scores, better, None)
}

pub(crate) fn rank_scores(
    method: &str,
    scores: &[f64],
    better: Better,
    labels: Option<&[String]>,
) -> McdaResult<Vec<usize>> {
    if let Some(idx) = scores.iter().position(|s| s.is_nan()) {
        let who = labels
            .and_then(|l| l.get(idx))
            .map(|l| format!("alternative '{}'", l))
            .unwrap_or_else(|| format!("position {}", idx));
        return Err(McdaError::invalid_value(method, format!("score of {} is NaN", who)));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        let cmp = scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal);
        match better {
            Better::Higher => cmp.reverse(),
            Better::Lower => cmp,
        }
    });

    let mut ranks = vec![0; scores.len()];
    for (position, idx) in order.into_iter().enumerate() {
        ranks[idx] = position + 1;
    }
    Ok(ranks)
}

/// Ranks the alternatives of `dm` by `scores` and reports them as the `score` extra.
pub(crate) fn scored_result(
    method: &str,
    dm: &DecisionMatrix,
    scores: Vec<f64>,
    better: Better,
) -> McdaResult<RankResult> {
    let ranks = rank_scores(method, &scores, better, Some(dm.alternatives()))?;
    Ok(RankResult::new(method, dm.alternatives().to_vec(), ranks, BTreeMap::new())?.with_extra("score", scores))
}

/// Fails unless every criterion is maximized.
pub(crate) fn require_all_max(method: &str, dm: &DecisionMatrix) -> McdaResult<()> {
    match dm.objectives().iter().position(|o| *o == Objective::Min) {
        Some(j) => Err(McdaError::invalid_value(
            method,
            format!("minimize objective in criterion '{}'", dm.criteria()[j]),
        )),
        None => Ok(()),
    }
}

/// Fails unless every value is strictly positive.
pub(crate) fn require_positive(method: &str, dm: &DecisionMatrix) -> McdaResult<()> {
    for j in 0..dm.criteria_count() {
        if dm.matrix().column(j).iter().any(|v| *v <= 0.0) {
            return Err(McdaError::invalid_value(
                method,
                format!("values <= 0 in criterion '{}'", dm.criteria()[j]),
            ));
        }
    }
    Ok(())
}
