//! Rank Result - the outcome of a ranking method.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{McdaError, McdaResult};

/// A diagnostic value reported next to the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraValue {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(DMatrix<f64>),
    Flags(Vec<bool>),
}

impl ExtraValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ExtraValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            ExtraValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            ExtraValue::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&[bool]> {
        match self {
            ExtraValue::Flags(f) => Some(f),
            _ => None,
        }
    }
}

impl From<f64> for ExtraValue {
    fn from(value: f64) -> Self {
        ExtraValue::Scalar(value)
    }
}

impl From<Vec<f64>> for ExtraValue {
    fn from(value: Vec<f64>) -> Self {
        ExtraValue::Vector(value)
    }
}

impl From<Vec<usize>> for ExtraValue {
    fn from(value: Vec<usize>) -> Self {
        ExtraValue::Vector(value.into_iter().map(|v| v as f64).collect())
    }
}

impl From<DMatrix<f64>> for ExtraValue {
    fn from(value: DMatrix<f64>) -> Self {
        ExtraValue::Matrix(value)
    }
}

impl From<Vec<bool>> for ExtraValue {
    fn from(value: Vec<bool>) -> Self {
        ExtraValue::Flags(value)
    }
}

/// Ranks of the alternatives as computed by one method, plus its extras.
///
/// Equality covers the method name, the labels and the ranks. Extras hold
/// floating point diagnostics and are compared by the caller with a tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResult {
    method: String,
    alternatives: Vec<String>,
    ranks: Vec<usize>,
    extra: BTreeMap<String, ExtraValue>,
}

impl RankResult {
    /// Creates a result.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if labels and ranks differ in length.
    pub fn new(
        method: impl Into<String>,
        alternatives: Vec<String>,
        ranks: Vec<usize>,
        extra: BTreeMap<String, ExtraValue>,
    ) -> McdaResult<Self> {
        if alternatives.len() != ranks.len() {
            return Err(McdaError::invalid_shape(format!(
                "'alternatives' and 'ranks' must have the same length. Found {} and {}",
                alternatives.len(),
                ranks.len()
            )));
        }
        Ok(Self {
            method: method.into(),
            alternatives,
            ranks,
            extra,
        })
    }

    /// Adds or replaces an extra value.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Ranks aligned with [`alternatives`](Self::alternatives); 1 is best.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    pub fn extras(&self) -> &BTreeMap<String, ExtraValue> {
        &self.extra
    }

    pub fn extra(&self, name: &str) -> Option<&ExtraValue> {
        self.extra.get(name)
    }

    /// The `score` extra, when the method reports one per alternative.
    pub fn score(&self) -> Option<&[f64]> {
        self.extra("score").and_then(ExtraValue::as_vector)
    }

    /// Rank of the alternative with the given label.
    pub fn rank_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives
            .iter()
            .position(|a| a == alternative)
            .map(|idx| self.ranks[idx])
    }

    /// First alternative holding the lowest rank.
    pub fn best(&self) -> Option<&str> {
        self.ranks
            .iter()
            .enumerate()
            .min_by_key(|(idx, rank)| (**rank, *idx))
            .map(|(idx, _)| self.alternatives[idx].as_str())
    }

    /// Labels ordered from best to worst; equal ranks keep input order.
    pub fn alternatives_by_rank(&self) -> Vec<&str> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&idx| self.ranks[idx]);
        order.into_iter().map(|idx| self.alternatives[idx].as_str()).collect()
    }

    /// Returns true if two alternatives share a rank.
    pub fn has_ties(&self) -> bool {
        let mut sorted = self.ranks.clone();
        sorted.sort_unstable();
        sorted.windows(2).any(|w| w[0] == w[1])
    }
}

impl PartialEq for RankResult {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.alternatives == other.alternatives
            && self.ranks == other.ranks
    }
}

impl fmt::Display for RankResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        let pairs: Vec<String> = self
            .alternatives
            .iter()
            .zip(&self.ranks)
            .map(|(a, r)| format!("{}: {}", a, r))
            .collect();
        write!(f, "{}", pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("A{}", i)).collect()
    }

    fn result(ranks: Vec<usize>) -> RankResult {
        RankResult::new("Test", labels(ranks.len()), ranks, BTreeMap::new()).unwrap()
    }

    // Construction Tests

    #[test]
    fn new_rejects_length_mismatch() {
        let err = RankResult::new("Test", labels(2), vec![1], BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("Found 2 and 1"));
    }

    // Equality Tests

    #[test]
    fn equality_ignores_extras() {
        let a = result(vec![2, 1, 3]).with_extra("score", vec![0.1, 0.9, 0.0]);
        let b = result(vec![2, 1, 3]).with_extra("score", vec![0.2, 0.8, 0.1]);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_checks_method_and_ranks() {
        assert_ne!(result(vec![1, 2]), result(vec![2, 1]));
        let renamed = RankResult::new("Other", labels(2), vec![1, 2], BTreeMap::new()).unwrap();
        assert_ne!(result(vec![1, 2]), renamed);
    }

    // Helper Tests

    #[test]
    fn lookup_helpers() {
        let r = result(vec![3, 1, 2]).with_extra("score", vec![0.0, 2.0, 1.0]);
        assert_eq!(r.rank_of("A0"), Some(3));
        assert_eq!(r.rank_of("missing"), None);
        assert_eq!(r.best(), Some("A1"));
        assert_eq!(r.alternatives_by_rank(), vec!["A1", "A2", "A0"]);
        assert_eq!(r.score(), Some(&[0.0, 2.0, 1.0][..]));
        assert!(!r.has_ties());
    }

    #[test]
    fn ties_are_detected() {
        let r = result(vec![1, 2, 1]);
        assert!(r.has_ties());
        assert_eq!(r.best(), Some("A0"));
        assert_eq!(r.alternatives_by_rank(), vec!["A0", "A2", "A1"]);
    }

    #[test]
    fn extra_accessors_match_variant() {
        let r = result(vec![1])
            .with_extra("flag", vec![true])
            .with_extra("scalar", 2.5);
        assert_eq!(r.extra("flag").and_then(ExtraValue::as_flags), Some(&[true][..]));
        assert_eq!(r.extra("scalar").and_then(ExtraValue::as_scalar), Some(2.5));
        assert!(r.extra("scalar").and_then(ExtraValue::as_vector).is_none());
    }

    #[test]
    fn serializes_to_json() {
        let r = result(vec![2, 1]).with_extra("score", vec![0.5, 1.5]);
        let json = serde_json::to_string(&r).unwrap();
        let restored: RankResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, r);
        assert_eq!(restored.score(), Some(&[0.5, 1.5][..]));
    }

    #[test]
    fn display_lists_ranks() {
        assert_eq!(format!("{}", result(vec![2, 1])), "Test\nA0: 2, A1: 1");
    }
}
