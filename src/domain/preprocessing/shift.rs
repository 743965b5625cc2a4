//! Value shifters - move columns away from negative and zero values.
//!
//! Both operate per column on the matrix and on the weight vector as a
//! whole, depending on their [`Target`].

use tracing::debug;

use super::stats;
use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaResult, Target};

/// Adds `|min|` to every value when the vector holds a negative value,
/// so its minimum becomes zero. Non-negative vectors are returned as is.
pub fn push_negatives(values: &[f64]) -> Vec<f64> {
    let min = stats::min(values);
    if min < 0.0 {
        values.iter().map(|v| v - min).collect()
    } else {
        values.to_vec()
    }
}

/// Adds `value` to every element when the vector holds at least one zero.
pub fn add_value_to_zero(values: &[f64], value: f64) -> Vec<f64> {
    if values.iter().any(|v| *v == 0.0) {
        values.iter().map(|v| v + value).collect()
    } else {
        values.to_vec()
    }
}

/// Applies a per-vector shift to the columns and/or weights.
fn shift(
    name: &'static str,
    target: Target,
    dm: &DecisionMatrix,
    f: impl Fn(&[f64]) -> Vec<f64>,
) -> DecisionMatrix {
    debug!(
        transformer = name,
        %target,
        alternatives = dm.alternative_count(),
        criteria = dm.criteria_count(),
        "shifting decision matrix"
    );
    let mut shifted = dm.clone();
    if target.includes_matrix() {
        let columns: Vec<Vec<f64>> = (0..dm.criteria_count()).map(|j| f(&dm.column(j))).collect();
        shifted = shifted.replace_matrix(stats::from_columns(dm.alternative_count(), &columns));
    }
    if target.includes_weights() {
        shifted = shifted.replace_weights(f(dm.weights()));
    }
    shifted
}

/// Shifts every column (or the weights) holding negatives up to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushNegatives {
    pub target: Target,
}

impl PushNegatives {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Transformer for PushNegatives {
    fn name(&self) -> &'static str {
        "PushNegatives"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        Ok(shift(self.name(), self.target, dm, push_negatives))
    }
}

/// Adds a constant to every column (or the weights) holding a zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddValueToZero {
    pub value: f64,
    pub target: Target,
}

impl AddValueToZero {
    pub fn new(value: f64, target: Target) -> Self {
        Self { value, target }
    }
}

impl Default for AddValueToZero {
    fn default() -> Self {
        Self {
            value: 1.0,
            target: Target::Matrix,
        }
    }
}

impl Transformer for AddValueToZero {
    fn name(&self) -> &'static str {
        "AddValueToZero"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let value = self.value;
        Ok(shift(self.name(), self.target, dm, |values| add_value_to_zero(values, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_matrix::mkdm;

    fn sample() -> DecisionMatrix {
        mkdm(
            vec![vec![-2.0, 0.0, 3.0], vec![1.0, 5.0, 4.0]],
            vec!["max", "min", "max"],
            Some(vec![-1.0, 0.0, 2.0]),
            None,
            None,
        )
        .unwrap()
    }

    // Push Negatives Tests

    #[test]
    fn push_negatives_moves_minimum_to_zero() {
        assert_eq!(push_negatives(&[-3.0, 1.0, 2.0]), vec![0.0, 4.0, 5.0]);
        assert_eq!(push_negatives(&[0.0, 1.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn push_negatives_only_touches_negative_columns() {
        let out = PushNegatives::default().transform(&sample()).unwrap();
        assert_eq!(out.rows(), vec![vec![0.0, 0.0, 3.0], vec![3.0, 5.0, 4.0]]);
        assert_eq!(out.weights(), sample().weights());
    }

    #[test]
    fn push_negatives_on_weights() {
        let out = PushNegatives::new(Target::Weights).transform(&sample()).unwrap();
        assert_eq!(out.weights(), &[0.0, 1.0, 3.0]);
        assert_eq!(out.matrix(), sample().matrix());
    }

    // Add Value To Zero Tests

    #[test]
    fn add_value_to_zero_shifts_columns_with_a_zero() {
        assert_eq!(add_value_to_zero(&[0.0, 2.0], 0.5), vec![0.5, 2.5]);
        assert_eq!(add_value_to_zero(&[1.0, 2.0], 0.5), vec![1.0, 2.0]);
    }

    #[test]
    fn add_value_to_zero_defaults_to_one() {
        let out = AddValueToZero::default().transform(&sample()).unwrap();
        assert_eq!(out.rows(), vec![vec![-2.0, 1.0, 3.0], vec![1.0, 6.0, 4.0]]);
    }

    #[test]
    fn add_value_to_zero_on_both() {
        let out = AddValueToZero::new(2.0, Target::Both).transform(&sample()).unwrap();
        assert_eq!(out.column(1), vec![2.0, 7.0]);
        assert_eq!(out.weights(), &[1.0, 2.0, 4.0]);
    }
}
