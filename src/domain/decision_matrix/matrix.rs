//! Decision Matrix - immutable alternatives x criteria value object.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DecisionMatrixBuilder, DecisionTable};
use crate::domain::foundation::{McdaResult, Objective};

/// Kind of values a criterion column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
}

impl ValueKind {
    /// Infers the kind of a column: integer when every value is a finite whole number.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        if values
            .into_iter()
            .all(|v| v.is_finite() && v.fract() == 0.0)
        {
            ValueKind::Integer
        } else {
            ValueKind::Float
        }
    }
}

/// The decision matrix: values, per-criterion objective and weight, and labels.
///
/// Never mutated after construction. Transformers and ranking methods take it
/// by reference and produce new instances.
#[derive(Debug, Clone)]
pub struct DecisionMatrix {
    matrix: DMatrix<f64>,
    objectives: Vec<Objective>,
    weights: Vec<f64>,
    alternatives: Vec<String>,
    criteria: Vec<String>,
    dtypes: Vec<ValueKind>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Assembles an already validated matrix. Callers guarantee the shapes agree.
    pub(crate) fn from_parts(
        matrix: DMatrix<f64>,
        objectives: Vec<Objective>,
        weights: Vec<f64>,
        alternatives: Vec<String>,
        criteria: Vec<String>,
    ) -> Self {
        let dtypes = (0..matrix.ncols())
            .map(|j| ValueKind::infer(matrix.column(j).iter()))
            .collect();
        Self {
            matrix,
            objectives,
            weights,
            alternatives,
            criteria,
            dtypes,
        }
    }

    /// Returns a copy holding new values. Every column becomes `Float`.
    pub(crate) fn replace_matrix(mut self, matrix: DMatrix<f64>) -> Self {
        debug_assert_eq!(matrix.shape(), self.matrix.shape());
        self.dtypes = vec![ValueKind::Float; matrix.ncols()];
        self.matrix = matrix;
        self
    }

    /// Returns a copy holding new weights.
    pub(crate) fn replace_weights(mut self, weights: Vec<f64>) -> Self {
        debug_assert_eq!(weights.len(), self.weights.len());
        self.weights = weights;
        self
    }

    /// Returns a copy holding new objectives.
    pub(crate) fn replace_objectives(mut self, objectives: Vec<Objective>) -> Self {
        debug_assert_eq!(objectives.len(), self.objectives.len());
        self.objectives = objectives;
        self
    }

    /// Rebuilds a decision matrix from its summary table.
    pub fn from_table(table: &DecisionTable) -> McdaResult<Self> {
        DecisionMatrix::builder()
            .matrix(table.rows.clone())
            .objectives(table.objectives.clone())
            .weights(table.weights.clone())
            .alternatives(table.alternatives.clone())
            .criteria(table.criteria.clone())
            .build()
    }

    // Read-only views

    /// The numeric alternatives x criteria values.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The values as row-major nested vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.matrix.nrows())
            .map(|i| self.matrix.row(i).iter().copied().collect())
            .collect()
    }

    /// Values of one criterion column.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.matrix.column(j).iter().copied().collect()
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Objectives as integer codes (-1 for MIN, 1 for MAX).
    pub fn objective_codes(&self) -> Vec<i8> {
        self.objectives.iter().map(Objective::code).collect()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Per-column value kind.
    pub fn dtypes(&self) -> &[ValueKind] {
        &self.dtypes
    }

    /// Returns (alternatives, criteria).
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.shape()
    }

    pub fn alternative_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn criteria_count(&self) -> usize {
        self.matrix.ncols()
    }

    /// Returns true if any criterion has the given objective.
    pub fn has_objective(&self, objective: Objective) -> bool {
        self.objectives.contains(&objective)
    }

    /// Criterion headers with objective glyph and weight, e.g. `x1[▼ 1]`.
    pub fn cow_headers(&self) -> Vec<String> {
        self.criteria
            .iter()
            .zip(&self.objectives)
            .zip(&self.weights)
            .map(|((c, o), w)| format!("{}[{} {}]", c, o, w))
            .collect()
    }

    /// Summary table: objectives and weights stacked above the data.
    pub fn to_table(&self) -> DecisionTable {
        DecisionTable {
            criteria: self.criteria.clone(),
            objectives: self.objectives.clone(),
            weights: self.weights.clone(),
            alternatives: self.alternatives.clone(),
            rows: self.rows(),
        }
    }
}

impl PartialEq for DecisionMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives
            && self.criteria == other.criteria
            && self.matrix == other.matrix
            && self.objectives == other.objectives
            && self.weights == other.weights
    }
}

impl fmt::Display for DecisionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a_number, c_number) = self.shape();
        writeln!(f, "{}", self.cow_headers().join(" "))?;
        write!(f, "[{} Alternatives x {} Criteria]", a_number, c_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_matrix::mkdm;

    fn sample() -> DecisionMatrix {
        mkdm(
            vec![vec![1, 2, 3], vec![4, 5, 6]],
            vec!["min", "max", "max"],
            None,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn views_expose_values_and_metadata() {
        let dm = sample();
        assert_eq!(dm.shape(), (2, 3));
        assert_eq!(dm.rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(dm.column(1), vec![2.0, 5.0]);
        assert_eq!(dm.objective_codes(), vec![-1, 1, 1]);
        assert_eq!(dm.weights(), &[1.0, 1.0, 1.0]);
        assert_eq!(dm.alternatives(), &["A0", "A1"]);
        assert_eq!(dm.criteria(), &["C0", "C1", "C2"]);
    }

    #[test]
    fn dtypes_are_inferred_per_column() {
        let dm = mkdm(
            vec![vec![1.0, 2.5], vec![3.0, 4.0]],
            vec!["max", "max"],
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(dm.dtypes(), &[ValueKind::Integer, ValueKind::Float]);
    }

    #[test]
    fn replace_matrix_marks_columns_float() {
        let dm = sample();
        let values = dm.matrix().map(|v| v * 2.0);
        let doubled = dm.clone().replace_matrix(values);
        assert_eq!(doubled.dtypes(), &[ValueKind::Float; 3]);
        assert_eq!(doubled.column(0), vec![2.0, 8.0]);
        assert_eq!(dm.column(0), vec![1.0, 4.0]);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(sample(), sample());
        let reweighted = sample().replace_weights(vec![1.0, 2.0, 1.0]);
        assert_ne!(sample(), reweighted);
        let flipped = sample().replace_objectives(vec![Objective::Max; 3]);
        assert_ne!(sample(), flipped);
    }

    #[test]
    fn table_round_trips() {
        let dm = sample();
        let table = dm.to_table();
        assert_eq!(table.index()[..2], ["objectives".to_string(), "weights".to_string()]);
        assert_eq!(DecisionMatrix::from_table(&table).unwrap(), dm);
    }

    #[test]
    fn display_reports_dimensions() {
        let text = format!("{}", sample());
        assert!(text.starts_with("C0[▼ 1] C1[▲ 1] C2[▲ 1]"));
        assert!(text.ends_with("[2 Alternatives x 3 Criteria]"));
    }
}
