//! Builder and factory for DecisionMatrix instances.

use nalgebra::DMatrix;
use std::collections::HashSet;

use super::DecisionMatrix;
use crate::domain::foundation::{Axis, McdaError, McdaResult, Objective, ObjectiveAlias};

/// Raw matrix input as received from the caller.
#[derive(Debug, Clone)]
enum RawMatrix {
    Rows(Vec<Vec<f64>>),
    Dense(DMatrix<f64>),
}

/// Builder for constructing DecisionMatrix instances.
///
/// Shape, labels, weights and objectives are validated only in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct DecisionMatrixBuilder {
    matrix: Option<RawMatrix>,
    objectives: Vec<ObjectiveAlias>,
    weights: Option<Vec<f64>>,
    alternatives: Option<Vec<String>>,
    criteria: Option<Vec<String>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values, one inner sequence per alternative.
    pub fn matrix<R, T>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.matrix = Some(RawMatrix::Rows(rows));
        self
    }

    /// Sets the values from an existing dense matrix.
    pub fn dense(mut self, matrix: DMatrix<f64>) -> Self {
        self.matrix = Some(RawMatrix::Dense(matrix));
        self
    }

    /// Sets the objective aliases, one per criterion.
    pub fn objectives<O: Into<ObjectiveAlias>>(mut self, aliases: impl IntoIterator<Item = O>) -> Self {
        self.objectives = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weights. Defaults to all ones.
    pub fn weights<T: Into<f64>>(mut self, weights: impl IntoIterator<Item = T>) -> Self {
        self.weights = Some(weights.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the alternative labels. Defaults to `A0..A{n-1}`.
    pub fn alternatives<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.alternatives = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the criteria labels. Defaults to `C0..C{n-1}`.
    pub fn criteria<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.criteria = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Validates the inputs and builds the decision matrix.
    ///
    /// # Errors
    ///
    /// - `InvalidShape` if the matrix is not 2-D or rectangular, or if a
    ///   label, weight or objective count disagrees with the matrix shape.
    /// - `DuplicateLabel` if a label repeats.
    /// - `InvalidObjective` if an alias cannot be resolved.
    pub fn build(self) -> McdaResult<DecisionMatrix> {
        let matrix = match self.matrix {
            None => return Err(McdaError::invalid_shape("'matrix' must have 2 dimensions, found 0 instead")),
            Some(RawMatrix::Dense(matrix)) => matrix,
            Some(RawMatrix::Rows(rows)) => dense_from_rows(rows)?,
        };
        let (a_number, c_number) = matrix.shape();

        let alternatives = labels_or_default(self.alternatives, "A", a_number, Axis::Alternatives)?;
        let criteria = labels_or_default(self.criteria, "C", c_number, Axis::Criteria)?;

        let weights = self.weights.unwrap_or_else(|| vec![1.0; c_number]);

        let objectives = self
            .objectives
            .into_iter()
            .map(Objective::from_alias)
            .collect::<McdaResult<Vec<_>>>()?;

        if objectives.len() != c_number || weights.len() != c_number {
            return Err(McdaError::invalid_shape(format!(
                "'objectives' and 'weights' must have the same number of columns in 'matrix' {}. \
                 Found {{objectives: {}, weights: {}}}",
                c_number,
                objectives.len(),
                weights.len()
            )));
        }

        Ok(DecisionMatrix::from_parts(
            matrix,
            objectives,
            weights,
            alternatives,
            criteria,
        ))
    }
}

fn dense_from_rows(rows: Vec<Vec<f64>>) -> McdaResult<DMatrix<f64>> {
    let a_number = rows.len();
    if a_number == 0 {
        return Err(McdaError::invalid_shape(
            "'matrix' must have 2 dimensions, found 1 instead",
        ));
    }
    let c_number = rows[0].len();
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != c_number) {
        return Err(McdaError::invalid_shape(format!(
            "'matrix' rows must have the same length: row 0 has {} values, row {} has {}",
            c_number,
            idx,
            row.len()
        )));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(DMatrix::from_row_slice(a_number, c_number, &flat))
}

fn labels_or_default(
    labels: Option<Vec<String>>,
    prefix: &str,
    expected: usize,
    axis: Axis,
) -> McdaResult<Vec<String>> {
    let labels = labels.unwrap_or_else(|| (0..expected).map(|idx| format!("{}{}", prefix, idx)).collect());

    if labels.len() != expected {
        return Err(McdaError::invalid_shape(format!(
            "'{}' must have {} elements, found {}",
            axis,
            expected,
            labels.len()
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = labels.iter().find(|l| !seen.insert(l.as_str())) {
        return Err(McdaError::duplicate_label(axis, dup.clone()));
    }

    Ok(labels)
}

/// Factory mirroring the builder: infers the shape, defaults labels and
/// weights, and resolves objective aliases.
pub fn mkdm<R, T, O>(
    matrix: impl IntoIterator<Item = R>,
    objectives: impl IntoIterator<Item = O>,
    weights: Option<Vec<f64>>,
    alternatives: Option<Vec<String>>,
    criteria: Option<Vec<String>>,
) -> McdaResult<DecisionMatrix>
where
    R: IntoIterator<Item = T>,
    T: Into<f64>,
    O: Into<ObjectiveAlias>,
{
    let mut builder = DecisionMatrixBuilder::new().matrix(matrix).objectives(objectives);
    if let Some(weights) = weights {
        builder = builder.weights(weights);
    }
    if let Some(alternatives) = alternatives {
        builder = builder.alternatives(alternatives);
    }
    if let Some(criteria) = criteria {
        builder = builder.criteria(criteria);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Aggregate, ErrorCode};

    #[test]
    fn build_defaults_labels_and_weights() {
        let dm = DecisionMatrix::builder()
            .matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .objectives(vec!["max", "min"])
            .build()
            .unwrap();

        assert_eq!(dm.alternatives(), &["A0", "A1", "A2"]);
        assert_eq!(dm.criteria(), &["C0", "C1"]);
        assert_eq!(dm.weights(), &[1.0, 1.0]);
        assert_eq!(dm.objectives(), &[Objective::Max, Objective::Min]);
    }

    #[test]
    fn build_accepts_mixed_alias_kinds() {
        let dm = DecisionMatrix::builder()
            .matrix(vec![vec![1.0, 2.0, 3.0]])
            .objectives(vec![
                ObjectiveAlias::from(Aggregate::Max),
                ObjectiveAlias::from("<"),
                ObjectiveAlias::from(-1),
            ])
            .build()
            .unwrap();
        assert_eq!(dm.objectives(), &[Objective::Max, Objective::Min, Objective::Min]);
    }

    #[test]
    fn build_uses_supplied_labels() {
        let dm = DecisionMatrix::builder()
            .matrix(vec![vec![1.0], vec![2.0]])
            .objectives(vec!["max"])
            .weights(vec![0.5])
            .alternatives(vec!["x", "y"])
            .criteria(vec!["cost"])
            .build()
            .unwrap();
        assert_eq!(dm.alternatives(), &["x", "y"]);
        assert_eq!(dm.criteria(), &["cost"]);
        assert_eq!(dm.weights(), &[0.5]);
    }

    #[test]
    fn build_from_dense_matrix() {
        let dm = DecisionMatrix::builder()
            .dense(DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]))
            .objectives(vec!["max", "max"])
            .build()
            .unwrap();
        assert_eq!(dm.rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn build_rejects_missing_matrix() {
        let err = DecisionMatrix::builder().build().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidShape);
    }

    #[test]
    fn build_rejects_one_dimensional_input() {
        let err = mkdm(Vec::<Vec<f64>>::new(), Vec::<&str>::new(), None, None, None).unwrap_err();
        assert_eq!(
            err,
            McdaError::invalid_shape("'matrix' must have 2 dimensions, found 1 instead")
        );
    }

    #[test]
    fn build_rejects_ragged_rows() {
        let err = mkdm(vec![vec![1.0, 2.0], vec![3.0]], vec!["max", "max"], None, None, None)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidShape);
        assert!(err.to_string().contains("row 1 has 1"));
    }

    #[test]
    fn build_rejects_objective_count_mismatch() {
        let err = mkdm(vec![vec![1.0, 2.0]], vec!["max"], None, None, None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidShape);
        assert!(err.to_string().contains("objectives: 1"));
    }

    #[test]
    fn build_rejects_weight_count_mismatch() {
        let err = mkdm(
            vec![vec![1.0, 2.0]],
            vec!["max", "max"],
            Some(vec![1.0, 2.0, 3.0]),
            None,
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("weights: 3"));
    }

    #[test]
    fn build_rejects_label_count_mismatch() {
        let err = mkdm(
            vec![vec![1.0, 2.0]],
            vec!["max", "max"],
            None,
            Some(vec!["a".into(), "b".into()]),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            McdaError::invalid_shape("'alternatives' must have 1 elements, found 2")
        );

        let err = mkdm(
            vec![vec![1.0, 2.0]],
            vec!["max", "max"],
            None,
            None,
            Some(vec!["c".into()]),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidShape);
    }

    #[test]
    fn build_rejects_duplicate_labels() {
        let err = mkdm(
            vec![vec![1.0], vec![2.0]],
            vec!["max"],
            None,
            Some(vec!["a".into(), "a".into()]),
            None,
        )
        .unwrap_err();
        assert_eq!(err, McdaError::duplicate_label(Axis::Alternatives, "a"));
    }

    #[test]
    fn build_rejects_invalid_objective() {
        let err = mkdm(vec![vec![1.0, 2.0]], vec!["max", "sideways"], None, None, None)
            .unwrap_err();
        assert_eq!(err, McdaError::invalid_objective("sideways"));
    }
}
