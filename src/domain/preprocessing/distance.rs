//! Cenit distance - distance of each value to its criterion's ideal.

use nalgebra::DMatrix;
use tracing::debug;

use super::stats::{self, ColumnNames};
use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};

/// Maps every column into `[0, 1]`, where 1 is the column's best value
/// (cenit) and 0 its worst (nadir), oriented by the objective.
pub fn cenit_distance(matrix: &DMatrix<f64>, objectives: &[Objective]) -> McdaResult<DMatrix<f64>> {
    cenit_distance_named(matrix, objectives, ColumnNames::unlabeled())
}

pub(crate) fn cenit_distance_named(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    names: ColumnNames<'_>,
) -> McdaResult<DMatrix<f64>> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    let mut cenit = Vec::with_capacity(matrix.ncols());
    let mut nadir = Vec::with_capacity(matrix.ncols());
    for (j, objective) in objectives.iter().enumerate() {
        let column = stats::column(matrix, j);
        let (max, min) = (stats::max(&column), stats::min(&column));
        if max == min {
            return Err(McdaError::division_by_zero("CenitDistance", names.describe(j)));
        }
        match objective {
            Objective::Max => {
                cenit.push(max);
                nadir.push(min);
            }
            Objective::Min => {
                cenit.push(min);
                nadir.push(max);
            }
        }
    }
    Ok(DMatrix::from_fn(matrix.nrows(), cenit.len(), |i, j| {
        (matrix[(i, j)] - nadir[j]) / (cenit[j] - nadir[j])
    }))
}

/// Replaces every value by its cenit distance; all objectives become MAX.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenitDistance;

impl Transformer for CenitDistance {
    fn name(&self) -> &'static str {
        "CenitDistance"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        debug!(
            transformer = self.name(),
            alternatives = dm.alternative_count(),
            criteria = dm.criteria_count(),
            "computing cenit distance"
        );
        let distance = cenit_distance_named(dm.matrix(), dm.objectives(), ColumnNames(Some(dm.criteria())))?;
        Ok(dm
            .clone()
            .replace_matrix(distance)
            .replace_objectives(vec![Objective::Max; dm.criteria_count()]))
    }
}
