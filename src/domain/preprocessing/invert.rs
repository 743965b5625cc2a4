//! MinimizeToMaximize - turn every MIN criterion into a MAX one.

use nalgebra::DMatrix;
use tracing::debug;

use super::stats::{self, ColumnNames};
use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Objective};

/// Replaces each value `x` of every MIN column with `1 / x`.
pub fn invert(matrix: &DMatrix<f64>, objectives: &[Objective]) -> McdaResult<DMatrix<f64>> {
    invert_named(matrix, objectives, ColumnNames::unlabeled())
}

fn invert_named(
    matrix: &DMatrix<f64>,
    objectives: &[Objective],
    names: ColumnNames<'_>,
) -> McdaResult<DMatrix<f64>> {
    stats::ensure_len("objectives", objectives.len(), matrix.ncols())?;
    let mut inverted = matrix.clone();
    for (j, objective) in objectives.iter().enumerate() {
        if objective.is_max() {
            continue;
        }
        let mut column = inverted.column_mut(j);
        if column.iter().any(|v| *v == 0.0) {
            return Err(McdaError::division_by_zero("MinimizeToMaximize", names.describe(j)));
        }
        column.iter_mut().for_each(|v| *v = 1.0 / *v);
    }
    Ok(inverted)
}

/// Inverts MIN criteria so that every objective is MAX.
///
/// Applying it twice is not the identity: the second pass sees only MAX
/// criteria and leaves the already inverted values alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimizeToMaximize;

impl Transformer for MinimizeToMaximize {
    fn name(&self) -> &'static str {
        "MinimizeToMaximize"
    }

    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        debug!(
            transformer = self.name(),
            inverted = dm.objectives().iter().filter(|o| o.is_min()).count(),
            "inverting minimize criteria"
        );
        let inverted = invert_named(dm.matrix(), dm.objectives(), ColumnNames(Some(dm.criteria())))?;
        Ok(dm
            .clone()
            .replace_matrix(inverted)
            .replace_objectives(vec![Objective::Max; dm.criteria_count()]))
    }
}
