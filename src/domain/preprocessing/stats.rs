//! Column statistics shared by scalers, weighters and ranking methods.

use nalgebra::DMatrix;
use std::cmp::Ordering;

use crate::domain::foundation::{McdaError, McdaResult};

/// Describes a column in error messages, by label when labels are known.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnNames<'a>(pub(crate) Option<&'a [String]>);

impl ColumnNames<'_> {
    pub(crate) fn unlabeled() -> Self {
        ColumnNames(None)
    }

    pub(crate) fn describe(&self, j: usize) -> String {
        match self.0.and_then(|labels| labels.get(j)) {
            Some(label) => format!("column '{}'", label),
            None => format!("column {}", j),
        }
    }
}

/// Checks that a per-criterion argument has one entry per matrix column.
pub(crate) fn ensure_len(argument: &str, found: usize, expected: usize) -> McdaResult<()> {
    if found != expected {
        return Err(McdaError::invalid_shape(format!(
            "'{}' must have {} elements, found {}",
            argument, expected, found
        )));
    }
    Ok(())
}

pub(crate) fn column(matrix: &DMatrix<f64>, j: usize) -> Vec<f64> {
    matrix.column(j).iter().copied().collect()
}

/// Builds a matrix column by column.
pub(crate) fn from_columns(nrows: usize, columns: &[Vec<f64>]) -> DMatrix<f64> {
    DMatrix::from_fn(nrows, columns.len(), |i, j| columns[j][i])
}

pub(crate) fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Standard deviation with `ddof` delta degrees of freedom.
/// Returns NaN when there are not more values than `ddof`.
pub(crate) fn std(values: &[f64], ddof: usize) -> f64 {
    let n = values.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - ddof) as f64).sqrt()
}

pub(crate) fn norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Ranks values ascending, assigning tied values the average of their ranks.
pub(crate) fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }
    ranks
}

/// Pearson correlation between two equally long samples.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y) {
        cov += (a - mx) * (b - my);
        vx += (a - mx).powi(2);
        vy += (b - my).powi(2);
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some(cov / (vx.sqrt() * vy.sqrt()))
}

/// Pairwise Pearson correlation between the columns (criteria) of a matrix.
///
/// # Errors
///
/// `DivisionByZero` if a column is constant.
pub fn pearson_correlation(matrix: &DMatrix<f64>) -> McdaResult<DMatrix<f64>> {
    correlation_matrix(matrix, ColumnNames::unlabeled(), "pearson_correlation")
}

/// Pairwise Spearman rank correlation between the columns of a matrix.
///
/// Ties receive average ranks before the Pearson correlation is taken.
pub fn spearman_correlation(matrix: &DMatrix<f64>) -> McdaResult<DMatrix<f64>> {
    let columns: Vec<Vec<f64>> = (0..matrix.ncols())
        .map(|j| average_ranks(&column(matrix, j)))
        .collect();
    let ranked = from_columns(matrix.nrows(), &columns);
    correlation_matrix(&ranked, ColumnNames::unlabeled(), "spearman_correlation")
}

pub(crate) fn correlation_matrix(
    matrix: &DMatrix<f64>,
    names: ColumnNames<'_>,
    operation: &str,
) -> McdaResult<DMatrix<f64>> {
    let c_number = matrix.ncols();
    let columns: Vec<Vec<f64>> = (0..c_number).map(|j| column(matrix, j)).collect();

    let mut corr = DMatrix::from_element(c_number, c_number, 1.0);
    for j in 0..c_number {
        for k in (j + 1)..c_number {
            let r = pearson(&columns[j], &columns[k]).ok_or_else(|| {
                let constant = if std(&columns[j], 0) == 0.0 { j } else { k };
                McdaError::division_by_zero(operation, format!("constant {}", names.describe(constant)))
            })?;
            corr[(j, k)] = r;
            corr[(k, j)] = r;
        }
    }
    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ensure_len_reports_both_counts() {
        assert!(ensure_len("weights", 2, 2).is_ok());
        assert_eq!(
            ensure_len("weights", 1, 2).unwrap_err(),
            McdaError::invalid_shape("'weights' must have 2 elements, found 1")
        );
    }

    #[test]
    fn std_uses_delta_degrees_of_freedom() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(std(&values, 0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(std(&values, 1), 2.138089935299395, epsilon = 1e-12);
        assert!(std(&[1.0], 1).is_nan());
    }

    #[test]
    fn average_ranks_split_ties() {
        assert_eq!(average_ranks(&[10.0, 20.0, 10.0, 30.0]), vec![1.5, 3.0, 1.5, 4.0]);
    }

    #[test]
    fn pearson_of_linear_columns_is_one() {
        let m = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let corr = pearson_correlation(&m).unwrap();
        assert_abs_diff_eq!(corr[(0, 1)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corr[(1, 0)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corr[(0, 0)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn spearman_sees_monotonic_relation() {
        let m = DMatrix::from_row_slice(4, 2, &[1.0, 1.0, 2.0, 8.0, 3.0, 27.0, 4.0, 64.0]);
        let corr = spearman_correlation(&m).unwrap();
        assert_abs_diff_eq!(corr[(0, 1)], 1.0, epsilon = 1e-12);
        let pearson = pearson_correlation(&m).unwrap();
        assert!(pearson[(0, 1)] < 1.0);
    }

    #[test]
    fn correlation_rejects_constant_column() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 5.0, 2.0, 5.0]);
        let err = pearson_correlation(&m).unwrap_err();
        assert_eq!(
            err,
            McdaError::division_by_zero("pearson_correlation", "constant column 1")
        );
    }
}
