//! Scalers - bring every criterion to a comparable unit.
//!
//! Each scaler works column by column on the matrix, and on the weight
//! vector as a whole, depending on its [`Target`].

use tracing::debug;

use super::stats::{self, ColumnNames};
use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult, Target};

/// The scaling formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scaling {
    Max,
    MinMax,
    Sum,
    StdScore,
    Vector,
}

impl Scaling {
    fn name(&self) -> &'static str {
        match self {
            Scaling::Max => "MaxScaler",
            Scaling::MinMax => "MinMaxScaler",
            Scaling::Sum => "SumScaler",
            Scaling::StdScore => "StandardScaler",
            Scaling::Vector => "VectorScaler",
        }
    }

    /// Scales one vector. `location` names it in the error.
    fn apply(&self, values: &[f64], location: &str) -> McdaResult<Vec<f64>> {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        let zero = || McdaError::division_by_zero(self.name(), location);

        match self {
            Scaling::Max => {
                let max = stats::max(values);
                if max == 0.0 {
                    return Err(zero());
                }
                Ok(values.iter().map(|v| v / max).collect())
            }
            Scaling::MinMax => {
                let min = stats::min(values);
                let range = stats::max(values) - min;
                if range == 0.0 {
                    return Err(zero());
                }
                Ok(values.iter().map(|v| (v - min) / range).collect())
            }
            Scaling::Sum => {
                let total = stats::sum(values);
                if total == 0.0 {
                    return Err(zero());
                }
                Ok(values.iter().map(|v| v / total).collect())
            }
            Scaling::StdScore => {
                let mean = stats::mean(values);
                let std = stats::std(values, 1);
                if std == 0.0 || std.is_nan() {
                    return Err(zero());
                }
                Ok(values.iter().map(|v| (v - mean) / std).collect())
            }
            Scaling::Vector => {
                let norm = stats::norm(values);
                if norm == 0.0 {
                    return Err(zero());
                }
                Ok(values.iter().map(|v| v / norm).collect())
            }
        }
    }

    fn apply_to_matrix(&self, dm: &DecisionMatrix) -> McdaResult<nalgebra::DMatrix<f64>> {
        let names = ColumnNames(Some(dm.criteria()));
        let columns = (0..dm.criteria_count())
            .map(|j| self.apply(&dm.column(j), &names.describe(j)))
            .collect::<McdaResult<Vec<_>>>()?;
        Ok(stats::from_columns(dm.alternative_count(), &columns))
    }

    fn transform(&self, target: Target, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let (a_number, c_number) = dm.shape();
        debug!(
            transformer = self.name(),
            %target,
            alternatives = a_number,
            criteria = c_number,
            "scaling decision matrix"
        );

        let mut scaled = dm.clone();
        if target.includes_matrix() {
            scaled = scaled.replace_matrix(self.apply_to_matrix(dm)?);
        }
        if target.includes_weights() {
            scaled = scaled.replace_weights(self.apply(dm.weights(), "weights")?);
        }
        Ok(scaled)
    }
}

/// Divides each value by the maximum of its vector.
pub fn scale_by_max(values: &[f64]) -> McdaResult<Vec<f64>> {
    Scaling::Max.apply(values, "values")
}

/// `(x - min) / (max - min)`.
pub fn scale_by_minmax(values: &[f64]) -> McdaResult<Vec<f64>> {
    Scaling::MinMax.apply(values, "values")
}

/// Divides each value by the sum of its vector.
pub fn scale_by_sum(values: &[f64]) -> McdaResult<Vec<f64>> {
    Scaling::Sum.apply(values, "values")
}

/// `(x - mean) / std`, with the sample standard deviation.
pub fn scale_by_stdscore(values: &[f64]) -> McdaResult<Vec<f64>> {
    Scaling::StdScore.apply(values, "values")
}

/// Divides each value by the Euclidean norm of its vector.
pub fn scale_by_vector(values: &[f64]) -> McdaResult<Vec<f64>> {
    Scaling::Vector.apply(values, "values")
}

macro_rules! scaler {
    ($(#[$doc:meta])* $name:ident, $scaling:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name {
            pub target: Target,
        }

        impl $name {
            pub fn new(target: Target) -> Self {
                Self { target }
            }
        }

        impl Transformer for $name {
            fn name(&self) -> &'static str {
                $scaling.name()
            }

            fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
                $scaling.transform(self.target, dm)
            }
        }
    };
}

scaler!(
    /// Scales each criterion by its maximum, so the best MAX value becomes 1.
    MaxScaler,
    Scaling::Max
);
scaler!(
    /// Scales each criterion into `[0, 1]` by its range.
    MinMaxScaler,
    Scaling::MinMax
);
scaler!(
    /// Scales each criterion so it sums to 1.
    SumScaler,
    Scaling::Sum
);
scaler!(
    /// Standardizes each criterion to zero mean and unit sample deviation.
    StandardScaler,
    Scaling::StdScore
);
scaler!(
    /// Scales each criterion to unit Euclidean norm.
    VectorScaler,
    Scaling::Vector
);
