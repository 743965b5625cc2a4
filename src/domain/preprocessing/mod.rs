//! Preprocessing module - transformations from one decision matrix to another.
//!
//! # Components
//!
//! - Scalers - `MaxScaler`, `MinMaxScaler`, `SumScaler`, `StandardScaler`, `VectorScaler`
//! - Weighters - `EqualWeighter`, `StdWeighter`, `EntropyWeighter`, `Critic`
//! - `MinimizeToMaximize` - turns MIN criteria into MAX ones
//! - `PushNegatives` / `AddValueToZero` - value shifters
//! - `CenitDistance` - distance to each criterion's ideal
//! - `Pipeline` - transformers applied in order, optionally ending in a ranking
//!
//! Every transformer borrows its input and returns a fresh matrix. Order of
//! composition is up to the caller.

mod distance;
mod invert;
mod pipeline;
mod scalers;
mod shift;
pub(crate) mod stats;
mod weighters;

use std::fmt;

use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::McdaResult;

pub use distance::{cenit_distance, CenitDistance};
pub use invert::{invert, MinimizeToMaximize};
pub use pipeline::Pipeline;
pub use scalers::{
    scale_by_max, scale_by_minmax, scale_by_stdscore, scale_by_sum, scale_by_vector, MaxScaler,
    MinMaxScaler, StandardScaler, SumScaler, VectorScaler,
};
pub use shift::{add_value_to_zero, push_negatives, AddValueToZero, PushNegatives};
pub use stats::{pearson_correlation, spearman_correlation};
pub use weighters::{
    critic_weights, entropy_weights, equal_weights, std_weights, Correlation, Critic,
    EntropyWeighter, EqualWeighter, StdWeighter,
};


/// A step that derives a new decision matrix from an existing one.
pub trait Transformer: fmt::Debug + Send + Sync {
    /// Name used in logs and pipeline descriptions.
    fn name(&self) -> &'static str;

    /// Produces the transformed matrix. The input is left untouched.
    fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix>;
}
