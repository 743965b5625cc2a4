//! Decision Matrix module - the immutable input of every analysis.
//!
//! # Components
//!
//! - `DecisionMatrix` - values, objectives, weights and labels
//! - `DecisionMatrixBuilder` / `mkdm` - validated construction
//! - `DecisionTable` - summary form (objectives and weights above the data)

mod builder;
mod matrix;
mod table;

pub use builder::{mkdm, DecisionMatrixBuilder};
pub use matrix::{DecisionMatrix, ValueKind};
pub use table::DecisionTable;
