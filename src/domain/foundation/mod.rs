//! Foundation module - Shared domain primitives.
//!
//! Contains the objective value object, the transformation target and the
//! error types that form the vocabulary of the engine.

mod errors;
mod objective;
mod target;

pub use errors::{Axis, ErrorCode, McdaError, McdaResult};
pub use objective::{Aggregate, Objective, ObjectiveAlias};
pub use target::Target;
