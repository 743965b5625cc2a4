//! Domain layer containing the decision analysis engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (objectives, targets, errors)
//! - `decision_matrix` - The immutable alternatives x criteria input
//! - `preprocessing` - Scalers, weighters and other matrix transformations
//! - `ranking` - Ranking methods and their results
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state.

pub mod decision_matrix;
pub mod foundation;
pub mod preprocessing;
pub mod ranking;
