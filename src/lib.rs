//! MCDA Engine - Multi-Criteria Decision Analysis
//!
//! Ranks alternatives scored against weighted criteria, each to be
//! minimized or maximized.
//!
//! Data flows in one direction:
//!
//! 1. Build an immutable [`DecisionMatrix`] with [`mkdm`] or the builder.
//! 2. Apply zero or more [`Transformer`]s (scalers, weighters, inverters),
//!    each returning a new matrix.
//! 3. Rank with a [`RankingMethod`], producing a [`RankResult`].
//!
//! ```
//! use mcda_engine::{mkdm, RankingMethod, Transformer};
//! use mcda_engine::domain::preprocessing::VectorScaler;
//! use mcda_engine::domain::ranking::RatioMOORA;
//!
//! let dm = mkdm(
//!     vec![vec![250.0, 16.0], vec![200.0, 16.0], vec![300.0, 32.0]],
//!     vec!["min", "max"],
//!     None,
//!     None,
//!     None,
//! )
//! .unwrap();
//! let scaled = VectorScaler::default().transform(&dm).unwrap();
//! let result = RatioMOORA.rank(&scaled).unwrap();
//! assert_eq!(result.ranks().len(), 3);
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;

pub use domain::decision_matrix::{mkdm, DecisionMatrix};
pub use domain::foundation::{McdaError, McdaResult, Objective, Target};
pub use domain::preprocessing::{Pipeline, Transformer};
pub use domain::ranking::{Method, RankResult, RankingMethod};
