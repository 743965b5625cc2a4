//! Decision Table - flat summary of a decision matrix for display and exchange.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Objective;

/// Objectives and weights stacked above the alternative rows.
///
/// Consumed read-only by presentation code; converts back with
/// [`DecisionMatrix::from_table`](super::DecisionMatrix::from_table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    pub criteria: Vec<String>,
    pub objectives: Vec<Objective>,
    pub weights: Vec<f64>,
    pub alternatives: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl DecisionTable {
    /// Row index: `objectives`, `weights`, then every alternative.
    pub fn index(&self) -> Vec<String> {
        ["objectives".to_string(), "weights".to_string()]
            .into_iter()
            .chain(self.alternatives.iter().cloned())
            .collect()
    }
}
