//! Pipeline - transformers applied in order, optionally ending in a ranking.

use tracing::debug;

use super::Transformer;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult};
use crate::domain::ranking::{RankResult, RankingMethod};

/// An ordered chain of transformers with an optional final ranking method.
///
/// Steps run in insertion order; the first failing step aborts the run.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Transformer>>,
    ranker: Option<Box<dyn RankingMethod>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transformer.
    pub fn then(mut self, step: impl Transformer + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Sets the ranking method that ends the pipeline.
    pub fn rank_with(mut self, method: impl RankingMethod + 'static) -> Self {
        self.ranker = Some(Box::new(method));
        self
    }

    /// Names of the transformers followed by the ranking method, if any.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .map(|s| s.name())
            .chain(self.ranker.as_ref().map(|r| r.name()))
            .collect()
    }

    /// Runs every transformer over `dm`.
    pub fn transform(&self, dm: &DecisionMatrix) -> McdaResult<DecisionMatrix> {
        let mut current = dm.clone();
        for step in &self.steps {
            debug!(step = step.name(), "running pipeline step");
            current = step.transform(&current)?;
        }
        Ok(current)
    }

    /// Runs every transformer, then ranks the result.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if no ranking method was set, or the first error of a step.
    pub fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        let ranker = self
            .ranker
            .as_ref()
            .ok_or_else(|| McdaError::invalid_value("Pipeline", "no ranking method set"))?;
        let transformed = self.transform(dm)?;
        ranker.rank(&transformed)
    }
}
