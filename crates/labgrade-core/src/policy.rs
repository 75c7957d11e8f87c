//! Scoring policy: how totals are aggregated and graded

use serde::Serialize;

use crate::error::Result;
use crate::grade::{Evaluation, GradeScale};
use crate::scoring::{compute_total, ScoreEntry, ScoringMode, DEFAULT_WEIGHT_TOLERANCE};

/// Aggregation mode, weight tolerance and grade scale, applied together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringPolicy {
    pub mode: ScoringMode,
    /// Accepted distance of the weight sum from 100, in percentage points
    pub tolerance: f64,
    pub scale: GradeScale,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            mode: ScoringMode::default(),
            tolerance: DEFAULT_WEIGHT_TOLERANCE,
            scale: GradeScale::default(),
        }
    }
}

impl ScoringPolicy {
    pub fn with_mode(mut self, mode: ScoringMode) -> Self {
        self.mode = mode;
        self
    }

    /// Aggregate `entries` and attach a letter grade
    pub fn evaluate(&self, entries: &[ScoreEntry]) -> Result<Evaluation> {
        let aggregate = compute_total(entries, self.mode, self.tolerance)?;
        Ok(self.scale.evaluate(aggregate))
    }
}
