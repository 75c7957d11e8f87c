use serde::{Deserialize, Serialize};

use crate::id::CriterionId;
use crate::weights::Weight;

/// Conventional upper bound for a raw criterion score
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

/// One `(criterion, weight, score)` tuple handed to the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub criterion_id: CriterionId,
    pub weight: Weight,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    /// `None` when the grader has not entered a score yet
    #[serde(default)]
    pub score: Option<f64>,
}

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

impl ScoreEntry {
    pub fn new(criterion_id: CriterionId, weight: Weight, score: Option<f64>) -> Self {
        Self {
            criterion_id,
            weight,
            max_score: DEFAULT_MAX_SCORE,
            score,
        }
    }

    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = max_score;
        self
    }

    /// Score as a percentage of `max_score`, or `None` if it is unusable
    pub(crate) fn percent_score(&self) -> Option<f64> {
        let score = self.score?;
        if !score.is_finite() || !self.max_score.is_finite() || self.max_score <= 0.0 {
            return None;
        }
        if !(0.0..=self.max_score).contains(&score) {
            return None;
        }
        Some(score * DEFAULT_MAX_SCORE / self.max_score)
    }

    /// Weight used in the sum; negative or non-finite weights contribute 0
    pub(crate) fn effective_weight(&self) -> f64 {
        let percent = self.weight.percent();
        if percent.is_finite() && percent > 0.0 {
            percent
        } else {
            0.0
        }
    }
}
