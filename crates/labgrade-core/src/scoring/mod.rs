//! Rubric-weighted score aggregation
//!
//! A total is `round_half_up(Σ score_i * weight_i / 100)` where each score is
//! first expressed as a percentage of its criterion's maximum and each
//! weight is a percentage. Weights are never normalized: a rubric whose
//! weights do not sum to 100 produces a skewed total in lenient mode and is
//! rejected in strict mode.

mod entry;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GradeError, Result};
use crate::id::CriterionId;
use crate::weights::{within_tolerance, FULL_WEIGHT};

pub use entry::{ScoreEntry, DEFAULT_MAX_SCORE};

/// Default slack, in percentage points, for strict weight-sum checks
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1.0;

/// Percentage points covered by one star
const POINTS_PER_STAR: u32 = 20;

/// Maximum number of stars
pub const MAX_STARS: u8 = 5;

/// How out-of-range input is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Missing or out-of-range scores count as 0 and are reported back
    #[default]
    Lenient,
    /// Any invalid score or weight is an error
    Strict,
}

impl FromStr for ScoringMode {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(ScoringMode::Lenient),
            "strict" => Ok(ScoringMode::Strict),
            other => Err(GradeError::invalid_value("scoring mode", other)),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Lenient => write!(f, "lenient"),
            ScoringMode::Strict => write!(f, "strict"),
        }
    }
}

/// Output of one aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// Weighted total, rounded half-up to a whole percentage
    pub total: u32,
    /// One star per 20 points, capped at five
    pub star_rating: u8,
    /// Criteria whose score was replaced by 0 (lenient mode only)
    pub substituted: Vec<CriterionId>,
}

/// Round to the nearest integer, halves going up
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Stars lit for a total: `floor(total / 20)` clamped to `0..=5`
pub fn star_rating(total: u32) -> u8 {
    (total / POINTS_PER_STAR).min(MAX_STARS as u32) as u8
}

/// Aggregate per-criterion scores into a weighted total.
///
/// `tolerance` is the accepted distance, in percentage points, between the
/// weight sum and 100; only strict mode consults it.
pub fn compute_total(
    entries: &[ScoreEntry],
    mode: ScoringMode,
    tolerance: f64,
) -> Result<AggregateResult> {
    if entries.is_empty() {
        return Err(GradeError::EmptyCriteria);
    }

    if mode == ScoringMode::Strict {
        check_weights(entries, tolerance)?;
    }

    let mut weighted_sum = 0.0;
    let mut substituted = Vec::new();

    for entry in entries {
        let score = match entry.percent_score() {
            Some(score) => score,
            None if mode == ScoringMode::Strict => {
                return Err(GradeError::InvalidScore {
                    criterion: entry.criterion_id.to_string(),
                    score: entry.score,
                    max_score: entry.max_score,
                });
            }
            None => {
                warn!(
                    criterion = %entry.criterion_id,
                    score = ?entry.score,
                    "score substituted with 0"
                );
                substituted.push(entry.criterion_id.clone());
                0.0
            }
        };

        weighted_sum += score * entry.effective_weight();
    }

    let total = round_half_up(weighted_sum / FULL_WEIGHT).max(0.0) as u32;

    debug!(
        criteria = entries.len(),
        total,
        substituted = substituted.len(),
        %mode,
        "aggregate"
    );

    Ok(AggregateResult {
        total,
        star_rating: star_rating(total),
        substituted,
    })
}

fn check_weights(entries: &[ScoreEntry], tolerance: f64) -> Result<()> {
    let mut sum = 0.0;
    for entry in entries {
        sum += entry.weight.check(entry.criterion_id.as_str())?.percent();
    }
    if within_tolerance(sum, tolerance) {
        Ok(())
    } else {
        Err(GradeError::InvalidWeight {
            reason: format!(
                "weights sum to {} (expected {} ± {})",
                sum, FULL_WEIGHT, tolerance
            ),
        })
    }
}
