//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::grade::{GradeThreshold, LetterGrade};
use crate::scoring::{ScoringMode, DEFAULT_WEIGHT_TOLERANCE};

/// Grading configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// How invalid or missing scores are treated
    #[serde(default)]
    pub mode: ScoringMode,

    /// Accepted distance of a weight sum from 100, in percentage points
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,

    /// Name recorded as the grader on grade records
    #[serde(default = "default_grader")]
    pub grader: String,

    /// Custom grade scale (optional; the built-in table otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_scale: Option<GradeScaleConfig>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        GradingConfig {
            mode: ScoringMode::default(),
            weight_tolerance: default_weight_tolerance(),
            grader: default_grader(),
            grade_scale: None,
        }
    }
}

/// Threshold rows of a configured grade scale, best grade first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeScaleConfig {
    pub thresholds: Vec<GradeThreshold>,

    /// Grade for totals below every threshold
    #[serde(default = "default_fallback")]
    pub fallback: LetterGrade,
}

fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}

fn default_grader() -> String {
    "faculty".to_string()
}

fn default_fallback() -> LetterGrade {
    LetterGrade::F
}
