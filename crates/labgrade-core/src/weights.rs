//! Criterion weights and the advisory weight check
//!
//! Weights are percentages of 100 everywhere in labgrade. A fraction of 1
//! (`0.4`) only enters through [`Weight::from_fraction`]; documents always
//! carry percentages (`40`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

/// Total the weights of a well-formed rubric add up to
pub const FULL_WEIGHT: f64 = 100.0;

/// Float slack when comparing a weight total against [`FULL_WEIGHT`]
const EXACT_EPSILON: f64 = 1e-9;

/// A criterion's share of the total, as a percentage
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub fn from_percent(percent: f64) -> Self {
        Weight(percent)
    }

    /// Convert a fraction of 1 (`0.4`) into a percentage weight (`40`)
    pub fn from_fraction(fraction: f64) -> Self {
        Weight(fraction * FULL_WEIGHT)
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / FULL_WEIGHT
    }

    /// Whether this weight can be used as-is in strict scoring
    pub fn is_in_range(self) -> bool {
        self.0.is_finite() && (0.0..=FULL_WEIGHT).contains(&self.0)
    }

    /// Reject weights that are not a finite percentage in `0..=100`
    pub fn check(self, criterion: &str) -> Result<Self> {
        if self.is_in_range() {
            Ok(self)
        } else {
            Err(GradeError::InvalidWeight {
                reason: format!(
                    "criterion {} has weight {} (expected 0..=100)",
                    criterion, self.0
                ),
            })
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}%", self.0 as i64)
        } else {
            write!(f, "{:.1}%", self.0)
        }
    }
}

/// Result of summing a rubric's weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightReport {
    pub total_weight: f64,
    pub is_valid: bool,
}

impl WeightReport {
    /// Percentage points still unassigned (negative when over-allocated)
    pub fn remaining(&self) -> f64 {
        FULL_WEIGHT - self.total_weight
    }

    /// Upgrade the advisory report into a hard error
    pub fn require_valid(&self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(GradeError::InvalidWeight {
                reason: format!(
                    "weights sum to {} (expected {})",
                    self.total_weight, FULL_WEIGHT
                ),
            })
        }
    }
}

/// Sum criterion weights and flag totals other than 100.
///
/// Advisory only: callers decide whether an invalid report blocks anything.
pub fn validate_weights<I>(weights: I) -> WeightReport
where
    I: IntoIterator<Item = Weight>,
{
    let total_weight: f64 = weights.into_iter().map(Weight::percent).sum();
    WeightReport {
        total_weight,
        is_valid: (total_weight - FULL_WEIGHT).abs() <= EXACT_EPSILON,
    }
}

/// Whether `total` lies within `tolerance` percentage points of 100
pub fn within_tolerance(total: f64, tolerance: f64) -> bool {
    (total - FULL_WEIGHT).abs() <= tolerance + EXACT_EPSILON
}
