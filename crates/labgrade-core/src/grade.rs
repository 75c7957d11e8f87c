//! Letter grades derived from a weighted total
//!
//! The default scale:
//!
//! | Grade | Minimum total |
//! |-------|---------------|
//! | A+    | 95            |
//! | A     | 90            |
//! | B+    | 85            |
//! | B     | 80            |
//! | C+    | 75            |
//! | C     | 70            |
//! | D     | 60            |
//! | F     | below 60      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};
use crate::id::CriterionId;
use crate::scoring::AggregateResult;

/// Letter grade, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl LetterGrade {
    pub const ALL: [LetterGrade; 8] = [
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::CPlus,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        LetterGrade::ALL
            .into_iter()
            .find(|g| g.as_str() == upper)
            .ok_or_else(|| GradeError::invalid_value("letter grade", s))
    }
}

/// One row of a grade scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThreshold {
    pub grade: LetterGrade,
    /// Lowest total that still earns `grade`
    pub min: u32,
}

/// Ordered threshold table; totals below every threshold get `fallback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeScale {
    thresholds: Vec<GradeThreshold>,
    fallback: LetterGrade,
}

impl Default for GradeScale {
    fn default() -> Self {
        let t = |grade, min| GradeThreshold { grade, min };
        GradeScale {
            thresholds: vec![
                t(LetterGrade::APlus, 95),
                t(LetterGrade::A, 90),
                t(LetterGrade::BPlus, 85),
                t(LetterGrade::B, 80),
                t(LetterGrade::CPlus, 75),
                t(LetterGrade::C, 70),
                t(LetterGrade::D, 60),
            ],
            fallback: LetterGrade::F,
        }
    }
}

impl GradeScale {
    /// Build a scale from configured thresholds.
    ///
    /// Thresholds must be strictly descending and list each grade once;
    /// the fallback may not appear among them.
    pub fn new(thresholds: Vec<GradeThreshold>, fallback: LetterGrade) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(GradeError::invalid_value("grade scale", "no thresholds"));
        }
        for pair in thresholds.windows(2) {
            if pair[1].min >= pair[0].min {
                return Err(GradeError::invalid_value(
                    "grade scale",
                    format!(
                        "{} ({}) must be above {} ({})",
                        pair[0].grade, pair[0].min, pair[1].grade, pair[1].min
                    ),
                ));
            }
        }
        for (i, threshold) in thresholds.iter().enumerate() {
            let repeated = thresholds[..i].iter().any(|t| t.grade == threshold.grade);
            if repeated || threshold.grade == fallback {
                return Err(GradeError::invalid_value(
                    "grade scale",
                    format!("grade {} listed more than once", threshold.grade),
                ));
            }
        }
        Ok(GradeScale {
            thresholds,
            fallback,
        })
    }

    pub fn thresholds(&self) -> &[GradeThreshold] {
        &self.thresholds
    }

    pub fn fallback(&self) -> LetterGrade {
        self.fallback
    }

    /// Letter for a total: the first threshold the total reaches
    pub fn grade_for(&self, total: u32) -> LetterGrade {
        self.thresholds
            .iter()
            .find(|t| total >= t.min)
            .map(|t| t.grade)
            .unwrap_or(self.fallback)
    }

    /// Attach a letter grade to an aggregate result
    pub fn evaluate(&self, aggregate: AggregateResult) -> Evaluation {
        Evaluation {
            grade: self.grade_for(aggregate.total),
            total: aggregate.total,
            star_rating: aggregate.star_rating,
            substituted: aggregate.substituted,
        }
    }
}

/// An aggregate total together with its letter grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub total: u32,
    pub star_rating: u8,
    pub grade: LetterGrade,
    pub substituted: Vec<CriterionId>,
}
