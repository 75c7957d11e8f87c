//! Rubrics: named sets of weighted criteria for one class of assessment
//!
//! Criterion order matters for display only. Every criterion and level
//! carries an explicit id assigned at creation; scores are keyed by
//! [`CriterionId`], never by the criterion's name.

mod authoring;
pub mod defaults;
mod filter;
mod lab_type;
mod scan;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document;
use crate::error::{GradeError, Result};
use crate::id::{CriterionId, LevelId, RubricId};
use crate::scoring::DEFAULT_MAX_SCORE;
use crate::weights::{validate_weights, Weight, WeightReport};

pub use authoring::{CriterionUpdate, LevelUpdate, DEFAULT_CRITERION_WEIGHT};
pub use filter::{RubricCatalog, RubricFilter};
pub use lab_type::LabType;
pub use scan::{resolve, scan_dir, RubricFile, ScanResult, SkippedFile};

/// Where a rubric comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RubricKind {
    /// Provided by the department for every lab of its type
    Default,
    /// Authored by a faculty member
    #[default]
    Custom,
}

impl fmt::Display for RubricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RubricKind::Default => write!(f, "default"),
            RubricKind::Custom => write!(f, "custom"),
        }
    }
}

/// A named point band describing what a score range looks like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub points: u32,
}

/// One scored dimension of a rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricCriterion {
    pub id: CriterionId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Percentage of the total this criterion contributes
    pub weight: Weight,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<Level>,
}

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

/// A rubric document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub id: RubricId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub lab_type: LabType,
    #[serde(default)]
    pub kind: RubricKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub criteria: Vec<RubricCriterion>,
}

impl Rubric {
    /// Create an empty custom rubric with a fresh id
    pub fn new(name: impl Into<String>, lab_type: LabType) -> Self {
        Rubric {
            id: RubricId::generate(),
            name: name.into(),
            description: String::new(),
            lab_type,
            kind: RubricKind::Custom,
            created_by: None,
            usage_count: 0,
            criteria: Vec::new(),
        }
    }

    /// Load a rubric document and check its structure
    pub fn load(path: &Path) -> Result<Self> {
        let rubric: Rubric = document::load(path)?;
        rubric
            .validate()
            .map_err(|e| GradeError::invalid_document(path, e))?;
        debug!(
            rubric = %rubric.id,
            criteria = rubric.criteria.len(),
            "load_rubric"
        );
        Ok(rubric)
    }

    /// Write the rubric, picking the format from the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        document::save(path, self)
    }

    /// Structural checks: non-empty name, unique ids, positive maxima.
    ///
    /// Weight totals are not checked here; see [`Rubric::weight_report`].
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GradeError::invalid_value("rubric name", "(empty)"));
        }

        let mut seen = HashSet::new();
        for criterion in &self.criteria {
            if !seen.insert(&criterion.id) {
                return Err(GradeError::DuplicateId {
                    context: "criterion".to_string(),
                    id: criterion.id.to_string(),
                });
            }
            if !criterion.max_score.is_finite() || criterion.max_score <= 0.0 {
                return Err(GradeError::invalid_value(
                    "max score",
                    format!("{} for criterion {}", criterion.max_score, criterion.id),
                ));
            }

            let mut levels = HashSet::new();
            for level in &criterion.levels {
                if !levels.insert(&level.id) {
                    return Err(GradeError::DuplicateId {
                        context: "level".to_string(),
                        id: level.id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&RubricCriterion> {
        self.criteria.iter().find(|c| &c.id == id)
    }

    pub(crate) fn criterion_mut(&mut self, id: &CriterionId) -> Result<&mut RubricCriterion> {
        self.criteria
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| GradeError::not_found("criterion", id))
    }

    /// Advisory weight check for this rubric
    pub fn weight_report(&self) -> WeightReport {
        validate_weights(self.criteria.iter().map(|c| c.weight))
    }

    /// Whether `needle` matches the name or description, ignoring case
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
