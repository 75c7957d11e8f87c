//! Grade sheets: per-criterion scores and feedback for one submission

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document;
use crate::error::{GradeError, Result};
use crate::id::{CriterionId, RubricId};

/// One line of a grade sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub criterion: CriterionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub feedback: String,
}

/// Remarks on the submission as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallFeedback {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub strengths: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub improvements: String,
}

impl OverallFeedback {
    pub fn is_empty(&self) -> bool {
        self.comment.is_empty() && self.strengths.is_empty() && self.improvements.is_empty()
    }

    /// Take every non-empty field of `other`
    pub fn merge(&mut self, other: &OverallFeedback) {
        for (mine, theirs) in [
            (&mut self.comment, &other.comment),
            (&mut self.strengths, &other.strengths),
            (&mut self.improvements, &other.improvements),
        ] {
            if !theirs.is_empty() {
                *mine = theirs.clone();
            }
        }
    }
}

/// A grade sheet document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeSheet {
    /// Rubric the sheet was filled against; checked when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<RubricId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    #[serde(default)]
    pub scores: Vec<SheetEntry>,
    /// The `[feedback]` table
    #[serde(default, skip_serializing_if = "OverallFeedback::is_empty")]
    pub feedback: OverallFeedback,
}

impl GradeSheet {
    /// Load a sheet and reject repeated criteria
    pub fn load(path: &Path) -> Result<Self> {
        let sheet: GradeSheet = document::load(path)?;
        sheet
            .check_unique()
            .map_err(|e| GradeError::invalid_document(path, e))?;
        Ok(sheet)
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.scores {
            if !seen.insert(&entry.criterion) {
                return Err(GradeError::DuplicateId {
                    context: "sheet criterion".to_string(),
                    id: entry.criterion.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Set or replace the score for one criterion
    pub fn set_score(&mut self, criterion: CriterionId, score: f64) {
        match self.scores.iter_mut().find(|e| e.criterion == criterion) {
            Some(entry) => entry.score = Some(score),
            None => self.scores.push(SheetEntry {
                criterion,
                score: Some(score),
                feedback: String::new(),
            }),
        }
    }
}
