//! Assessments: one student's submission for one lab, and its grade

mod filter;
pub mod report;
mod stats;
mod trend;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document;
use crate::error::{GradeError, Result};
use crate::grade::{GradeScale, LetterGrade};
use crate::id::RubricId;
use crate::rubric::LabType;

pub use filter::AssessmentFilter;
pub use stats::AssessmentStats;
pub use trend::{PeriodTrend, TrendPeriod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Graded,
}

impl FromStr for AssessmentStatus {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(AssessmentStatus::Draft),
            "submitted" => Ok(AssessmentStatus::Submitted),
            "graded" => Ok(AssessmentStatus::Graded),
            other => Err(GradeError::invalid_value("assessment status", other)),
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::Draft => write!(f, "draft"),
            AssessmentStatus::Submitted => write!(f, "submitted"),
            AssessmentStatus::Graded => write!(f, "graded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

/// Coarse category of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Code,
    Document,
    Audio,
    Video,
    Image,
}

/// Source extensions `mime_guess` reports as plain text or leaves unknown
const CODE_EXTENSIONS: [&str; 22] = [
    "py", "ipynb", "c", "h", "cc", "cpp", "hpp", "java", "kt", "js", "jsx", "ts", "tsx", "rs",
    "go", "rb", "php", "cs", "sql", "sh", "r", "m",
];

impl SubmissionKind {
    /// Classify a file by its extension, then by the MIME type its name suggests
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if CODE_EXTENSIONS.contains(&extension.as_str()) {
            return SubmissionKind::Code;
        }

        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        match (mime.type_().as_str(), mime.subtype().as_str()) {
            ("audio", _) => SubmissionKind::Audio,
            ("video", _) => SubmissionKind::Video,
            ("image", _) => SubmissionKind::Image,
            ("application", "pdf")
            | ("application", "msword")
            | ("application", "rtf")
            | ("text", "plain")
            | ("text", "markdown") => SubmissionKind::Document,
            ("application", sub) if sub.contains("officedocument") => SubmissionKind::Document,
            _ => SubmissionKind::Code,
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionKind::Code => "code",
            SubmissionKind::Document => "document",
            SubmissionKind::Audio => "audio",
            SubmissionKind::Video => "video",
            SubmissionKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// A file attached to an assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn kind(&self) -> SubmissionKind {
        SubmissionKind::from_filename(&self.filename)
    }

    pub fn display_name(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.filename)
    }

    /// Size in KiB with one decimal, as shown next to downloads
    pub fn size_kib(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub lab_type: LabType,
    pub student: Student,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    pub status: AssessmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<LetterGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<RubricId>,
    /// Scores per criterion name, used for criterion performance reports
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub criterion_scores: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submissions: Vec<Submission>,
}

impl Assessment {
    /// Recorded grade, or the grade the scale gives the recorded total
    pub fn effective_grade(&self, scale: &GradeScale) -> Option<LetterGrade> {
        self.grade
            .or_else(|| self.total_score.map(|total| scale.grade_for(total)))
    }

    /// Date of the latest recorded activity: grading, then submission,
    /// then the due date
    pub fn activity_date(&self) -> Option<NaiveDate> {
        self.graded_at.or(self.submitted_at).or(self.due_date)
    }

    /// Case-insensitive match on title or student name
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.student.name.to_lowercase().contains(&needle)
    }
}

/// A document holding a list of assessments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSet {
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl AssessmentSet {
    /// Load a set and reject repeated assessment ids
    pub fn load(path: &Path) -> Result<Self> {
        let set: AssessmentSet = document::load(path)?;
        let mut seen = HashSet::new();
        for assessment in &set.assessments {
            if !seen.insert(assessment.id.as_str()) {
                return Err(GradeError::invalid_document(
                    path,
                    GradeError::DuplicateId {
                        context: "assessment".to_string(),
                        id: assessment.id.clone(),
                    },
                ));
            }
        }
        debug!(count = set.assessments.len(), "load_assessments");
        Ok(set)
    }
}
