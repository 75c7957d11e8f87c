//! Session state and grading sessions
//!
//! A [`SessionContext`] is created at login and consumed at logout; it is
//! passed explicitly to whatever needs the current user. A
//! [`GradingSession`] holds the scores a grader is entering for one
//! submission and recomputes the evaluation on demand.

mod sheet;

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GradeError, Result};
use crate::grade::Evaluation;
use crate::id::{CriterionId, RubricId};
use crate::policy::ScoringPolicy;
use crate::rubric::Rubric;
use crate::scoring::ScoreEntry;
use crate::weights::Weight;

pub use sheet::{GradeSheet, OverallFeedback, SheetEntry};

/// What a signed-in user may do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Faculty,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Faculty => write!(f, "faculty"),
            Role::Student => write!(f, "student"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    pub fn faculty(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: None,
            role: Role::Faculty,
            department: None,
        }
    }

    pub fn student(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: None,
            role: Role::Student,
            department: None,
        }
    }
}

/// The signed-in user and when they signed in
#[derive(Debug)]
pub struct SessionContext {
    user: User,
    started_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn login(user: User) -> Self {
        info!(user = %user.name, role = %user.role, "login");
        SessionContext {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// End the session and return how long it lasted; the context cannot
    /// be used afterwards
    pub fn logout(self) -> TimeDelta {
        let elapsed = Utc::now() - self.started_at;
        info!(
            user = %self.user.name,
            seconds = elapsed.num_seconds(),
            "logout"
        );
        elapsed
    }

    fn require(&self, role: Role, action: &str) -> Result<()> {
        if self.user.role == role {
            Ok(())
        } else {
            Err(GradeError::PermissionDenied {
                action: action.to_string(),
                required: role.to_string(),
            })
        }
    }
}

/// Score and feedback a grader entered for one criterion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: Option<f64>,
    pub feedback: String,
}

/// Per-criterion line of a finished grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub criterion: CriterionId,
    pub name: String,
    pub weight: Weight,
    pub max_score: f64,
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub feedback: String,
}

/// The outcome of a finished grading session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    pub rubric: RubricId,
    pub graded_by: String,
    pub graded_at: DateTime<Utc>,
    pub evaluation: Evaluation,
    pub criteria: Vec<CriterionResult>,
    #[serde(skip_serializing_if = "OverallFeedback::is_empty")]
    pub feedback: OverallFeedback,
}

/// Scores being entered against one rubric
#[derive(Debug)]
pub struct GradingSession<'r> {
    rubric: &'r Rubric,
    assessment: Option<String>,
    grader: String,
    scores: HashMap<CriterionId, CriterionScore>,
    feedback: OverallFeedback,
}

impl<'r> GradingSession<'r> {
    /// Open a session; only faculty may grade
    pub fn open(
        ctx: &SessionContext,
        rubric: &'r Rubric,
        assessment: Option<String>,
    ) -> Result<Self> {
        ctx.require(Role::Faculty, "grading")?;
        debug!(rubric = %rubric.id, assessment = ?assessment, "open_grading_session");
        Ok(GradingSession {
            rubric,
            assessment,
            grader: ctx.user().name.clone(),
            scores: HashMap::new(),
            feedback: OverallFeedback::default(),
        })
    }

    pub fn rubric(&self) -> &Rubric {
        self.rubric
    }

    fn slot(&mut self, criterion: &CriterionId) -> Result<&mut CriterionScore> {
        if self.rubric.criterion(criterion).is_none() {
            return Err(GradeError::not_found("criterion", criterion));
        }
        Ok(self.scores.entry(criterion.clone()).or_default())
    }

    /// Record a score as entered; range checks belong to the scoring mode
    pub fn set_score(&mut self, criterion: &CriterionId, score: f64) -> Result<()> {
        self.slot(criterion)?.score = Some(score);
        Ok(())
    }

    pub fn clear_score(&mut self, criterion: &CriterionId) -> Result<()> {
        self.slot(criterion)?.score = None;
        Ok(())
    }

    pub fn set_feedback(&mut self, criterion: &CriterionId, feedback: impl Into<String>) -> Result<()> {
        self.slot(criterion)?.feedback = feedback.into();
        Ok(())
    }

    pub fn score(&self, criterion: &CriterionId) -> Option<&CriterionScore> {
        self.scores.get(criterion)
    }

    pub fn feedback(&self) -> &OverallFeedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut OverallFeedback {
        &mut self.feedback
    }

    /// Copy every entry of a sheet into the session.
    ///
    /// A sheet written for another rubric, or naming a criterion this
    /// rubric does not have, is rejected before anything is applied.
    pub fn apply_sheet(&mut self, sheet: &GradeSheet) -> Result<()> {
        if let Some(rubric_id) = &sheet.rubric {
            if rubric_id != &self.rubric.id {
                return Err(GradeError::invalid_value(
                    "grade sheet rubric",
                    format!("{} (grading against {})", rubric_id, self.rubric.id),
                ));
            }
        }
        if let Some(unknown) = sheet
            .scores
            .iter()
            .find(|e| self.rubric.criterion(&e.criterion).is_none())
        {
            return Err(GradeError::not_found("criterion", &unknown.criterion));
        }

        for entry in &sheet.scores {
            let slot = self.slot(&entry.criterion)?;
            slot.score = entry.score;
            if !entry.feedback.is_empty() {
                slot.feedback = entry.feedback.clone();
            }
        }
        self.feedback.merge(&sheet.feedback);
        if self.assessment.is_none() {
            self.assessment = sheet.assessment.clone();
        }
        Ok(())
    }

    /// Aggregator input, in rubric order
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.rubric
            .criteria
            .iter()
            .map(|c| {
                let score = self.scores.get(&c.id).and_then(|s| s.score);
                ScoreEntry::new(c.id.clone(), c.weight, score).with_max_score(c.max_score)
            })
            .collect()
    }

    /// Recompute the evaluation from the current scores
    pub fn evaluate(&self, policy: &ScoringPolicy) -> Result<Evaluation> {
        policy.evaluate(&self.entries())
    }

    /// Close the session and produce the grade record
    pub fn finish(self, policy: &ScoringPolicy) -> Result<GradeRecord> {
        let evaluation = self.evaluate(policy)?;
        let criteria = self
            .rubric
            .criteria
            .iter()
            .map(|c| {
                let entered = self.scores.get(&c.id).cloned().unwrap_or_default();
                CriterionResult {
                    criterion: c.id.clone(),
                    name: c.name.clone(),
                    weight: c.weight,
                    max_score: c.max_score,
                    score: entered.score,
                    feedback: entered.feedback,
                }
            })
            .collect();

        info!(
            rubric = %self.rubric.id,
            total = evaluation.total,
            grade = %evaluation.grade,
            "grading_finished"
        );

        Ok(GradeRecord {
            assessment: self.assessment,
            rubric: self.rubric.id.clone(),
            graded_by: self.grader,
            graded_at: Utc::now(),
            evaluation,
            criteria,
            feedback: self.feedback,
        })
    }
}

#[cfg(test)]
mod tests;
