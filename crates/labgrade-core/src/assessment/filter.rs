use chrono::NaiveDate;

use super::{Assessment, AssessmentStatus};
use crate::rubric::LabType;

/// Filter configuration for assessments
#[derive(Debug, Clone, Default)]
pub struct AssessmentFilter<'a> {
    /// Case-insensitive substring of title or student name
    pub search: Option<&'a str>,
    pub status: Option<AssessmentStatus>,
    pub lab_type: Option<&'a LabType>,
    /// Inclusive bounds on [`Assessment::activity_date`]; undated
    /// assessments never match a bounded range
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl<'a> AssessmentFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: Option<&'a str>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_status(mut self, status: Option<AssessmentStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_lab_type(mut self, lab_type: Option<&'a LabType>) -> Self {
        self.lab_type = lab_type;
        self
    }

    pub fn with_date_range(mut self, since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.since = since;
        self.until = until;
        self
    }

    fn in_range(&self, assessment: &Assessment) -> bool {
        if self.since.is_none() && self.until.is_none() {
            return true;
        }
        let Some(date) = assessment.activity_date() else {
            return false;
        };
        self.since.map_or(true, |since| date >= since)
            && self.until.map_or(true, |until| date <= until)
    }

    pub fn matches(&self, assessment: &Assessment) -> bool {
        if let Some(search) = self.search {
            if !assessment.matches_search(search) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if assessment.status != status {
                return false;
            }
        }

        if let Some(lab_type) = self.lab_type {
            if &assessment.lab_type != lab_type {
                return false;
            }
        }

        self.in_range(assessment)
    }

    pub fn apply<'s>(&self, assessments: &'s [Assessment]) -> Vec<&'s Assessment> {
        assessments.iter().filter(|a| self.matches(a)).collect()
    }
}
