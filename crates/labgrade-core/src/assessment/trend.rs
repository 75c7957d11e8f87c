//! Submission and grading activity bucketed by calendar period

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::report::group_means;
use super::{Assessment, AssessmentStatus};
use crate::error::{GradeError, Result};

/// Bucket size for trend reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    /// ISO week, labelled `2024-W03`
    Week,
    /// Calendar month, labelled `2024-01`
    #[default]
    Month,
}

impl TrendPeriod {
    /// Label of the period containing `date`; labels sort chronologically
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            TrendPeriod::Week => {
                let week = date.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            TrendPeriod::Month => format!("{:04}-{:02}", date.year(), date.month()),
        }
    }
}

impl FromStr for TrendPeriod {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "week" | "weekly" => Ok(TrendPeriod::Week),
            "month" | "monthly" => Ok(TrendPeriod::Month),
            other => Err(GradeError::invalid_value("trend period", other)),
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendPeriod::Week => write!(f, "week"),
            TrendPeriod::Month => write!(f, "month"),
        }
    }
}

/// Activity within one period.
///
/// `submitted` and `pending` count work handed in during the period,
/// `pending` being the part still waiting for a grade. `graded` and the
/// lab averages cover work graded during the period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodTrend {
    pub period: String,
    pub submitted: usize,
    pub graded: usize,
    pub pending: usize,
    pub lab_averages: BTreeMap<String, f64>,
}

impl PeriodTrend {
    /// One entry per period with any activity, oldest first
    pub fn build(assessments: &[&Assessment], period: TrendPeriod) -> Vec<Self> {
        let mut buckets: BTreeMap<String, (PeriodTrend, BTreeMap<String, Vec<f64>>)> =
            BTreeMap::new();

        for &assessment in assessments {
            if let Some(date) = assessment.submitted_at {
                let (trend, _) = buckets.entry(period.label(date)).or_default();
                trend.submitted += 1;
                if assessment.status == AssessmentStatus::Submitted {
                    trend.pending += 1;
                }
            }

            if assessment.status != AssessmentStatus::Graded {
                continue;
            }
            if let Some(date) = assessment.graded_at {
                let (trend, scores) = buckets.entry(period.label(date)).or_default();
                trend.graded += 1;
                if let Some(total) = assessment.total_score {
                    scores
                        .entry(assessment.lab_type.to_string())
                        .or_default()
                        .push(f64::from(total));
                }
            }
        }

        buckets
            .into_iter()
            .map(|(label, (mut trend, scores))| {
                trend.period = label;
                trend.lab_averages = group_means(scores);
                trend
            })
            .collect()
    }
}
