//! Summary reports over a collection of assessments
//!
//! All averages skip assessments without the relevant score; an empty
//! group reports `None` rather than a zero average.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Assessment, AssessmentStats, AssessmentStatus, PeriodTrend, TrendPeriod};
use crate::grade::{GradeScale, LetterGrade};

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Round half up to one decimal place
pub(crate) fn one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Mean of each group, one decimal; empty groups are dropped
pub(crate) fn group_means(groups: BTreeMap<String, Vec<f64>>) -> BTreeMap<String, f64> {
    groups
        .into_iter()
        .filter_map(|(key, values)| mean(&values).map(|avg| (key, one_decimal(avg))))
        .collect()
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        one_decimal(part as f64 * 100.0 / whole as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeShare {
    pub grade: LetterGrade,
    pub count: usize,
    pub percent: f64,
}

/// Share of each letter grade among assessments in graded status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradeDistribution {
    pub graded: usize,
    /// Letters with at least one assessment, best grade first
    pub shares: Vec<GradeShare>,
}

impl GradeDistribution {
    pub fn build(assessments: &[&Assessment], scale: &GradeScale) -> Self {
        let mut counts: BTreeMap<LetterGrade, usize> = BTreeMap::new();
        let mut graded = 0;
        for grade in assessments
            .iter()
            .filter(|a| a.status == AssessmentStatus::Graded)
            .filter_map(|a| a.effective_grade(scale))
        {
            graded += 1;
            *counts.entry(grade).or_default() += 1;
        }
        let shares = counts
            .into_iter()
            .map(|(grade, count)| GradeShare {
                grade,
                count,
                percent: percent_of(count, graded),
            })
            .collect();
        GradeDistribution { graded, shares }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabComparison {
    pub lab_type: String,
    pub assessments: usize,
    pub students: usize,
    pub average_score: Option<f64>,
    /// Graded share of the lab's assessments
    pub completion_percent: f64,
}

impl LabComparison {
    pub fn build(assessments: &[&Assessment]) -> Vec<Self> {
        let mut groups: BTreeMap<String, Vec<&Assessment>> = BTreeMap::new();
        for &assessment in assessments {
            groups
                .entry(assessment.lab_type.to_string())
                .or_default()
                .push(assessment);
        }
        groups
            .into_iter()
            .map(|(lab_type, group)| {
                let totals: Vec<f64> = group
                    .iter()
                    .filter_map(|a| a.total_score.map(f64::from))
                    .collect();
                let students: BTreeSet<&str> =
                    group.iter().map(|a| a.student.name.as_str()).collect();
                let graded = group
                    .iter()
                    .filter(|a| a.status == AssessmentStatus::Graded)
                    .count();
                LabComparison {
                    lab_type,
                    assessments: group.len(),
                    students: students.len(),
                    average_score: mean(&totals).map(one_decimal),
                    completion_percent: percent_of(graded, group.len()),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionPerformance {
    pub criterion: String,
    pub samples: usize,
    pub average_score: f64,
}

impl CriterionPerformance {
    pub fn build(assessments: &[&Assessment]) -> Vec<Self> {
        let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for &assessment in assessments {
            for (name, score) in &assessment.criterion_scores {
                if score.is_finite() {
                    groups.entry(name.as_str()).or_default().push(*score);
                }
            }
        }
        groups
            .into_iter()
            .filter_map(|(name, scores)| {
                mean(&scores).map(|avg| CriterionPerformance {
                    criterion: name.to_string(),
                    samples: scores.len(),
                    average_score: one_decimal(avg),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProgress {
    pub student: String,
    pub assessments: usize,
    pub graded: usize,
    pub average_score: Option<f64>,
    /// Average total per lab type, for labs with a scored assessment
    pub lab_averages: BTreeMap<String, f64>,
}

impl StudentProgress {
    pub fn build(assessments: &[&Assessment]) -> Vec<Self> {
        let mut groups: BTreeMap<&str, Vec<&Assessment>> = BTreeMap::new();
        for &assessment in assessments {
            groups
                .entry(assessment.student.name.as_str())
                .or_default()
                .push(assessment);
        }
        groups
            .into_iter()
            .map(|(student, group)| {
                let totals: Vec<f64> = group
                    .iter()
                    .filter_map(|a| a.total_score.map(f64::from))
                    .collect();
                let mut by_lab: BTreeMap<String, Vec<f64>> = BTreeMap::new();
                for a in &group {
                    if let Some(total) = a.total_score {
                        by_lab
                            .entry(a.lab_type.to_string())
                            .or_default()
                            .push(f64::from(total));
                    }
                }
                StudentProgress {
                    student: student.to_string(),
                    assessments: group.len(),
                    graded: group
                        .iter()
                        .filter(|a| a.status == AssessmentStatus::Graded)
                        .count(),
                    average_score: mean(&totals).map(one_decimal),
                    lab_averages: group_means(by_lab),
                }
            })
            .collect()
    }
}

/// Every report over one selection of assessments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub stats: AssessmentStats,
    pub grade_distribution: GradeDistribution,
    pub labs: Vec<LabComparison>,
    pub criteria: Vec<CriterionPerformance>,
    pub students: Vec<StudentProgress>,
    pub period: TrendPeriod,
    pub trends: Vec<PeriodTrend>,
}

impl Report {
    pub fn build(assessments: &[&Assessment], scale: &GradeScale, period: TrendPeriod) -> Self {
        Report {
            stats: AssessmentStats::summarize(assessments.iter().copied()),
            grade_distribution: GradeDistribution::build(assessments, scale),
            labs: LabComparison::build(assessments),
            criteria: CriterionPerformance::build(assessments),
            students: StudentProgress::build(assessments),
            period,
            trends: PeriodTrend::build(assessments, period),
        }
    }
}
