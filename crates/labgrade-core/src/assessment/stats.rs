use serde::Serialize;

use super::report::mean;
use super::{Assessment, AssessmentStatus};

/// Status counts and average score over a set of assessments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentStats {
    pub total: usize,
    pub draft: usize,
    pub submitted: usize,
    pub graded: usize,
    /// Mean recorded total, rounded half up; absent when nothing is scored
    pub average_score: Option<u32>,
}

impl AssessmentStats {
    pub fn summarize<'a, I>(assessments: I) -> Self
    where
        I: IntoIterator<Item = &'a Assessment>,
    {
        let mut stats = AssessmentStats::default();
        let mut totals = Vec::new();
        for assessment in assessments {
            stats.total += 1;
            match assessment.status {
                AssessmentStatus::Draft => stats.draft += 1,
                AssessmentStatus::Submitted => stats.submitted += 1,
                AssessmentStatus::Graded => stats.graded += 1,
            }
            if let Some(total) = assessment.total_score {
                totals.push(f64::from(total));
            }
        }
        stats.average_score = mean(&totals).map(|avg| (avg + 0.5).floor() as u32);
        stats
    }

    /// Submitted work still waiting for a grade
    pub fn pending(&self) -> usize {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::fixtures::sample;

    #[test]
    fn test_sample_stats() {
        let stats = AssessmentStats::summarize(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.draft, 1);
        assert_eq!(stats.pending(), 1);
        assert_eq!(stats.graded, 2);
        // (85 + 92) / 2 = 88.5
        assert_eq!(stats.average_score, Some(89));
    }

    #[test]
    fn test_no_scores_has_no_average() {
        let stats = AssessmentStats::summarize(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, None);
    }
}
