//! `labgrade rubric` subcommands

pub mod check;
pub mod list;
pub mod new;
pub mod show;

use labgrade_core::weights::{Weight, WeightReport};

/// One-line description of a weight total, e.g. `90% (10% unassigned)`
pub(crate) fn describe_weights(report: &WeightReport) -> String {
    let total = Weight::from_percent(report.total_weight);
    let remaining = report.remaining();
    if report.is_valid {
        format!("{}", total)
    } else if remaining > 0.0 {
        format!("{} ({} unassigned)", total, Weight::from_percent(remaining))
    } else {
        format!(
            "{} ({} over)",
            total,
            Weight::from_percent(-remaining)
        )
    }
}
