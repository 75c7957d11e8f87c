//! Output formatting for the grade command

use std::path::Path;

use crate::cli::Cli;
use labgrade_core::error::Result;
use labgrade_core::format::{percent, stars};
use labgrade_core::records::{escape_quotes, header, or_dash};
use labgrade_core::rubric::Rubric;
use labgrade_core::scoring::ScoringMode;
use labgrade_core::session::{CriterionResult, GradeRecord, OverallFeedback};
use labgrade_core::weights::validate_weights;

fn score_cell(line: &CriterionResult) -> String {
    match line.score {
        Some(score) => format!("{}/{}", score, line.max_score),
        None => format!("-/{}", line.max_score),
    }
}

fn feedback_lines(feedback: &OverallFeedback) -> Vec<(&'static str, &str)> {
    [
        ("Comment", feedback.comment.as_str()),
        ("Strengths", feedback.strengths.as_str()),
        ("Improvements", feedback.improvements.as_str()),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
    .collect()
}

pub fn output_human(
    cli: &Cli,
    rubric: &Rubric,
    record: &GradeRecord,
    mode: ScoringMode,
    saved_to: Option<&Path>,
) {
    let evaluation = &record.evaluation;
    println!("{} ({})", rubric.name, rubric.id);
    if let Some(assessment) = &record.assessment {
        println!("Assessment: {}", assessment);
    }

    let width = record
        .criteria
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    for line in &record.criteria {
        println!(
            "  {:<width$}  {:>6}  {}",
            line.name,
            line.weight.to_string(),
            score_cell(line),
            width = width
        );
        if !line.feedback.is_empty() {
            println!("  {:<width$}  {}", "", line.feedback, width = width);
        }
    }

    println!();
    println!(
        "Total: {}  {}  Grade: {}",
        percent(evaluation.total),
        stars(evaluation.star_rating),
        evaluation.grade
    );
    for (label, text) in feedback_lines(&record.feedback) {
        println!("{}: {}", label, text);
    }

    if cli.quiet {
        return;
    }

    if !evaluation.substituted.is_empty() {
        let names: Vec<&str> = record
            .criteria
            .iter()
            .filter(|c| evaluation.substituted.contains(&c.criterion))
            .map(|c| c.name.as_str())
            .collect();
        eprintln!(
            "warning: scored as 0 in {} mode (missing or out of range): {}",
            mode,
            names.join(", ")
        );
    }

    let report = validate_weights(record.criteria.iter().map(|c| c.weight));
    if !report.is_valid {
        eprintln!(
            "warning: criterion weights total {}%, not 100%",
            report.total_weight
        );
    }

    if let Some(path) = saved_to {
        println!("Saved grade record to {}", path.display());
    }
}

pub fn output_json(record: &GradeRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

pub fn output_records(rubric: &Rubric, record: &GradeRecord, mode: ScoringMode) {
    let evaluation = &record.evaluation;
    println!(
        "{}",
        header(
            "grade",
            &[
                ("rubric", rubric.id.to_string()),
                ("assessment", or_dash(record.assessment.as_deref())),
                ("criteria", record.criteria.len().to_string()),
                ("scoring", mode.to_string()),
            ]
        )
    );
    println!(
        "T total={} stars={} grade={} substituted={}",
        evaluation.total,
        evaluation.star_rating,
        evaluation.grade,
        evaluation.substituted.len()
    );
    for line in &record.criteria {
        let substituted = evaluation.substituted.contains(&line.criterion);
        println!(
            "C {} weight={} score={} max={} substituted={} \"{}\"",
            line.criterion,
            line.weight.percent(),
            or_dash(line.score),
            line.max_score,
            substituted,
            escape_quotes(&line.name)
        );
    }
    for (label, text) in feedback_lines(&record.feedback) {
        println!("F {} \"{}\"", label.to_lowercase(), escape_quotes(text));
    }
}
