//! `labgrade assessments` command - list assessments from a set document

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use labgrade_core::assessment::{Assessment, AssessmentFilter, AssessmentSet, AssessmentStats};
use labgrade_core::error::Result;
use labgrade_core::grade::GradeScale;
use labgrade_core::records::{escape_quotes, header, or_dash};

/// Execute the assessments command
pub fn execute(ctx: &CommandContext, file: &Path, filter: &AssessmentFilter) -> Result<()> {
    let set = AssessmentSet::load(file)?;
    let (config, _) = ctx.config()?;
    let scale = config.scale()?;
    trace_command!(ctx.cli, ctx.start, "load_assessments");

    let matched = filter.apply(&set.assessments);
    let stats = AssessmentStats::summarize(matched.iter().copied());

    match ctx.cli.format {
        OutputFormat::Json => {
            let assessments: Vec<_> = matched
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "id": a.id,
                        "title": a.title,
                        "student": a.student.name,
                        "lab_type": a.lab_type,
                        "status": a.status,
                        "due_date": a.due_date,
                        "total_score": a.total_score,
                        "grade": a.effective_grade(&scale),
                        "submissions": a.submissions.len(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "assessments": assessments,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(ctx, &matched, &stats, &scale),
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "assessments",
                    &[
                        ("assessments", stats.total.to_string()),
                        ("graded", stats.graded.to_string()),
                        ("average", or_dash(stats.average_score)),
                    ]
                )
            );
            for a in &matched {
                println!(
                    "A {} status={} lab={} score={} grade={} student=\"{}\" \"{}\"",
                    a.id,
                    a.status,
                    a.lab_type,
                    or_dash(a.total_score),
                    or_dash(a.effective_grade(&scale)),
                    escape_quotes(&a.student.name),
                    escape_quotes(&a.title)
                );
            }
        }
    }
    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    matched: &[&Assessment],
    stats: &AssessmentStats,
    scale: &GradeScale,
) {
    if matched.is_empty() {
        if !ctx.cli.quiet {
            println!("No assessments found");
        }
        return;
    }

    for a in matched {
        let result = match (a.total_score, a.effective_grade(scale)) {
            (Some(total), Some(grade)) => format!("{}% {}", total, grade),
            _ => "-".to_string(),
        };
        println!(
            "{} [{}] {} - {} ({}, {})",
            a.id, a.lab_type, a.title, a.student.name, a.status, result
        );
        if let Some(due) = a.due_date {
            println!("    due {}", due);
        }
        for submission in &a.submissions {
            println!(
                "    {} [{}] {}",
                submission.display_name(),
                submission.kind(),
                submission.size_kib()
            );
        }
    }

    if !ctx.cli.quiet {
        println!();
        println!(
            "{} assessments: {} draft, {} pending review, {} graded; average {}",
            stats.total,
            stats.draft,
            stats.pending(),
            stats.graded,
            stats
                .average_score
                .map(|avg| format!("{}%", avg))
                .unwrap_or_else(|| "-".to_string())
        );
    }
}
