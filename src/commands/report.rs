//! `labgrade report` command - summaries over an assessment set

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use std::collections::BTreeMap;

use labgrade_core::assessment::report::Report;
use labgrade_core::assessment::{AssessmentFilter, AssessmentSet, TrendPeriod};
use labgrade_core::bail_usage;
use labgrade_core::error::Result;
use labgrade_core::records::{escape_quotes, header, or_dash};

/// Execute the report command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    filter: &AssessmentFilter,
    period: TrendPeriod,
) -> Result<()> {
    if let (Some(since), Some(until)) = (filter.since, filter.until) {
        if since > until {
            bail_usage!(format!("--since {} is after --until {}", since, until));
        }
    }

    let set = AssessmentSet::load(file)?;
    let (config, _) = ctx.config()?;
    let scale = config.scale()?;

    let selected = filter.apply(&set.assessments);
    let report = Report::build(&selected, &scale, period);
    trace_command!(ctx.cli, ctx.start, "build_report");

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => output_human(&report),
        OutputFormat::Records => output_records(&report),
    }
    Ok(())
}

fn optional_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}%", v))
        .unwrap_or_else(|| "-".to_string())
}

fn lab_summary(labs: &BTreeMap<String, f64>) -> String {
    labs.iter()
        .map(|(lab, avg)| format!("{} {}%", lab, avg))
        .collect::<Vec<_>>()
        .join(", ")
}

fn output_human(report: &Report) {
    let stats = &report.stats;
    println!(
        "Assessments: {} ({} draft, {} submitted, {} graded)",
        stats.total, stats.draft, stats.submitted, stats.graded
    );
    println!(
        "Average score: {}",
        optional_percent(stats.average_score.map(f64::from))
    );

    println!();
    println!("Grade distribution");
    if report.grade_distribution.shares.is_empty() {
        println!("  (no graded assessments)");
    }
    for share in &report.grade_distribution.shares {
        println!(
            "  {:<3} {:>3}  {}%",
            share.grade.as_str(),
            share.count,
            share.percent
        );
    }

    println!();
    println!("Lab comparison");
    for lab in &report.labs {
        println!(
            "  {:<6} {} assessments, {} students, average {}, {}% complete",
            lab.lab_type,
            lab.assessments,
            lab.students,
            optional_percent(lab.average_score),
            lab.completion_percent
        );
    }

    if !report.criteria.is_empty() {
        println!();
        println!("Criterion performance");
        for criterion in &report.criteria {
            println!(
                "  {}: {}% over {} scores",
                criterion.criterion, criterion.average_score, criterion.samples
            );
        }
    }

    if !report.students.is_empty() {
        println!();
        println!("Student progress");
        for student in &report.students {
            let labs = if student.lab_averages.is_empty() {
                String::new()
            } else {
                format!(" ({})", lab_summary(&student.lab_averages))
            };
            println!(
                "  {}: {} of {} graded, average {}{}",
                student.student,
                student.graded,
                student.assessments,
                optional_percent(student.average_score),
                labs
            );
        }
    }

    if !report.trends.is_empty() {
        println!();
        println!("Trends ({})", report.period);
        for trend in &report.trends {
            let labs = if trend.lab_averages.is_empty() {
                "-".to_string()
            } else {
                lab_summary(&trend.lab_averages)
            };
            println!(
                "  {}: {} submitted, {} graded, {} pending; {}",
                trend.period, trend.submitted, trend.graded, trend.pending, labs
            );
        }
    }
}

fn output_records(report: &Report) {
    let stats = &report.stats;
    println!(
        "{}",
        header(
            "report",
            &[
                ("assessments", stats.total.to_string()),
                ("graded", stats.graded.to_string()),
                ("average", or_dash(stats.average_score)),
                ("period", report.period.to_string()),
            ]
        )
    );
    for share in &report.grade_distribution.shares {
        println!(
            "G grade={} count={} percent={}",
            share.grade, share.count, share.percent
        );
    }
    for lab in &report.labs {
        println!(
            "L lab={} assessments={} students={} average={} completion={}",
            lab.lab_type,
            lab.assessments,
            lab.students,
            or_dash(lab.average_score),
            lab.completion_percent
        );
    }
    for criterion in &report.criteria {
        println!(
            "C samples={} average={} \"{}\"",
            criterion.samples,
            criterion.average_score,
            escape_quotes(&criterion.criterion)
        );
    }
    for student in &report.students {
        println!(
            "S assessments={} graded={} average={} labs={} \"{}\"",
            student.assessments,
            student.graded,
            or_dash(student.average_score),
            lab_pairs(&student.lab_averages),
            escape_quotes(&student.student)
        );
    }
    for trend in &report.trends {
        println!(
            "P {} submitted={} graded={} pending={} labs={}",
            trend.period,
            trend.submitted,
            trend.graded,
            trend.pending,
            lab_pairs(&trend.lab_averages)
        );
    }
}

/// `ML:85,AI:90`, or `-` when empty
fn lab_pairs(labs: &BTreeMap<String, f64>) -> String {
    if labs.is_empty() {
        return "-".to_string();
    }
    labs.iter()
        .map(|(lab, avg)| format!("{}:{}", lab, avg))
        .collect::<Vec<_>>()
        .join(",")
}
