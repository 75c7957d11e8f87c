//! `labgrade rubric list` - browse rubrics on disk or the built-in set

use std::path::Path;

use super::describe_weights;
use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use labgrade_core::error::Result;
use labgrade_core::records::{escape_quotes, header};
use labgrade_core::rubric::defaults::default_rubrics;
use labgrade_core::rubric::{scan_dir, RubricCatalog, RubricFile, RubricFilter, SkippedFile};

/// Execute the rubric list command
pub fn execute(ctx: &CommandContext, dir: Option<&Path>, filter: &RubricFilter) -> Result<()> {
    let (files, skipped) = match dir {
        Some(dir) => {
            let scan = scan_dir(dir)?;
            (scan.rubrics, scan.skipped)
        }
        None => (
            default_rubrics()
                .into_iter()
                .map(|rubric| RubricFile {
                    path: format!("builtin:{}", rubric.id).into(),
                    rubric,
                })
                .collect(),
            Vec::new(),
        ),
    };
    trace_command!(ctx.cli, ctx.start, "collect_rubrics");

    let matched: Vec<&RubricFile> = files.iter().filter(|f| filter.matches(&f.rubric)).collect();
    let catalog = RubricCatalog::summarize(matched.iter().map(|f| &f.rubric));

    match ctx.cli.format {
        OutputFormat::Json => output_json(&matched, &catalog, &skipped)?,
        OutputFormat::Human => output_human(ctx, &matched, &catalog, &skipped),
        OutputFormat::Records => output_records(&matched, &catalog, &skipped),
    }
    Ok(())
}

fn output_json(matched: &[&RubricFile], catalog: &RubricCatalog, skipped: &[SkippedFile]) -> Result<()> {
    let rubrics: Vec<_> = matched
        .iter()
        .map(|f| {
            serde_json::json!({
                "id": f.rubric.id,
                "name": f.rubric.name,
                "lab_type": f.rubric.lab_type,
                "kind": f.rubric.kind,
                "criteria": f.rubric.criteria.len(),
                "usage_count": f.rubric.usage_count,
                "weights": f.rubric.weight_report(),
                "path": f.path,
            })
        })
        .collect();
    let skipped: Vec<_> = skipped
        .iter()
        .map(|s| serde_json::json!({ "path": s.path, "reason": s.reason }))
        .collect();
    let output = serde_json::json!({
        "rubrics": rubrics,
        "catalog": catalog,
        "skipped": skipped,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    matched: &[&RubricFile],
    catalog: &RubricCatalog,
    skipped: &[SkippedFile],
) {
    if matched.is_empty() {
        if !ctx.cli.quiet {
            println!("No rubrics found");
        }
    } else {
        for file in matched {
            let rubric = &file.rubric;
            println!(
                "{} [{}] {} ({} criteria, weights {})",
                rubric.id,
                rubric.lab_type,
                rubric.name,
                rubric.criteria.len(),
                describe_weights(&rubric.weight_report())
            );
        }
        if !ctx.cli.quiet {
            println!();
            let labs: Vec<String> = catalog
                .by_lab
                .iter()
                .map(|(lab, count)| format!("{}={}", lab, count))
                .collect();
            println!(
                "{} rubrics: {} default, {} custom ({})",
                catalog.total,
                catalog.default_count,
                catalog.custom_count,
                labs.join(" ")
            );
        }
    }

    for file in skipped {
        eprintln!("warning: skipped {}: {}", file.path.display(), file.reason);
    }
}

fn output_records(matched: &[&RubricFile], catalog: &RubricCatalog, skipped: &[SkippedFile]) {
    println!(
        "{}",
        header(
            "rubric.list",
            &[
                ("rubrics", catalog.total.to_string()),
                ("default", catalog.default_count.to_string()),
                ("custom", catalog.custom_count.to_string()),
            ]
        )
    );
    for file in matched {
        let rubric = &file.rubric;
        println!(
            "R {} lab={} kind={} criteria={} weight={} path={} \"{}\"",
            rubric.id,
            rubric.lab_type,
            rubric.kind,
            rubric.criteria.len(),
            rubric.weight_report().total_weight,
            file.path.display(),
            escape_quotes(&rubric.name)
        );
    }
    for file in skipped {
        println!(
            "X path={} \"{}\"",
            file.path.display(),
            escape_quotes(&file.reason)
        );
    }
}
