//! `labgrade rubric new` - write a rubric template

use std::path::{Path, PathBuf};

use tracing::info;

use super::describe_weights;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use labgrade_core::bail_usage;
use labgrade_core::error::Result;
use labgrade_core::records::{escape_quotes, header};
use labgrade_core::rubric::{LabType, Rubric};
use labgrade_core::weights::Weight;

pub struct NewOptions<'a> {
    pub name: &'a str,
    pub lab_type: LabType,
    pub description: Option<&'a str>,
    pub criteria: &'a [(String, Option<f64>)],
    pub output: Option<&'a Path>,
    pub force: bool,
}

fn default_path(ctx: &CommandContext, name: &str) -> PathBuf {
    let stem = slug::slugify(name);
    let stem = if stem.is_empty() { "rubric".to_string() } else { stem };
    ctx.cwd.join(format!("{}.toml", stem))
}

/// Execute the rubric new command
pub fn execute(ctx: &CommandContext, opts: NewOptions) -> Result<()> {
    let path = opts
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_path(ctx, opts.name));

    if path.exists() && !opts.force {
        bail_usage!(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        ));
    }

    let (config, _) = ctx.config()?;

    let mut rubric = Rubric::new(opts.name, opts.lab_type);
    rubric.created_by = Some(config.grader);
    if let Some(description) = opts.description {
        rubric.description = description.to_string();
    }
    for (name, weight) in opts.criteria {
        rubric.add_criterion(name.as_str(), weight.map(Weight::from_percent));
    }

    rubric.validate()?;
    rubric.save(&path)?;
    info!(rubric = %rubric.id, path = %path.display(), "created rubric");

    let report = rubric.weight_report();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": rubric.id,
                "name": rubric.name,
                "path": path,
                "criteria": rubric.criteria.iter().map(|c| serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "weight": c.weight,
                })).collect::<Vec<_>>(),
                "weights": report,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Created rubric {} at {}", rubric.id, path.display());
            if !ctx.cli.quiet {
                for criterion in &rubric.criteria {
                    println!("  {}  {}  {}", criterion.id, criterion.weight, criterion.name);
                }
                if !report.is_valid {
                    eprintln!("warning: weights total {}", describe_weights(&report));
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "rubric.new",
                    &[
                        ("rubric", rubric.id.to_string()),
                        ("path", path.display().to_string()),
                    ]
                )
            );
            for criterion in &rubric.criteria {
                println!(
                    "C {} weight={} \"{}\"",
                    criterion.id,
                    criterion.weight.percent(),
                    escape_quotes(&criterion.name)
                );
            }
            println!(
                "W total={} valid={}",
                report.total_weight, report.is_valid
            );
        }
    }

    Ok(())
}
