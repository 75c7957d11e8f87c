//! `labgrade rubric check` - structural and weight checks

use super::describe_weights;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use labgrade_core::error::Result;
use labgrade_core::records::header;
use labgrade_core::rubric;

/// Execute the rubric check command.
///
/// Structural problems always fail. A weight total other than 100% is a
/// warning unless `deny_invalid` is set.
pub fn execute(ctx: &CommandContext, reference: &str, deny_invalid: bool) -> Result<()> {
    let rubric = rubric::resolve(reference)?;
    let report = rubric.weight_report();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "rubric": rubric.id,
                "criteria": rubric.criteria.len(),
                "total_weight": report.total_weight,
                "remaining": report.remaining(),
                "is_valid": report.is_valid,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if report.is_valid {
                if !ctx.cli.quiet {
                    println!(
                        "ok: {} weights total {}",
                        rubric.id,
                        describe_weights(&report)
                    );
                }
            } else {
                eprintln!(
                    "warning: {} weights total {}",
                    rubric.id,
                    describe_weights(&report)
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "rubric.check",
                    &[
                        ("rubric", rubric.id.to_string()),
                        ("criteria", rubric.criteria.len().to_string()),
                    ]
                )
            );
            println!(
                "W total={} remaining={} valid={}",
                report.total_weight,
                report.remaining(),
                report.is_valid
            );
        }
    }

    if deny_invalid {
        report.require_valid()?;
    }
    Ok(())
}
