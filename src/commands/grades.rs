//! `labgrade grades` command - print the active grade scale

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use labgrade_core::error::Result;
use labgrade_core::records::header;

/// Execute the grades command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (config, source) = ctx.config()?;
    let scale = config.scale()?;

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scale)?),
        OutputFormat::Human => {
            for threshold in scale.thresholds() {
                println!("{:<3} >= {}", threshold.grade.as_str(), threshold.min);
            }
            println!("{:<3} below", scale.fallback().as_str());
            if !ctx.cli.quiet {
                println!();
                println!("Source: {}", source.describe());
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "grades",
                    &[("thresholds", scale.thresholds().len().to_string())]
                )
            );
            for threshold in scale.thresholds() {
                println!("G grade={} min={}", threshold.grade, threshold.min);
            }
            println!("G grade={} min=0", scale.fallback());
        }
    }
    Ok(())
}
