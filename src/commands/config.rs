//! `labgrade config` command - show or initialize grading configuration

use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use labgrade_core::bail_usage;
use labgrade_core::config::global::{self, LOCAL_CONFIG_FILE};
use labgrade_core::config::GradingConfig;
use labgrade_core::error::Result;
use labgrade_core::records::header;

/// Execute the config command
pub fn execute(ctx: &CommandContext, init: bool) -> Result<()> {
    if init {
        return init_local(ctx);
    }

    let (config, source) = ctx.config()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source.describe(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("mode: {}", config.mode);
            println!("weight_tolerance: {}", config.weight_tolerance);
            println!("grader: {}", config.grader);
            println!(
                "grade_scale: {}",
                if config.grade_scale.is_some() {
                    "custom"
                } else {
                    "built-in"
                }
            );
            if !ctx.cli.quiet {
                println!();
                println!("Source: {}", source.describe());
                println!("User config: {}", global::source_display());
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header("config", &[("source", source.describe())])
            );
            println!(
                "K mode={} weight_tolerance={} custom_scale={}",
                config.mode,
                config.weight_tolerance,
                config.grade_scale.is_some()
            );
        }
    }
    Ok(())
}

fn init_local(ctx: &CommandContext) -> Result<()> {
    let path = ctx.cwd.join(LOCAL_CONFIG_FILE);
    if path.exists() {
        bail_usage!(format!("{} already exists", path.display()));
    }
    GradingConfig::default().save(&path)?;
    info!(path = %path.display(), "wrote default config");

    if !ctx.cli.quiet || ctx.cli.format == OutputFormat::Json {
        match ctx.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "created": path }))?
            ),
            _ => println!("Created {}", path.display()),
        }
    }
    Ok(())
}
