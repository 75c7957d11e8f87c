//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use labgrade_core::config::{ConfigSource, GradingConfig};
use labgrade_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Resolve the grading configuration for this invocation
    pub fn config(&self) -> Result<(GradingConfig, ConfigSource)> {
        GradingConfig::resolve(self.cli.config.as_deref(), self.cwd)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("labgrade {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rubric-weighted grading for lab assessments.");
        println!();
        println!("Run `labgrade --help` for usage information.");
        Ok(())
    }
}
