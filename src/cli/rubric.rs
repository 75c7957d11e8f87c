//! Rubric subcommands

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use super::parse::{parse_criterion_spec, parse_lab_type};
use labgrade_core::rubric::{LabType, RubricKind};

/// Rubric origin filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Default,
    Custom,
}

impl From<KindArg> for RubricKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Default => RubricKind::Default,
            KindArg::Custom => RubricKind::Custom,
        }
    }
}

/// Rubric subcommands
#[derive(Subcommand, Debug)]
pub enum RubricCommands {
    /// Write a new rubric template with default performance levels
    New {
        /// Rubric name
        name: String,

        /// Lab type (ML, AI, FSD, DS, ...)
        #[arg(long, short = 'T', value_parser = parse_lab_type)]
        lab_type: LabType,

        /// Rubric description
        #[arg(long, short)]
        description: Option<String>,

        /// Criterion as NAME:WEIGHT or NAME (repeatable)
        #[arg(long = "criterion", short, value_parser = parse_criterion_spec, action = clap::ArgAction::Append)]
        criteria: Vec<(String, Option<f64>)>,

        /// Output path (default: <slug>.toml in the current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check a rubric's structure and weight total
    Check {
        /// Rubric document path or built-in rubric id
        rubric: String,

        /// Fail when the weights do not total 100%
        #[arg(long)]
        deny_invalid: bool,
    },

    /// Show a rubric's criteria, weights and levels
    Show {
        /// Rubric document path or built-in rubric id
        rubric: String,
    },

    /// List rubrics in a directory, or the built-in templates
    List {
        /// Directory to scan recursively
        dir: Option<PathBuf>,

        /// Filter by lab type
        #[arg(long, value_parser = parse_lab_type)]
        lab: Option<LabType>,

        /// Search names and descriptions
        #[arg(long)]
        search: Option<String>,

        /// Filter by origin
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
}
