//! CLI argument parsing for labgrade
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod parse;
pub mod rubric;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chrono::NaiveDate;
use labgrade_core::assessment::{AssessmentStatus, TrendPeriod};
use labgrade_core::rubric::LabType;
pub use labgrade_core::format::OutputFormat;
use parse::{
    parse_date, parse_format, parse_lab_type, parse_period, parse_score, parse_status,
};
pub use rubric::RubricCommands;

/// Labgrade - rubric-weighted grading for lab assessments
#[derive(Parser, Debug)]
#[command(name = "labgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Grading config file (default: ./labgrade.toml, then the user config)
    #[arg(long, global = true, env = "LABGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate criterion scores into a total, star rating and grade
    Grade {
        /// Rubric document path or built-in rubric id
        #[arg(long, short)]
        rubric: String,

        /// Grade sheet with per-criterion scores and feedback
        #[arg(long, short)]
        sheet: Option<PathBuf>,

        /// Criterion score as ID=VALUE (repeatable, overrides the sheet)
        #[arg(long = "score", value_parser = parse_score, action = clap::ArgAction::Append)]
        scores: Vec<(String, f64)>,

        /// Reject missing or out-of-range scores and invalid weights
        #[arg(long)]
        strict: bool,

        /// Assessment the grade belongs to
        #[arg(long)]
        assessment: Option<String>,

        /// Overall comment on the submission (overrides the sheet's)
        #[arg(long)]
        comment: Option<String>,

        /// Write the grade record to this document
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Create, check and browse rubrics
    Rubric {
        #[command(subcommand)]
        command: RubricCommands,
    },

    /// List assessments with their status and score
    Assessments {
        /// Assessment set document
        file: PathBuf,

        /// Filter by status (draft, submitted, graded)
        #[arg(long, value_parser = parse_status)]
        status: Option<AssessmentStatus>,

        /// Filter by lab type (ML, AI, FSD, DS, ...)
        #[arg(long, value_parser = parse_lab_type)]
        lab: Option<LabType>,

        /// Search titles and student names
        #[arg(long)]
        search: Option<String>,
    },

    /// Summarize an assessment set: distribution, labs, criteria, students
    Report {
        /// Assessment set document
        file: PathBuf,

        /// Restrict the report to one lab type
        #[arg(long, value_parser = parse_lab_type)]
        lab: Option<LabType>,

        /// Only assessments active on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        since: Option<NaiveDate>,

        /// Only assessments active on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        until: Option<NaiveDate>,

        /// Trend bucket size (week, month)
        #[arg(long, value_parser = parse_period, default_value = "month")]
        period: TrendPeriod,
    },

    /// Print the active grade scale
    Grades,

    /// Show the active grading configuration
    Config {
        /// Write the default configuration to ./labgrade.toml
        #[arg(long)]
        init: bool,
    },
}
