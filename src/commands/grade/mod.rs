//! `labgrade grade` command - aggregate scores for one submission
//!
//! Scores come from an optional grade sheet, then `--score ID=VALUE`
//! overrides. The rubric may be a document path or a built-in id.

mod format;

use std::path::Path;

use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use labgrade_core::document;
use labgrade_core::error::Result;
use labgrade_core::id::CriterionId;
use labgrade_core::rubric;
use labgrade_core::scoring::ScoringMode;
use labgrade_core::session::{GradeSheet, GradingSession, SessionContext, User};

use self::format::{output_human, output_json, output_records};

pub struct GradeOptions<'a> {
    pub rubric: &'a str,
    pub sheet: Option<&'a Path>,
    pub scores: &'a [(String, f64)],
    pub strict: bool,
    pub assessment: Option<&'a str>,
    pub comment: Option<&'a str>,
    pub output: Option<&'a Path>,
}

/// Execute the grade command
pub fn execute(ctx: &CommandContext, opts: GradeOptions) -> Result<()> {
    let rubric = rubric::resolve(opts.rubric)?;
    trace_command!(ctx.cli, ctx.start, "load_rubric");

    let (config, _) = ctx.config()?;
    let mut policy = config.policy()?;
    if opts.strict {
        policy = policy.with_mode(ScoringMode::Strict);
    }

    let session_ctx = SessionContext::login(User::faculty(config.grader.clone()));
    let mut session =
        GradingSession::open(&session_ctx, &rubric, opts.assessment.map(String::from))?;

    if let Some(path) = opts.sheet {
        let sheet = GradeSheet::load(path)?;
        session.apply_sheet(&sheet)?;
        trace_command!(ctx.cli, ctx.start, "apply_sheet");
    }

    for (id, value) in opts.scores {
        let id = CriterionId::new(id.as_str())?;
        session.set_score(&id, *value)?;
    }

    if let Some(comment) = opts.comment {
        session.feedback_mut().comment = comment.to_string();
    }

    let record = session.finish(&policy)?;
    session_ctx.logout();
    trace_command!(ctx.cli, ctx.start, "evaluate");

    if let Some(path) = opts.output {
        document::save(path, &record)?;
        info!(path = %path.display(), "saved grade record");
    }

    match ctx.cli.format {
        OutputFormat::Json => output_json(&record)?,
        OutputFormat::Human => output_human(ctx.cli, &rubric, &record, policy.mode, opts.output),
        OutputFormat::Records => output_records(&rubric, &record, policy.mode),
    }

    Ok(())
}
