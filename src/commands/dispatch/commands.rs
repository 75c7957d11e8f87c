//! Command implementations for all labgrade commands

use crate::cli::{Commands, RubricCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{assessments, config, grade, grades, report, rubric};
use labgrade_core::assessment::AssessmentFilter;
use labgrade_core::error::Result;
use labgrade_core::rubric::RubricFilter;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Grade {
                rubric,
                sheet,
                scores,
                strict,
                assessment,
                comment,
                output,
            } => grade::execute(
                ctx,
                grade::GradeOptions {
                    rubric,
                    sheet: sheet.as_deref(),
                    scores,
                    strict: *strict,
                    assessment: assessment.as_deref(),
                    comment: comment.as_deref(),
                    output: output.as_deref(),
                },
            ),
            Commands::Rubric { command } => command.execute(ctx),
            Commands::Assessments {
                file,
                status,
                lab,
                search,
            } => {
                let filter = AssessmentFilter::new()
                    .with_search(search.as_deref())
                    .with_status(*status)
                    .with_lab_type(lab.as_ref());
                assessments::execute(ctx, file, &filter)
            }
            Commands::Report {
                file,
                lab,
                since,
                until,
                period,
            } => {
                let filter = AssessmentFilter::new()
                    .with_lab_type(lab.as_ref())
                    .with_date_range(*since, *until);
                report::execute(ctx, file, &filter, *period)
            }
            Commands::Grades => grades::execute(ctx),
            Commands::Config { init } => config::execute(ctx, *init),
        }
    }
}

impl Command for RubricCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            RubricCommands::New {
                name,
                lab_type,
                description,
                criteria,
                output,
                force,
            } => rubric::new::execute(
                ctx,
                rubric::new::NewOptions {
                    name,
                    lab_type: lab_type.clone(),
                    description: description.as_deref(),
                    criteria,
                    output: output.as_deref(),
                    force: *force,
                },
            ),
            RubricCommands::Check {
                rubric: reference,
                deny_invalid,
            } => rubric::check::execute(ctx, reference, *deny_invalid),
            RubricCommands::Show { rubric: reference } => rubric::show::execute(ctx, reference),
            RubricCommands::List {
                dir,
                lab,
                search,
                kind,
            } => {
                let filter = RubricFilter::new()
                    .with_search(search.as_deref())
                    .with_lab_type(lab.as_ref())
                    .with_kind(kind.map(Into::into));
                rubric::list::execute(ctx, dir.as_deref(), &filter)
            }
        }
    }
}
