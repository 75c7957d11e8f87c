//! `labgrade rubric show` - print a rubric

use super::describe_weights;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use labgrade_core::error::Result;
use labgrade_core::records::{escape_quotes, header, or_dash};
use labgrade_core::rubric::{self, Rubric};

/// Execute the rubric show command
pub fn execute(ctx: &CommandContext, reference: &str) -> Result<()> {
    let rubric = rubric::resolve(reference)?;

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rubric)?),
        OutputFormat::Human => output_human(&rubric),
        OutputFormat::Records => output_records(&rubric),
    }
    Ok(())
}

fn output_human(rubric: &Rubric) {
    println!("{} ({})", rubric.name, rubric.id);
    println!("Lab: {}  Kind: {}", rubric.lab_type, rubric.kind);
    if let Some(author) = &rubric.created_by {
        println!("Created by: {}  Used: {} times", author, rubric.usage_count);
    }
    if !rubric.description.is_empty() {
        println!("{}", rubric.description);
    }
    println!();

    for (index, criterion) in rubric.criteria.iter().enumerate() {
        println!(
            "{}. {} [{}]  weight {}  max {}",
            index + 1,
            criterion.name,
            criterion.id,
            criterion.weight,
            criterion.max_score
        );
        if !criterion.description.is_empty() {
            println!("   {}", criterion.description);
        }
        for level in &criterion.levels {
            println!("   - {} ({} pts)", level.name, level.points);
        }
    }

    println!();
    println!("Weights: {}", describe_weights(&rubric.weight_report()));
}

fn output_records(rubric: &Rubric) {
    println!(
        "{}",
        header(
            "rubric.show",
            &[
                ("rubric", rubric.id.to_string()),
                ("lab", rubric.lab_type.to_string()),
                ("kind", rubric.kind.to_string()),
                ("criteria", rubric.criteria.len().to_string()),
            ]
        )
    );
    println!(
        "R {} author={} uses={} \"{}\"",
        rubric.id,
        or_dash(rubric.created_by.as_deref()),
        rubric.usage_count,
        escape_quotes(&rubric.name)
    );
    for criterion in &rubric.criteria {
        println!(
            "C {} weight={} max={} levels={} \"{}\"",
            criterion.id,
            criterion.weight.percent(),
            criterion.max_score,
            criterion.levels.len(),
            escape_quotes(&criterion.name)
        );
        for level in &criterion.levels {
            println!(
                "L {} criterion={} points={} \"{}\"",
                level.id,
                criterion.id,
                level.points,
                escape_quotes(&level.name)
            );
        }
    }
}
