//! `cwv crossings` command - List crossings between horizontal and vertical words

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::load_puzzle;
use crate::core::report::CrossingReport;

#[derive(clap::Args, Debug)]
pub struct CrossingsArgs {
    /// Puzzle file to analyze
    pub file: PathBuf,
}

pub fn run(args: CrossingsArgs, global: &GlobalOpts) -> Result<()> {
    let puzzle = load_puzzle(&args.file)?;
    puzzle.validate().into_diagnostic()?;

    let report = CrossingReport::build(&puzzle.words);

    match global.format.resolve() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).into_diagnostic()?
            );
            return Ok(());
        }
        OutputFormat::Tsv => {
            for c in &report.crossings {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    c.a_id,
                    c.b_id,
                    c.row,
                    c.col,
                    c.letter_a,
                    c.letter_b,
                    if c.valid { "valid" } else { "conflict" }
                );
            }
            return Ok(());
        }
        OutputFormat::Csv => {
            println!("a_id,b_id,row,col,letter_a,letter_b,status");
            for c in &report.crossings {
                println!(
                    "{},{},{},{},{},{},{}",
                    escape_csv(&c.a_id),
                    escape_csv(&c.b_id),
                    c.row,
                    c.col,
                    c.letter_a,
                    c.letter_b,
                    if c.valid { "valid" } else { "conflict" }
                );
            }
            return Ok(());
        }
        _ => {}
    }

    // Table output
    if report.crossings.is_empty() {
        println!("No crossings found.");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Word A", "Word B", "Cell", "Letters", "Status"]);
        for c in &report.crossings {
            builder.push_record([
                c.a_id.clone(),
                c.b_id.clone(),
                format!("({}, {})", c.row, c.col),
                format!("{} / {}", c.letter_a, c.letter_b),
                if c.valid {
                    "valid".to_string()
                } else {
                    "CONFLICT".to_string()
                },
            ]);
        }
        println!("{}", builder.build().with(Style::markdown()));
    }

    if !report.overlaps.is_empty() {
        println!();
        println!(
            "{} {} same-direction overlap(s):",
            style("!").red(),
            report.overlaps.len()
        );
        for o in &report.overlaps {
            println!(
                "  '{}' and '{}' share ({}, {})",
                o.a_id, o.b_id, o.row, o.col
            );
        }
    }

    if !global.quiet {
        println!();
        let status = if report.is_valid {
            style("valid").green().to_string()
        } else {
            style("invalid").red().to_string()
        };
        println!(
            "{} crossing(s): {} valid, {} conflicting - puzzle is {}",
            report.crossings.len(),
            report.valid_count,
            report.conflict_count,
            status
        );
    }

    Ok(())
}
