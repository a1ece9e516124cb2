//! `cwv words` command - List words with clues, ordered by clue number

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::load_puzzle;
use crate::core::placement::WordPlacement;

#[derive(clap::Args, Debug)]
pub struct WordsArgs {
    /// Puzzle file to list
    pub file: PathBuf,
}

pub fn run(args: WordsArgs, global: &GlobalOpts) -> Result<()> {
    let puzzle = load_puzzle(&args.file)?;

    let mut words: Vec<WordPlacement> = puzzle.words.clone();
    words.sort_by_key(|w| w.number);

    match global.format.resolve() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words).into_diagnostic()?);
        }
        OutputFormat::Tsv => {
            for w in &words {
                println!(
                    "{}\t{}\t{}\t({}, {})\t{}",
                    w.number, w.orientation, w.answer, w.start_row, w.start_col, w.clue
                );
            }
        }
        OutputFormat::Csv => {
            println!("number,orientation,answer,start_row,start_col,clue");
            for w in &words {
                println!(
                    "{},{},{},{},{},{}",
                    w.number,
                    w.orientation,
                    escape_csv(&w.answer),
                    w.start_row,
                    w.start_col,
                    escape_csv(&w.clue)
                );
            }
        }
        _ => {
            let mut builder = Builder::default();
            builder.push_record(["Num", "Direction", "Answer", "Start", "Clue"]);
            for w in &words {
                builder.push_record([
                    w.number.to_string(),
                    w.orientation.to_string(),
                    w.answer.clone(),
                    format!("({}, {})", w.start_row, w.start_col),
                    truncate_str(&w.clue, 50),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
            if !global.quiet {
                println!("\n{} word(s)", words.len());
            }
        }
    }

    Ok(())
}
