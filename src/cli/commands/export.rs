//! `cwv export` command - Export word records for database seeding

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use rusqlite::Connection;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::export::{load_sqlite, to_csv, to_json, to_records, to_sql};
use crate::core::loader::load_puzzle;
use crate::core::report::CrossingReport;

/// Sink formats for exported records
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Sql,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Puzzle file to export
    pub file: PathBuf,

    /// Output format written to stdout
    #[arg(long, short = 't', value_enum, default_value = "json")]
    pub to: ExportFormat,

    /// Load records into this SQLite database instead of printing
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Export even when the puzzle has conflicting crossings
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let puzzle = load_puzzle(&args.file)?;
    puzzle.validate().into_diagnostic()?;

    // Don't seed a store from a broken puzzle unless explicitly forced
    let report = CrossingReport::build(&puzzle.words);
    if !report.is_valid && !args.force {
        return Err(miette::miette!(
            "refusing to export: {} conflicting crossing(s), {} overlap(s) (use --force to export anyway)",
            report.conflict_count,
            report.overlaps.len()
        ));
    }

    let records = to_records(&puzzle.words);

    if let Some(db_path) = &args.db {
        let conn = Connection::open(db_path).into_diagnostic()?;
        let loaded = load_sqlite(&conn, &records).into_diagnostic()?;
        if !global.quiet {
            println!(
                "{} Loaded {} word(s) into {}",
                style("✓").green(),
                loaded,
                db_path.display()
            );
        }
        return Ok(());
    }

    match args.to {
        ExportFormat::Json => println!("{}", to_json(&records).into_diagnostic()?),
        ExportFormat::Csv => print!("{}", to_csv(&records).into_diagnostic()?),
        ExportFormat::Sql => print!("{}", to_sql(&records)),
    }

    Ok(())
}
