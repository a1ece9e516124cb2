//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    check::CheckArgs, completions::CompletionsArgs, crossings::CrossingsArgs,
    export::ExportArgs, grid::GridArgs, words::WordsArgs,
};

#[derive(Parser)]
#[command(name = "cwv")]
#[command(author, version, about = "Crossword word placement validator")]
#[command(
    long_about = "Validates crossword word placements: renders the letter grid, detects conflicting crossings between horizontal and vertical words, and exports word records for database seeding."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format for list commands
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate puzzle files (placements, bounds, crossings)
    Check(CheckArgs),

    /// Render a puzzle's letter grid
    Grid(GridArgs),

    /// List crossings between horizontal and vertical words
    Crossings(CrossingsArgs),

    /// List words with clues, ordered by clue number
    Words(WordsArgs),

    /// Export word records for database seeding
    Export(ExportArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table output (default)
    #[default]
    Auto,
    /// Markdown-style table
    Table,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// JSON format (for programming)
    Json,
}

impl OutputFormat {
    /// Resolve `auto` to a concrete format
    pub fn resolve(self) -> OutputFormat {
        match self {
            OutputFormat::Auto => OutputFormat::Table,
            other => other,
        }
    }
}
