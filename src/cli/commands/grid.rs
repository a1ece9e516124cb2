//! `cwv grid` command - Render a puzzle's letter grid

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::grid::Grid;
use crate::core::loader::load_puzzle;

#[derive(clap::Args, Debug)]
pub struct GridArgs {
    /// Puzzle file to render
    pub file: PathBuf,

    /// Override the puzzle's row count
    #[arg(long)]
    pub rows: Option<usize>,

    /// Override the puzzle's column count
    #[arg(long)]
    pub cols: Option<usize>,

    /// Shrink-wrap the grid to the occupied bounding box
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    pub fit: bool,
}

pub fn run(args: GridArgs, global: &GlobalOpts) -> Result<()> {
    let puzzle = load_puzzle(&args.file)?;
    puzzle.validate().into_diagnostic()?;

    let (rows, cols) = if args.fit {
        Grid::fit_dimensions(&puzzle.words)
    } else {
        (
            args.rows.unwrap_or(puzzle.rows),
            args.cols.unwrap_or(puzzle.cols),
        )
    };

    let grid = Grid::render(rows, cols, &puzzle.words).into_diagnostic()?;

    if !global.quiet && !puzzle.title.is_empty() {
        println!("{} ({}x{})\n", style(&puzzle.title).bold(), rows, cols);
    }
    print!("{}", grid);

    Ok(())
}
