//! `cwv check` command - Validate puzzle files

use console::style;
use miette::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::cli::GlobalOpts;
use crate::core::grid::Grid;
use crate::core::loader::{is_puzzle_file, load_puzzle};
use crate::core::report::CrossingReport;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Puzzle files or directories to check (default: current directory)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Continue checking after the first failing file
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual findings
    #[arg(long)]
    pub summary: bool,

    /// Report letter conflicts as warnings instead of errors
    #[arg(long)]
    pub allow_conflicts: bool,
}

/// Check statistics
#[derive(Default)]
struct CheckStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    total_conflicts: usize,
    total_overlaps: usize,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let files = expand_paths(&args.paths);

    if files.is_empty() {
        return Err(miette::miette!("no puzzle files found (expected *.puzzle.yaml or *.puzzle.json)"));
    }

    let mut stats = CheckStats::default();
    let mut had_error = false;

    if !global.quiet {
        println!(
            "{} Checking {} puzzle file(s)...\n",
            style("→").blue(),
            files.len()
        );
    }

    for path in &files {
        stats.files_checked += 1;

        let mut findings: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        match check_one(path, args.allow_conflicts, &mut findings, &mut warnings, &mut stats) {
            Ok(()) if findings.is_empty() => {
                stats.files_passed += 1;
                if !args.summary && !global.quiet {
                    if warnings.is_empty() {
                        println!("{} {}", style("✓").green(), path.display());
                    } else {
                        println!(
                            "{} {} - {} warning(s)",
                            style("!").yellow(),
                            path.display(),
                            warnings.len()
                        );
                        for warning in &warnings {
                            println!("    {}", style(warning).yellow());
                        }
                    }
                }
            }
            Ok(()) => {
                stats.files_failed += 1;
                had_error = true;
                if !args.summary {
                    println!(
                        "{} {} - {} problem(s)",
                        style("✗").red(),
                        path.display(),
                        findings.len()
                    );
                    for finding in &findings {
                        println!("    {}", style(finding).red());
                    }
                    for warning in &warnings {
                        println!("    {}", style(warning).yellow());
                    }
                }
                if !args.keep_going {
                    break;
                }
            }
            Err(e) => {
                stats.files_failed += 1;
                had_error = true;
                if !args.summary {
                    println!("{} {} - {:?}", style("✗").red(), path.display(), e);
                }
                if !args.keep_going {
                    break;
                }
            }
        }
    }

    // Summary block
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Check Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    if stats.total_conflicts > 0 {
        println!("  Conflicts:      {}", style(stats.total_conflicts).red());
    }
    if stats.total_overlaps > 0 {
        println!("  Overlaps:       {}", style(stats.total_overlaps).red());
    }
    println!();

    if had_error {
        if stats.files_failed == 1 {
            Err(miette::miette!("check failed: 1 file has problems"))
        } else {
            Err(miette::miette!(
                "check failed: {} files have problems",
                stats.files_failed
            ))
        }
    } else {
        println!("{} All puzzle files passed!", style("✓").green().bold());
        Ok(())
    }
}

/// Check one puzzle file, pushing human-readable findings.
///
/// Malformed placements and out-of-bounds cells abort the file before any
/// crossing analysis runs; conflicts and overlaps are collected from the
/// report afterwards.
fn check_one(
    path: &PathBuf,
    allow_conflicts: bool,
    findings: &mut Vec<String>,
    warnings: &mut Vec<String>,
    stats: &mut CheckStats,
) -> Result<()> {
    let puzzle = load_puzzle(path)?;

    // All-or-nothing: a malformed placement means no grid is built at all
    if let Err(e) = puzzle.validate() {
        findings.push(e.to_string());
        return Ok(());
    }

    if let Err(e) = Grid::render(puzzle.rows, puzzle.cols, &puzzle.words) {
        findings.push(e.to_string());
        return Ok(());
    }

    let report = CrossingReport::build(&puzzle.words);

    for crossing in report.conflicts() {
        stats.total_conflicts += 1;
        let line = format!(
            "conflict at ({}, {}): '{}' has '{}' but '{}' has '{}'",
            crossing.row,
            crossing.col,
            crossing.a_id,
            crossing.letter_a,
            crossing.b_id,
            crossing.letter_b
        );
        if allow_conflicts {
            warnings.push(line);
        } else {
            findings.push(line);
        }
    }

    for overlap in &report.overlaps {
        stats.total_overlaps += 1;
        findings.push(format!(
            "overlap at ({}, {}): '{}' and '{}' share a cell but run the same direction",
            overlap.row, overlap.col, overlap.a_id, overlap.b_id
        ));
    }

    Ok(())
}

/// Expand paths - directories are walked for puzzle files
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let defaults = [PathBuf::from(".")];
    let roots: &[PathBuf] = if paths.is_empty() { &defaults } else { paths };

    for path in roots {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if is_puzzle_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        }
    }

    files.sort();
    files
}
