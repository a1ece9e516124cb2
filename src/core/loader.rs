//! Puzzle file loading
//!
//! Puzzle files are YAML by convention (`*.puzzle.yaml`); JSON is accepted
//! for files exported from other tooling.

use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::Path;

use crate::core::placement::Puzzle;

/// Suffixes recognized as puzzle files when expanding directories
pub const PUZZLE_SUFFIXES: &[&str] = &[".puzzle.yaml", ".puzzle.json"];

/// True when the path looks like a puzzle file
pub fn is_puzzle_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    PUZZLE_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Load a puzzle from a YAML or JSON file, keyed on extension
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let puzzle = if path.extension().map_or(false, |e| e == "json") {
        serde_json::from_str(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?
    } else {
        serde_yml::from_str(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?
    };

    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SAMPLE_YAML: &str = "\
title: Módulo 1
rows: 10
cols: 10
words:
  - number: 1
    orientation: horizontal
    clue: Universidad de París
    answer: SORBONA
    start_row: 1
    start_col: 1
    length: 7
";

    #[test]
    fn test_load_yaml_puzzle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modulo1.puzzle.yaml");
        fs::write(&path, SAMPLE_YAML).unwrap();

        let puzzle = load_puzzle(&path).unwrap();
        assert_eq!(puzzle.title, "Módulo 1");
        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.words[0].answer, "SORBONA");
    }

    #[test]
    fn test_load_json_puzzle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("modulo1.puzzle.json");
        fs::write(
            &path,
            r#"{"rows": 5, "cols": 5, "words": [{"number": 1, "orientation": "vertical", "answer": "RADIO", "start_row": 0, "start_col": 0, "length": 5}]}"#,
        )
        .unwrap();

        let puzzle = load_puzzle(&path).unwrap();
        assert_eq!(puzzle.rows, 5);
        assert_eq!(puzzle.words[0].orientation.to_string(), "vertical");
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_puzzle(Path::new("/nonexistent/x.puzzle.yaml")).is_err());
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.puzzle.yaml");
        fs::write(&path, ": not yaml at all {{{{").unwrap();
        assert!(load_puzzle(&path).is_err());
    }

    #[test]
    fn test_is_puzzle_file() {
        assert!(is_puzzle_file(&PathBuf::from("a/b/m1.puzzle.yaml")));
        assert!(is_puzzle_file(&PathBuf::from("m1.puzzle.json")));
        assert!(!is_puzzle_file(&PathBuf::from("m1.yaml")));
        assert!(!is_puzzle_file(&PathBuf::from("schema.sql")));
    }
}
