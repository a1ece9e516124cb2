//! Crossing report - partitioned crossings plus summary counts
//!
//! The report is plain data. Rendering it to styled text is the CLI's
//! concern; the core never touches the terminal.

use serde::Serialize;

use crate::core::crossing::{detect_crossings, detect_overlaps, Crossing, Overlap};
use crate::core::placement::WordPlacement;

/// Result of a crossing run over one placement set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossingReport {
    /// Every crossing found, in pair order
    pub crossings: Vec<Crossing>,

    /// Same-orientation shared cells (rejected, see [`Overlap`])
    pub overlaps: Vec<Overlap>,

    pub valid_count: usize,
    pub conflict_count: usize,

    /// True when no crossing conflicts and no overlaps exist
    pub is_valid: bool,
}

impl CrossingReport {
    /// Run crossing and overlap detection and summarize the result.
    ///
    /// Pure and deterministic: identical input always yields an identical
    /// report, so re-running is always safe and never useful.
    pub fn build(placements: &[WordPlacement]) -> Self {
        let crossings = detect_crossings(placements);
        let overlaps = detect_overlaps(placements);
        let conflict_count = crossings.iter().filter(|c| !c.valid).count();
        let valid_count = crossings.len() - conflict_count;
        let is_valid = conflict_count == 0 && overlaps.is_empty();

        Self {
            crossings,
            overlaps,
            valid_count,
            conflict_count,
            is_valid,
        }
    }

    /// Crossings where both placements agree on the letter
    pub fn valid_crossings(&self) -> impl Iterator<Item = &Crossing> {
        self.crossings.iter().filter(|c| c.valid)
    }

    /// Crossings where the placements disagree
    pub fn conflicts(&self) -> impl Iterator<Item = &Crossing> {
        self.crossings.iter().filter(|c| !c.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::placement::Orientation;

    fn placement(answer: &str, orientation: Orientation, row: i32, col: i32) -> WordPlacement {
        WordPlacement {
            id: String::new(),
            number: 1,
            orientation,
            clue: String::new(),
            answer: answer.to_string(),
            start_row: row,
            start_col: col,
            length: answer.chars().count(),
        }
    }

    #[test]
    fn test_no_cross_orientation_pairs_is_valid() {
        let words = vec![
            placement("SORBONA", Orientation::Horizontal, 1, 1),
            placement("RADIO", Orientation::Horizontal, 4, 0),
        ];
        let report = CrossingReport::build(&words);
        assert!(report.crossings.is_empty());
        // the two horizontals don't share cells either
        assert!(report.overlaps.is_empty());
        assert!(report.is_valid);
    }

    #[test]
    fn test_conflict_makes_report_invalid() {
        let words = vec![
            placement("SORBONA", Orientation::Horizontal, 1, 1),
            placement("PAN", Orientation::Vertical, 1, 2),
        ];
        let report = CrossingReport::build(&words);
        assert_eq!(report.valid_count, 0);
        assert_eq!(report.conflict_count, 1);
        assert!(!report.is_valid);
        assert_eq!(report.conflicts().count(), 1);
    }

    #[test]
    fn test_valid_crossing_counts() {
        let words = vec![
            placement("RADIOACTIVIDAD", Orientation::Horizontal, 4, 0),
            placement("RADIO", Orientation::Vertical, 4, 0),
        ];
        let report = CrossingReport::build(&words);
        assert_eq!(report.valid_count, 1);
        assert_eq!(report.conflict_count, 0);
        assert!(report.is_valid);
        assert_eq!(report.valid_crossings().count(), 1);
    }

    #[test]
    fn test_overlap_makes_report_invalid() {
        let words = vec![
            placement("RADIOACTIVIDAD", Orientation::Horizontal, 4, 0),
            placement("RADIO", Orientation::Horizontal, 4, 0),
        ];
        let report = CrossingReport::build(&words);
        assert_eq!(report.conflict_count, 0);
        assert!(!report.overlaps.is_empty());
        assert!(!report.is_valid);
    }

    #[test]
    fn test_build_is_idempotent() {
        let words = vec![
            placement("SORBONA", Orientation::Horizontal, 1, 1),
            placement("RADIO", Orientation::Vertical, 0, 3),
        ];
        assert_eq!(CrossingReport::build(&words), CrossingReport::build(&words));
    }
}
