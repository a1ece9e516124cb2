//! Crossing and overlap detection over a placement list
//!
//! Both detectors are pure functions of their input: nested loops over
//! index pairs, intersecting occupied-cell lists. Inputs are tens of words
//! of tens of letters, so the O(P²·L²) scan needs no spatial index.

use serde::Serialize;

use crate::core::placement::WordPlacement;

/// A cell shared by one horizontal and one vertical placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crossing {
    /// Input-order index of the first placement
    pub a_index: usize,
    /// Input-order index of the second placement
    pub b_index: usize,
    pub a_id: String,
    pub b_id: String,
    pub row: i32,
    pub col: i32,
    /// Letter the first placement contributes at the shared cell
    pub letter_a: char,
    /// Letter the second placement contributes at the shared cell
    pub letter_b: char,
    /// True when both placements agree on the letter
    pub valid: bool,
}

/// A cell shared by two placements of the *same* orientation
///
/// The source data format never meant two parallel words to share a cell,
/// so overlaps are reported as errors rather than crossings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub a_index: usize,
    pub b_index: usize,
    pub a_id: String,
    pub b_id: String,
    pub row: i32,
    pub col: i32,
    pub letter_a: char,
    pub letter_b: char,
}

/// Enumerate every cell where a horizontal and a vertical placement cross.
///
/// Pairs of the same orientation are skipped; see [`detect_overlaps`].
/// Two lines of differing orientation intersect in at most one cell, so
/// each pair contributes at most one record.
pub fn detect_crossings(placements: &[WordPlacement]) -> Vec<Crossing> {
    let mut crossings = Vec::new();

    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let (a, b) = (&placements[i], &placements[j]);
            if a.orientation == b.orientation {
                continue;
            }
            for (row_a, col_a, letter_a) in a.cells() {
                for (row_b, col_b, letter_b) in b.cells() {
                    if row_a == row_b && col_a == col_b {
                        crossings.push(Crossing {
                            a_index: i,
                            b_index: j,
                            a_id: a.label(),
                            b_id: b.label(),
                            row: row_a,
                            col: col_a,
                            letter_a,
                            letter_b,
                            valid: letter_a == letter_b,
                        });
                    }
                }
            }
        }
    }

    crossings
}

/// Enumerate cells shared by two placements of the same orientation
pub fn detect_overlaps(placements: &[WordPlacement]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let (a, b) = (&placements[i], &placements[j]);
            if a.orientation != b.orientation {
                continue;
            }
            for (row_a, col_a, letter_a) in a.cells() {
                for (row_b, col_b, letter_b) in b.cells() {
                    if row_a == row_b && col_a == col_b {
                        overlaps.push(Overlap {
                            a_index: i,
                            b_index: j,
                            a_id: a.label(),
                            b_id: b.label(),
                            row: row_a,
                            col: col_a,
                            letter_a,
                            letter_b,
                        });
                    }
                }
            }
        }
    }

    overlaps
}
