//! Word placement model and per-placement validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reading direction of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

/// A single word placement: answer text, orientation, and start coordinate
///
/// Coordinates are zero-based. Negative values deserialize fine but are
/// rejected by bounds checking once a grid is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    /// Identifier; may be empty in hand-written files (export generates one)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Display ordering for clue lists
    pub number: u32,

    /// Reading direction
    pub orientation: Orientation,

    /// Clue text shown to the player
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub clue: String,

    /// Answer letters, uppercase, no spaces
    pub answer: String,

    /// Row of the first letter
    pub start_row: i32,

    /// Column of the first letter
    pub start_col: i32,

    /// Redundant with the answer length; must agree
    pub length: usize,
}

impl WordPlacement {
    /// Identifier used in error messages; falls back to the clue number
    /// when the file omits an id.
    pub fn label(&self) -> String {
        if self.id.is_empty() {
            format!("#{}", self.number)
        } else {
            self.id.clone()
        }
    }

    /// Check that the answer is well-formed and the length field agrees
    /// with it. This must pass before any grid is built.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.answer.is_empty() {
            return Err(PlacementError::EmptyAnswer { id: self.label() });
        }

        if let Some((pos, ch)) = self
            .answer
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(PlacementError::NonLetter {
                id: self.label(),
                answer: self.answer.clone(),
                ch,
                pos,
            });
        }

        let actual = self.answer.chars().count();
        if self.length != actual {
            return Err(PlacementError::LengthMismatch {
                id: self.label(),
                answer: self.answer.clone(),
                declared: self.length,
                actual,
            });
        }

        Ok(())
    }

    /// Cells this placement occupies, as `(row, col, letter)` in answer order
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        let (row, col) = (self.start_row, self.start_col);
        let orientation = self.orientation;
        self.answer.chars().enumerate().map(move |(k, ch)| {
            let k = k as i32;
            match orientation {
                Orientation::Horizontal => (row, col + k, ch),
                Orientation::Vertical => (row + k, col, ch),
            }
        })
    }
}

/// A puzzle file: grid dimensions plus the placed word list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Puzzle title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Grid height
    pub rows: usize,

    /// Grid width
    pub cols: usize,

    /// Placed words, in input order
    #[serde(default)]
    pub words: Vec<WordPlacement>,
}

impl Puzzle {
    /// Validate every placement. All-or-nothing: the first malformed
    /// placement aborts, since partial results are not meaningful here.
    pub fn validate(&self) -> Result<(), PlacementError> {
        for word in &self.words {
            word.validate()?;
        }
        Ok(())
    }
}

/// Errors for malformed placements
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("placement '{id}': answer is empty")]
    EmptyAnswer { id: String },

    #[error("placement '{id}': answer '{answer}' has non-letter character '{ch}' at position {pos} (answers must be uppercase A-Z)")]
    NonLetter {
        id: String,
        answer: String,
        ch: char,
        pos: usize,
    },

    #[error("placement '{id}': length field says {declared} but answer '{answer}' has {actual} letters")]
    LengthMismatch {
        id: String,
        answer: String,
        declared: usize,
        actual: usize,
    },
}
