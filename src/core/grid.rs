//! Grid rendering - placements written into a fixed-size letter grid

use thiserror::Error;

use crate::core::placement::WordPlacement;

/// Glyph used for blank cells when the grid is printed
pub const FILLER: char = '·';

/// Errors raised while rendering placements into a grid
#[derive(Debug, Error)]
pub enum GridError {
    #[error("placement '{id}': cell ({row}, {col}) falls outside the {rows}x{cols} grid")]
    OutOfBounds {
        id: String,
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

/// A fixed-size 2-D character grid
///
/// Built fresh from a placement list; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Render placements into a `rows x cols` grid.
    ///
    /// Later placements overwrite earlier ones at shared cells. Disagreeing
    /// letters are the crossing detector's job, not the renderer's; the only
    /// hard failure here is a cell outside the grid.
    pub fn render(
        rows: usize,
        cols: usize,
        placements: &[WordPlacement],
    ) -> Result<Self, GridError> {
        let mut cells = vec![None; rows * cols];

        for placement in placements {
            for (row, col, letter) in placement.cells() {
                if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
                    return Err(GridError::OutOfBounds {
                        id: placement.label(),
                        row,
                        col,
                        rows,
                        cols,
                    });
                }
                cells[row as usize * cols + col as usize] = Some(letter);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Smallest `(rows, cols)` that contains every occupied cell.
    ///
    /// Negative coordinates contribute nothing here; rendering with the
    /// returned dimensions still reports them as out of bounds.
    pub fn fit_dimensions(placements: &[WordPlacement]) -> (usize, usize) {
        let mut rows = 0usize;
        let mut cols = 0usize;
        for placement in placements {
            for (row, col, _) in placement.cells() {
                if row >= 0 {
                    rows = rows.max(row as usize + 1);
                }
                if col >= 0 {
                    cols = cols.max(col as usize + 1);
                }
            }
        }
        (rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Letter at `(row, col)`, or None for a blank cell
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row * self.cols + col).copied().flatten()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).unwrap_or(FILLER))?;
            }
            writeln!(f)?;
        }
        Ok(())
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
    fn test_render_places_letters() {
        let words = vec![placement("SOL", Orientation::Horizontal, 1, 2)];
        let grid = Grid::render(3, 6, &words).unwrap();
        assert_eq!(grid.get(1, 2), Some('S'));
        assert_eq!(grid.get(1, 3), Some('O'));
        assert_eq!(grid.get(1, 4), Some('L'));
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_later_placement_overwrites() {
        let words = vec![
            placement("AAA", Orientation::Horizontal, 0, 0),
            placement("B", Orientation::Vertical, 0, 1),
        ];
        let grid = Grid::render(2, 3, &words).unwrap();
        assert_eq!(grid.get(0, 1), Some('B'));
    }

    #[test]
    fn test_out_of_bounds_right_edge() {
        let words = vec![placement("RADIO", Orientation::Horizontal, 0, 3)];
        let err = Grid::render(5, 5, &words).unwrap_err();
        match err {
            GridError::OutOfBounds { row, col, .. } => {
                assert_eq!((row, col), (0, 5));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_negative_start() {
        let words = vec![placement("RADIO", Orientation::Vertical, -1, 0)];
        let err = Grid::render(10, 10, &words).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { row: -1, col: 0, .. }));
    }

    #[test]
    fn test_display_uses_filler() {
        let words = vec![placement("SI", Orientation::Horizontal, 0, 0)];
        let grid = Grid::render(1, 3, &words).unwrap();
        assert_eq!(grid.to_string(), "S I ·\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let words = vec![
            placement("SORBONA", Orientation::Horizontal, 1, 1),
            placement("RADIO", Orientation::Vertical, 0, 3),
        ];
        let first = Grid::render(8, 8, &words).unwrap();
        let second = Grid::render(8, 8, &words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_dimensions() {
        let words = vec![
            placement("SORBONA", Orientation::Horizontal, 1, 1),
            placement("RADIO", Orientation::Vertical, 4, 0),
        ];
        // SORBONA ends at col 7, RADIO ends at row 8
        assert_eq!(Grid::fit_dimensions(&words), (9, 8));
    }

    #[test]
    fn test_fit_dimensions_empty() {
        assert_eq!(Grid::fit_dimensions(&[]), (0, 0));
    }
}
