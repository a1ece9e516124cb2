//! Core module - placement model, grid rendering, crossing detection

pub mod crossing;
pub mod export;
pub mod grid;
pub mod identity;
pub mod loader;
pub mod placement;
pub mod report;

pub use crossing::{detect_crossings, detect_overlaps, Crossing, Overlap};
pub use export::{ExportError, WordRecord};
pub use grid::{Grid, GridError};
pub use identity::{IdParseError, WordId};
pub use placement::{Orientation, PlacementError, Puzzle, WordPlacement};
pub use report::CrossingReport;
