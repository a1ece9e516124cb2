//! CWV: Crossword Word Validator
//!
//! A small toolkit for checking crossword word placements: renders the
//! placed words into a 2-D letter grid, finds every cell where a horizontal
//! and a vertical word cross, classifies each crossing as consistent or
//! conflicting, and exports the word list as seed records for a relational
//! crossword words table.

pub mod cli;
pub mod core;
