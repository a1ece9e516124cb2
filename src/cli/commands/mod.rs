//! CLI command implementations

pub mod check;
pub mod completions;
pub mod crossings;
pub mod export;
pub mod grid;
pub mod words;
