//! Seed-record export for the crossword words table
//!
//! A validated placement list becomes a flat record set that downstream
//! tooling loads into a relational store. Column names here are a seeding
//! convenience, not a wire contract.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::identity::WordId;
use crate::core::placement::{Orientation, WordPlacement};

/// Table the SQL and SQLite sinks target
pub const WORDS_TABLE: &str = "crossword_words";

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS crossword_words (
    id         TEXT PRIMARY KEY,
    number     INTEGER NOT NULL,
    orientation TEXT NOT NULL,
    clue       TEXT NOT NULL,
    answer     TEXT NOT NULL,
    start_row  INTEGER NOT NULL,
    start_col  INTEGER NOT NULL,
    length     INTEGER NOT NULL
);
";

/// One row destined for the crossword words table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub number: u32,
    pub orientation: Orientation,
    pub clue: String,
    pub answer: String,
    pub start_row: i32,
    pub start_col: i32,
    pub length: usize,
}

impl WordRecord {
    /// Build a record from a placement, generating an id when the file
    /// omitted one.
    pub fn from_placement(placement: &WordPlacement) -> Self {
        let id = if placement.id.is_empty() {
            WordId::new().to_string()
        } else {
            placement.id.clone()
        };

        Self {
            id,
            number: placement.number,
            orientation: placement.orientation,
            clue: placement.clue.clone(),
            answer: placement.answer.clone(),
            start_row: placement.start_row,
            start_col: placement.start_col,
            length: placement.length,
        }
    }
}

/// Convert a placement list to records, in input order
pub fn to_records(placements: &[WordPlacement]) -> Vec<WordRecord> {
    placements.iter().map(WordRecord::from_placement).collect()
}

/// Errors raised while encoding or loading records
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// Serialize records as a pretty-printed JSON array
pub fn to_json(records: &[WordRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize records as CSV with a header row
pub fn to_csv(records: &[WordRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Serialize records as SQL statements seeding the crossword words table
pub fn to_sql(records: &[WordRecord]) -> String {
    let mut out = String::from(CREATE_TABLE_SQL);
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "INSERT INTO {} (id, number, orientation, clue, answer, start_row, start_col, length) VALUES ('{}', {}, '{}', '{}', '{}', {}, {}, {});\n",
            WORDS_TABLE,
            sql_escape(&r.id),
            r.number,
            r.orientation,
            sql_escape(&r.clue),
            sql_escape(&r.answer),
            r.start_row,
            r.start_col,
            r.length,
        ));
    }

    out
}

fn sql_escape(s: &str) -> String {
    s.replace('\'', "''")
}

/// Load records into a SQLite database, creating the table if absent.
///
/// Rows are keyed on id; re-loading the same records replaces them.
pub fn load_sqlite(conn: &Connection, records: &[WordRecord]) -> Result<usize, ExportError> {
    conn.execute_batch(CREATE_TABLE_SQL)?;

    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO crossword_words \
         (id, number, orientation, clue, answer, start_row, start_col, length) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    for r in records {
        stmt.execute(params![
            r.id,
            r.number,
            r.orientation.to_string(),
            r.clue,
            r.answer,
            r.start_row,
            r.start_col,
            r.length as i64,
        ])?;
    }

    Ok(records.len())
}
