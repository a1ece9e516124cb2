//! Word record identity - "WORD-" prefixed ULIDs
//!
//! Hand-written puzzle files usually omit ids; export generates one per
//! word so downstream rows stay addressable and sortable by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Prefix for generated word record ids
pub const WORD_PREFIX: &str = "WORD";

/// A unique word record identifier: `WORD-<ULID>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordId {
    ulid: Ulid,
}

impl WordId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self { ulid: Ulid::new() }
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.ulid
    }

    /// Parse a WordId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", WORD_PREFIX, self.ulid)
    }
}

impl FromStr for WordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        if prefix != WORD_PREFIX {
            return Err(IdParseError::InvalidPrefix(prefix.to_string()));
        }

        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self { ulid })
    }
}

impl Serialize for WordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing word ids
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid id prefix: '{0}' (expected WORD)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in word id: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_generation() {
        let id = WordId::new();
        assert!(id.to_string().starts_with("WORD-"));
        assert_eq!(id.to_string().len(), 31); // WORD- (5) + ULID (26)
    }

    #[test]
    fn test_word_id_roundtrip() {
        let original = WordId::new();
        let parsed = WordId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_word_id_invalid_prefix() {
        let err = WordId::parse("REQ-01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidPrefix(_)));
    }

    #[test]
    fn test_word_id_missing_delimiter() {
        let err = WordId::parse("WORD01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::MissingDelimiter(_)));
    }

    #[test]
    fn test_word_id_invalid_ulid() {
        let err = WordId::parse("WORD-notaulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid(_, _)));
    }
}
