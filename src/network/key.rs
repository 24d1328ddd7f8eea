use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier as it appears in the input: an integer or a string.
///
/// Used for edge ids, node ids and way ids. Integers order before strings so
/// that mixed inputs still sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Text(String),
}

impl Key {
    /// Interprets a raw table cell, preferring an integer reading.
    pub fn parse(cell: &str) -> Self {
        match cell.parse::<i64>() {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Text(cell.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}
