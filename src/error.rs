use crate::network::{Edge, Key};
use itertools::Itertools;
use thiserror::Error;

/// Errors that can occur while loading the input edge table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Duplicate edge IDs: {}\n{}", .ids.iter().join(", "), render_records(.records))]
    DuplicateIdentifier { ids: Vec<Key>, records: Vec<Edge> },

    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Failed to read edge table: {0}")]
    Io(#[from] std::io::Error),
}

/// Internal invariant failures raised while walking successor links.
///
/// A validated edge set never produces these; seeing one means the link
/// table was built from input that bypassed the loader.
#[derive(Error, Debug, Clone)]
pub enum TraversalError {
    #[error("Chain starting at segment {colour} did not terminate after {steps} steps")]
    UnterminatedChain { colour: String, steps: usize },
}

/// Errors that can occur while writing simplified output or audit files.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Any failure of the end-to-end simplification pipeline.
#[derive(Error, Debug)]
pub enum JunctionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// One JSON line per record, for error messages that carry input rows.
fn render_records(records: &[Edge]) -> String {
    records
        .iter()
        .map(|e| serde_json::to_string(e).unwrap_or_else(|_| format!("{:?}", e)))
        .join("\n")
}
