//! Edge Loader: parses an edge table into a validated [`EdgeSet`].
//!
//! Two table formats are understood, line-delimited JSON and tab-separated
//! values with a header row. Both go through the same serde model, so the
//! column aliases declared on [`Edge`] apply to either format.

use crate::error::LoadError;
use crate::network::{Edge, EdgeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

mod tsv;

/// The on-disk layout of an edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    JsonLines,
    Tsv,
}

impl InputFormat {
    /// Picks TSV when forced or when the path ends in `.tsv` (any case).
    pub fn detect(path: &Path, force_tsv: bool) -> Self {
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        if force_tsv || is_tsv {
            InputFormat::Tsv
        } else {
            InputFormat::JsonLines
        }
    }
}

/// Loads and validates the edge table stored at `path`.
pub fn load_path(path: &Path, format: InputFormat) -> Result<EdgeSet, LoadError> {
    info!("Loading edges from {}", path.display());
    let file = File::open(path)?;
    load_reader(BufReader::new(file), format)
}

/// Loads and validates an edge table from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R, format: InputFormat) -> Result<EdgeSet, LoadError> {
    let edges = match format {
        InputFormat::JsonLines => parse_json_lines(reader)?,
        InputFormat::Tsv => tsv::parse(reader)?,
    };
    let edge_set = EdgeSet::new(edges)?;
    info!("Loaded\t\t{:>8} edges", edge_set.len());
    Ok(edge_set)
}

fn parse_json_lines<R: BufRead>(reader: R) -> Result<Vec<Edge>, LoadError> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let edge = serde_json::from_str::<Edge>(&line).map_err(|e| LoadError::MalformedRecord {
            line: index + 1,
            message: e.to_string(),
        })?;
        edges.push(edge);
    }
    Ok(edges)
}
