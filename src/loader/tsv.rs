use crate::error::LoadError;
use crate::network::Edge;
use serde_json::{Map, Number, Value};
use std::io::BufRead;

/// Parses a tab-separated table whose first row names the columns.
///
/// Each row is turned into a JSON object and handed to the same serde model
/// the JSON Lines path uses, so aliases and passthrough columns behave the
/// same way in both formats.
pub(super) fn parse<R: BufRead>(reader: R) -> Result<Vec<Edge>, LoadError> {
    let mut lines = reader.lines().enumerate();

    let header: Vec<String> = match lines.next() {
        Some((_, line)) => split_row(&line?),
        None => return Ok(Vec::new()),
    };

    let mut edges = Vec::new();
    for (index, line) in lines {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let cells = split_row(&line);
        if cells.len() != header.len() {
            return Err(LoadError::MalformedRecord {
                line: line_number,
                message: format!(
                    "expected {} columns, found {}",
                    header.len(),
                    cells.len()
                ),
            });
        }

        let record: Map<String, Value> = header
            .iter()
            .zip(cells)
            .filter_map(|(name, cell)| infer_cell(&cell).map(|value| (name.clone(), value)))
            .collect();

        let edge = serde_json::from_value::<Edge>(Value::Object(record)).map_err(|e| {
            LoadError::MalformedRecord {
                line: line_number,
                message: e.to_string(),
            }
        })?;
        edges.push(edge);
    }
    Ok(edges)
}

/// Splits one row on tabs.
///
/// A cell opening with `"` runs to the matching closing quote and may hold
/// tabs; `""` inside it is a literal quote. Quoted cells cannot span lines.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.next_if_eq(&'"').is_some() {
                    cell.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if cell.is_empty() => quoted = true,
            '\t' if !quoted => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);
    cells
}

/// Integer, then float, then string. Empty cells are treated as absent.
fn infer_cell(cell: &str) -> Option<Value> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(n) = cell.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    if let Some(n) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Some(Value::Number(n));
    }
    Some(Value::String(cell.to_string()))
}
