//! Line-delimited JSON writers for the simplified network, the duplicate
//! audit and the debug dump.

use crate::aggregator::OutputEdge;
use crate::error::OutputError;
use crate::resolver::{DuplicateSegment, WorkingSet};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes one JSON object per line and returns the number of records.
pub fn write_jsonl<W, T>(writer: W, records: &[T]) -> Result<usize, OutputError>
where
    W: Write,
    T: Serialize,
{
    let mut writer = BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// `<dir>/<stem>-<suffix>.jsonl` next to `input`, with the input's last
/// extension dropped.
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}-{}.jsonl", stem, suffix))
}

/// Writes the simplified network to `path`, or stdout when `None`.
pub fn write_network(path: Option<&Path>, edges: &[OutputEdge]) -> Result<usize, OutputError> {
    let written = match path {
        Some(path) => write_jsonl(File::create(path)?, edges)?,
        None => write_jsonl(std::io::stdout().lock(), edges)?,
    };
    info!("Written\t\t{:>8} segments", written);
    Ok(written)
}

/// Writes `<input>-duplicates.jsonl` when there is anything to report.
pub fn write_duplicates(
    input: &Path,
    duplicates: &[DuplicateSegment],
) -> Result<Option<PathBuf>, OutputError> {
    if duplicates.is_empty() {
        return Ok(None);
    }
    let path = sibling_path(input, "duplicates");
    write_jsonl(File::create(&path)?, duplicates)?;
    info!("Dumped duplicate{:>8} segments", duplicates.len());
    Ok(Some(path))
}

/// Writes the working segment table to `<input>-dump.jsonl`.
pub fn write_dump(input: &Path, working: &WorkingSet<'_>) -> Result<PathBuf, OutputError> {
    let path = sibling_path(input, "dump");
    let records = working.records();
    write_jsonl(File::create(&path)?, &records)?;
    info!("Dumped\t\t{:>8} segments", records.len());
    Ok(path)
}
