//! Source discovery and multi-file loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::csv_table::{SourceRow, digest_hex, read_source_table};
use crate::error::{IngestError, Result};

/// Per-file summary of a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub unreadable_rows: usize,
    pub digest: String,
}

/// Rows from several source files, concatenated in file order.
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    pub sources: Vec<SourceSummary>,
    pub rows: Vec<SourceRow>,
}

impl LoadedSources {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Decoded rows only, in order. Unreadable rows are skipped.
    pub fn records(&self) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(|row| row.record.as_ref().ok())
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expands directories into their CSV files, keeping argument order.
pub fn resolve_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::new();
    for path in paths {
        if path.is_dir() {
            resolved.extend(list_csv_files(path)?);
        } else {
            resolved.push(path.clone());
        }
    }
    if resolved.is_empty() {
        return Err(IngestError::NoSources);
    }
    Ok(resolved)
}

/// Reads and concatenates source files in the given order.
///
/// Row order across files is preserved: every row of the first file comes
/// before any row of the second.
pub fn load_sources(paths: &[PathBuf]) -> Result<LoadedSources> {
    let paths = resolve_sources(paths)?;
    let mut loaded = LoadedSources::default();
    for path in &paths {
        let table = read_source_table(path)?;
        loaded.sources.push(SourceSummary {
            path: table.path.clone(),
            rows: table.row_count(),
            unreadable_rows: table.failed_rows(),
            digest: table.digest.clone(),
        });
        loaded.rows.extend(table.rows);
    }
    tracing::info!(
        files = loaded.sources.len(),
        rows = loaded.rows.len(),
        "sources loaded"
    );
    Ok(loaded)
}

/// Reads ad-hoc records from a JSON file holding one object or an array.
///
/// Array elements are returned as-is, including non-objects: rejecting them
/// is the normalizer's job, per row.
pub fn read_json_records(path: &Path) -> Result<Vec<Value>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), digest = %digest_hex(&bytes), "read JSON records");
    match value {
        Value::Array(items) => Ok(items),
        object @ Value::Object(_) => Ok(vec![object]),
        other => Err(IngestError::JsonShape {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
