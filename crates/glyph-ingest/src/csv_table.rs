use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use glyph_model::{ProcessingError, ProcessingStage};

use crate::error::{IngestError, Result};

/// Column every source table must carry.
pub const REQUIRED_COLUMN: &str = "letter";

/// Where a row came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based line number in the file.
    pub line: u64,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// One data row. Rows the CSV reader could not decode carry the error
/// instead of a record, so the failure stays attached to its position.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub location: SourceLocation,
    pub record: std::result::Result<Value, ProcessingError>,
}

/// A fully read source file.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
    /// Lowercase hex SHA-256 of the file contents.
    pub digest: String,
}

impl SourceTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn failed_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.record.is_err()).count()
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_ascii_lowercase()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

pub(crate) fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Reads a pictograph CSV file.
///
/// Headers are trimmed, BOM-stripped and lowercased. Empty cells are left
/// out of the row mapping so downstream code sees them as absent. Fully
/// empty lines are skipped.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let digest = digest_hex(&bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvHeader {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if !headers.iter().any(|header| header == REQUIRED_COLUMN) {
        return Err(IngestError::MissingColumn {
            column: REQUIRED_COLUMN.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                if record.iter().all(|value| normalize_cell(value).is_empty()) {
                    continue;
                }
                let line = record.position().map_or(0, csv::Position::line);
                if record.len() > headers.len() {
                    tracing::debug!(
                        path = %path.display(),
                        line,
                        cells = record.len(),
                        columns = headers.len(),
                        "ignoring cells beyond the header row"
                    );
                }
                let mut map = Map::new();
                for (header, value) in headers.iter().zip(record.iter()) {
                    let value = normalize_cell(value);
                    if header.is_empty() || value.is_empty() {
                        continue;
                    }
                    map.insert(header.clone(), Value::String(value.to_string()));
                }
                rows.push(SourceRow {
                    location: SourceLocation {
                        file: path.to_path_buf(),
                        line,
                    },
                    record: Ok(Value::Object(map)),
                });
            }
            Err(error) => {
                let line = error.position().map_or(0, csv::Position::line);
                tracing::warn!(
                    path = %path.display(),
                    line,
                    error = %error,
                    "unreadable CSV record"
                );
                rows.push(SourceRow {
                    location: SourceLocation {
                        file: path.to_path_buf(),
                        line,
                    },
                    record: Err(ProcessingError::new(
                        ProcessingStage::Ingest,
                        error.to_string(),
                    )),
                });
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read source table"
    );

    Ok(SourceTable {
        path: path.to_path_buf(),
        headers,
        rows,
        digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_case() {
        assert_eq!(normalize_header("\u{feff}Letter "), "letter");
        assert_eq!(normalize_header(" BLUE_Motion_Type"), "blue_motion_type");
    }

    #[test]
    fn digest_is_stable() {
        assert_eq!(digest_hex(b"abc"), digest_hex(b"abc"));
        assert_ne!(digest_hex(b"abc"), digest_hex(b"abd"));
        assert_eq!(digest_hex(b"").len(), 64);
    }
}
