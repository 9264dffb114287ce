//! Error types for source ingestion.
//!
//! These are file-level failures: they abort the load of a source. Problems
//! with individual rows are reported per row instead (see `SourceRow`).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading pictograph sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The header row could not be read.
    #[error("failed to parse CSV header in {path}: {message}")]
    CsvHeader { path: PathBuf, message: String },

    /// The file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A required column is absent from the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === JSON Errors ===
    /// The file is not valid JSON.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// Valid JSON, but neither an object nor an array.
    #[error("unexpected JSON shape in {path}: expected an object or array, found {found}")]
    JsonShape { path: PathBuf, found: &'static str },

    // === Discovery Errors ===
    /// Nothing to load.
    #[error("no source files found")]
    NoSources,
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/DiamondPictographDataframe.csv"),
        };
        assert_eq!(
            err.to_string(),
            "source file not found: /path/to/DiamondPictographDataframe.csv"
        );
    }

    #[test]
    fn not_found_io_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::io("missing.csv", io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
