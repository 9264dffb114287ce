//! Pictograph source ingestion.
//!
//! Reads the tabular sources the dataset is built from and the JSON files
//! that carry ad-hoc records. Output is untyped: every row is a
//! `serde_json::Value` mapping of column name to cell text, ready for the
//! normalizer.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use glyph_ingest::load_sources;
//!
//! let loaded = load_sources(&[
//!     PathBuf::from("data/DiamondPictographDataframe.csv"),
//!     PathBuf::from("data/BoxPictographDataframe.csv"),
//! ])?;
//! println!("{} rows", loaded.row_count());
//! ```

mod csv_table;
mod error;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{REQUIRED_COLUMN, SourceLocation, SourceRow, SourceTable, read_source_table};

// === Discovery & Loading ===
pub use sources::{
    LoadedSources, SourceSummary, list_csv_files, load_sources, read_json_records,
    resolve_sources,
};
