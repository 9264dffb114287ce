use serde::Serialize;

use glyph_ingest::SourceLocation;
use glyph_model::ProcessingError;
use glyph_validate::{IntegrityReport, ValidationReport};

/// Structural findings for one source row.
#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    pub location: SourceLocation,
    #[serde(flatten)]
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreadableRow {
    pub location: SourceLocation,
    pub error: ProcessingError,
}

/// Everything `glyph validate` found. Only rows with findings are kept.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub rows_checked: usize,
    pub rows: Vec<RowReport>,
    pub unreadable: Vec<UnreadableRow>,
    pub integrity: IntegrityReport,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.unreadable.is_empty()
            && self.integrity.valid
            && self.rows.iter().all(|row| row.report.valid)
    }

    pub fn invalid_rows(&self) -> usize {
        self.rows.iter().filter(|row| !row.report.valid).count()
    }

    pub fn error_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.report.error_count())
            .sum::<usize>()
            + self.unreadable.len()
            + self.integrity.error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.report.warning_count())
            .sum::<usize>()
            + self.integrity.warning_count()
    }
}
