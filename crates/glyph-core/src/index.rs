//! The dataset index.
//!
//! An index is built once from a set of rows and never mutated afterwards.
//! `reload` produces a fresh index; publishing it is the caller's job (see
//! [`crate::DatasetHandle`]).

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span, warn};

use glyph_ingest::{LoadedSources, SourceLocation, SourceSummary};
use glyph_model::{ConvertError, Letter, PictographRecord, PositionId, ProcessingError};
use glyph_normalization::NormalizeOptions;

use crate::batch::{BatchResult, convert_outcomes};

/// A row that was excluded from the index, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowFailure {
    /// Position of the row in the concatenated input.
    pub index: usize,
    /// Source file and line, when the row came from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    pub error: ConvertError,
}

/// Summary of one index build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub indexed: usize,
    pub failures: Vec<RowFailure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceSummary>,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    fn empty() -> Self {
        Self {
            total_rows: 0,
            indexed: 0,
            failures: Vec::new(),
            sources: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Immutable, queryable snapshot of a dataset.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    records: Vec<PictographRecord>,
    by_letter: BTreeMap<Letter, Vec<usize>>,
    by_start_position: BTreeMap<PositionId, Vec<usize>>,
    report: LoadReport,
    options: NormalizeOptions,
}

impl Default for DatasetIndex {
    fn default() -> Self {
        Self::empty(NormalizeOptions::default())
    }
}

impl DatasetIndex {
    /// An index with no records.
    pub fn empty(options: NormalizeOptions) -> Self {
        Self {
            records: Vec::new(),
            by_letter: BTreeMap::new(),
            by_start_position: BTreeMap::new(),
            report: LoadReport::empty(),
            options,
        }
    }

    /// Builds an index from raw rows with the default options.
    pub fn build(rows: &[Value]) -> Self {
        Self::build_with_options(rows, &NormalizeOptions::default())
    }

    pub fn build_with_options(rows: &[Value], options: &NormalizeOptions) -> Self {
        Self::build_with_progress(rows, options, |_, _| {})
    }

    /// Builds an index, reporting `(completed, total)` after each row.
    pub fn build_with_progress<F>(rows: &[Value], options: &NormalizeOptions, progress: F) -> Self
    where
        F: FnMut(usize, usize),
    {
        let span = info_span!("load", rows = rows.len());
        let _guard = span.enter();
        let start = Instant::now();
        let batch = convert_outcomes(rows.iter().map(Ok::<_, ProcessingError>), options, progress);
        Self::from_batch(rows.len(), batch, &[], Vec::new(), options, start)
    }

    /// Builds an index from ingested source files. Failures carry the file
    /// and line they came from.
    pub fn build_from_sources(sources: &LoadedSources, options: &NormalizeOptions) -> Self {
        Self::build_from_sources_with_progress(sources, options, |_, _| {})
    }

    pub fn build_from_sources_with_progress<F>(
        sources: &LoadedSources,
        options: &NormalizeOptions,
        progress: F,
    ) -> Self
    where
        F: FnMut(usize, usize),
    {
        let span = info_span!("load", files = sources.sources.len(), rows = sources.row_count());
        let _guard = span.enter();
        let start = Instant::now();
        let rows = sources
            .rows
            .iter()
            .map(|row| row.record.as_ref().map_err(Clone::clone));
        let batch = convert_outcomes(rows, options, progress);
        let locations: Vec<&SourceLocation> =
            sources.rows.iter().map(|row| &row.location).collect();
        Self::from_batch(
            sources.row_count(),
            batch,
            &locations,
            sources.sources.clone(),
            options,
            start,
        )
    }

    fn from_batch(
        total_rows: usize,
        batch: BatchResult,
        locations: &[&SourceLocation],
        sources: Vec<SourceSummary>,
        options: &NormalizeOptions,
        start: Instant,
    ) -> Self {
        let mut index = Self::empty(options.clone());

        for (_, record) in batch.successes {
            index.insert(record);
        }

        let failures: Vec<RowFailure> = batch
            .failures
            .into_iter()
            .map(|(row, error)| {
                let location = locations.get(row).copied().cloned();
                match &location {
                    Some(location) => {
                        warn!(
                            row,
                            location = %location,
                            error = %error,
                            "row excluded from index"
                        );
                    }
                    None => warn!(row, error = %error, "row excluded from index"),
                }
                RowFailure {
                    index: row,
                    location,
                    error,
                }
            })
            .collect();

        index.report = LoadReport {
            total_rows,
            indexed: index.records.len(),
            failures,
            sources,
            loaded_at: Utc::now(),
        };
        info!(
            rows = total_rows,
            indexed = index.report.indexed,
            failed = index.report.failure_count(),
            letters = index.by_letter.len(),
            positions = index.by_start_position.len(),
            duration_ms = start.elapsed().as_millis(),
            "index built"
        );
        index
    }

    fn insert(&mut self, record: PictographRecord) {
        let Some(letter) = record.letter.clone() else {
            return;
        };
        let slot = self.records.len();
        self.by_letter.entry(letter).or_default().push(slot);
        if let Some(position) = &record.start_position {
            self.by_start_position
                .entry(position.clone())
                .or_default()
                .push(slot);
        }
        self.records.push(record);
    }

    /// Builds a brand-new index from `rows` with the same options. `self`
    /// is left untouched.
    #[must_use]
    pub fn reload(&self, rows: &[Value]) -> Self {
        Self::build_with_options(rows, &self.options)
    }

    #[must_use]
    pub fn reload_from_sources(&self, sources: &LoadedSources) -> Self {
        Self::build_from_sources(sources, &self.options)
    }

    /// Records whose start position is exactly `position`, in insertion
    /// order. Unknown positions yield an empty list.
    ///
    /// The query is trimmed the same way stored positions are, so
    /// `" alpha1 "` and `"alpha1"` name the same key.
    pub fn continuations(&self, position: &str) -> Vec<&PictographRecord> {
        self.resolve(self.by_start_position.get(position.trim()))
    }

    /// Distinct start positions, sorted.
    pub fn available_start_positions(&self) -> Vec<&PositionId> {
        self.by_start_position.keys().collect()
    }

    /// Distinct letters, sorted.
    pub fn letters(&self) -> Vec<&Letter> {
        self.by_letter.keys().collect()
    }

    pub fn records_for_letter(&self, letter: &str) -> Vec<&PictographRecord> {
        self.resolve(self.by_letter.get(letter.trim()))
    }

    /// Letter groups with their records, sorted by letter.
    pub fn letter_groups(&self) -> impl Iterator<Item = (&Letter, Vec<&PictographRecord>)> {
        self.by_letter
            .iter()
            .map(|(letter, slots)| (letter, self.resolve(Some(slots))))
    }

    /// Start-position groups with their records, sorted by position.
    pub fn position_groups(&self) -> impl Iterator<Item = (&PositionId, Vec<&PictographRecord>)> {
        self.by_start_position
            .iter()
            .map(|(position, slots)| (position, self.resolve(Some(slots))))
    }

    /// All indexed records in insertion order.
    pub fn records(&self) -> &[PictographRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    fn resolve(&self, slots: Option<&Vec<usize>>) -> Vec<&PictographRecord> {
        slots
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|slot| self.records.get(*slot))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DatasetIndex>();
    }

    #[test]
    fn records_without_start_position_are_letter_indexed_only() {
        let index = DatasetIndex::build(&[
            json!({"letter": "A"}),
            json!({"letter": "A", "start_pos": "alpha1"}),
        ]);
        assert_eq!(index.records_for_letter("A").len(), 2);
        assert_eq!(index.available_start_positions().len(), 1);
        assert_eq!(index.continuations("alpha1").len(), 1);
    }

    #[test]
    fn failures_are_reported_with_their_row() {
        let index = DatasetIndex::build(&[
            json!({"letter": "A"}),
            json!([1, 2]),
            json!({"letter": 3}),
        ]);
        let report = index.report();
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.indexed, 1);
        let rows: Vec<usize> = report.failures.iter().map(|failure| failure.index).collect();
        assert_eq!(rows, vec![1, 2]);
        assert!(report.failures.iter().all(|failure| failure.location.is_none()));
    }

    #[test]
    fn empty_index_answers_queries() {
        let index = DatasetIndex::default();
        assert!(index.is_empty());
        assert!(index.continuations("alpha1").is_empty());
        assert!(index.available_start_positions().is_empty());
    }
}
