//! Batch conversion with per-row isolation.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, info_span};

use glyph_model::{ConvertError, PictographRecord, ProcessingError, ValidationError};
use glyph_normalization::{NormalizeOptions, normalize};

use crate::classify::classify_in_place;

/// Outcome of converting a sequence of rows.
///
/// Every input row lands in exactly one of the two lists, keyed by its
/// input index. Both lists are ascending by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub successes: Vec<(usize, PictographRecord)>,
    pub failures: Vec<(usize, ConvertError)>,
}

impl BatchResult {
    /// Number of rows accounted for.
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successes.is_empty() && self.failures.is_empty()
    }

    /// Converted records in input order.
    pub fn records(&self) -> impl Iterator<Item = &PictographRecord> {
        self.successes.iter().map(|(_, record)| record)
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Appends the result of a later chunk, shifting its indices past the
    /// rows already accounted for.
    pub fn append(&mut self, other: BatchResult) {
        let offset = self.len();
        self.successes.extend(
            other
                .successes
                .into_iter()
                .map(|(index, record)| (index + offset, record)),
        );
        self.failures.extend(
            other
                .failures
                .into_iter()
                .map(|(index, error)| (index + offset, error)),
        );
    }
}

/// Normalizes and classifies a single raw record.
pub fn normalize_one(
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<PictographRecord, ValidationError> {
    let mut record = normalize(raw, options)?;
    classify_in_place(&mut record);
    Ok(record)
}

/// Converts one row, checking record invariants after classification.
pub fn convert_one(
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<PictographRecord, ConvertError> {
    let record = normalize_one(raw, options)?;
    record.check_invariants()?;
    Ok(record)
}

/// Converts every row; a failing row never affects its siblings.
pub fn convert_many(rows: &[Value], options: &NormalizeOptions) -> BatchResult {
    convert_many_with_progress(rows, options, |_, _| {})
}

/// Like [`convert_many`], calling `progress(completed, total)` after each
/// row.
pub fn convert_many_with_progress<F>(
    rows: &[Value],
    options: &NormalizeOptions,
    progress: F,
) -> BatchResult
where
    F: FnMut(usize, usize),
{
    convert_outcomes(rows.iter().map(Ok::<_, ProcessingError>), options, progress)
}

/// Converts rows that may already have failed upstream (e.g. unreadable
/// CSV records). Upstream failures are recorded as-is.
pub fn convert_outcomes<'a, I, F>(
    rows: I,
    options: &NormalizeOptions,
    mut progress: F,
) -> BatchResult
where
    I: ExactSizeIterator<Item = Result<&'a Value, ProcessingError>>,
    F: FnMut(usize, usize),
{
    let total = rows.len();
    let span = info_span!("convert", rows = total);
    let _guard = span.enter();
    let start = Instant::now();

    let mut result = BatchResult::default();
    for (index, row) in rows.enumerate() {
        let outcome = row
            .map_err(ConvertError::from)
            .and_then(|raw| convert_one(raw, options));
        match outcome {
            Ok(record) => result.successes.push((index, record)),
            Err(error) => {
                debug!(row = index, error = %error, "row not converted");
                result.failures.push((index, error));
            }
        }
        progress(index + 1, total);
    }

    info!(
        rows = total,
        converted = result.successes.len(),
        failed = result.failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_model::{ProcessingStage, ValidationErrorKind};
    use serde_json::json;

    #[test]
    fn upstream_failures_are_recorded_in_place() {
        let good = json!({"letter": "A"});
        let rows = vec![
            Ok(&good),
            Err(ProcessingError::new(ProcessingStage::Ingest, "bad quoting")),
            Ok(&good),
        ];
        let result = convert_outcomes(rows.into_iter(), &NormalizeOptions::default(), |_, _| {});
        assert_eq!(result.successes.len(), 2);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, 1);
        assert!(matches!(result.failures[0].1, ConvertError::Processing(_)));
    }

    #[test]
    fn append_shifts_indices() {
        let options = NormalizeOptions::default();
        let mut first = convert_many(&[json!({"letter": "A"}), json!({})], &options);
        let second = convert_many(&[json!({}), json!({"letter": "B"})], &options);
        first.append(second);

        let failed: Vec<usize> = first.failures.iter().map(|(index, _)| *index).collect();
        let converted: Vec<usize> = first.successes.iter().map(|(index, _)| *index).collect();
        assert_eq!(failed, vec![1, 2]);
        assert_eq!(converted, vec![0, 3]);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn normalize_one_classifies() {
        let record = normalize_one(&json!({"letter": "Z-"}), &NormalizeOptions::default())
            .expect("normalize");
        let classification = record.classification.expect("classification");
        assert!(classification.has_dash);

        let err = normalize_one(&json!({"letter": ""}), &NormalizeOptions::default())
            .expect_err("empty letter");
        assert_eq!(err.kind, ValidationErrorKind::Missing);
    }
}
