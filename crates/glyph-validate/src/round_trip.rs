//! Flatten-and-reread checks on typed records.

use std::collections::BTreeSet;

use serde_json::Value;

use glyph_model::PictographRecord;
use glyph_normalization::fields::LETTER;
use glyph_normalization::{NormalizeOptions, normalize, to_raw};

use crate::issue::Issue;
use crate::report::ValidationReport;

/// Flattens a record to the raw schema, normalizes it again and reports
/// every column that changed. Classification is not part of the raw
/// schema and is ignored.
pub fn validate_round_trip(
    record: &PictographRecord,
    options: &NormalizeOptions,
) -> ValidationReport {
    if record.is_blank() {
        return ValidationReport::from_issues(vec![Issue::RequiredMissing {
            field: LETTER.to_string(),
        }]);
    }

    let raw = to_raw(record, options);
    let reread = match normalize(&Value::Object(raw.clone()), options) {
        Ok(reread) => reread,
        Err(error) => return ValidationReport::from_issues(vec![Issue::from(&error)]),
    };
    let again = to_raw(&reread, options);

    let columns: BTreeSet<&String> = raw.keys().chain(again.keys()).collect();
    let issues = columns
        .into_iter()
        .filter_map(|column| {
            let expected = raw.get(column.as_str());
            let found = again.get(column.as_str());
            (expected != found).then(|| Issue::RoundTripMismatch {
                field: column.clone(),
                expected: expected.map(text),
                found: found.map(text),
            })
        })
        .collect();
    ValidationReport::from_issues(issues)
}

fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
