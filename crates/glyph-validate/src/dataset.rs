//! Cross-record consistency checks on a built index.

use tracing::{debug, info_span};

use glyph_core::{DatasetIndex, classify};
use glyph_model::{ChannelRole, PictographRecord};
use glyph_normalization::ChannelField;

use crate::issue::Issue;
use crate::report::IntegrityReport;

/// Checks an index for internal consistency. Never fails; problems are
/// findings in the report.
pub fn validate_dataset(index: &DatasetIndex) -> IntegrityReport {
    let span = info_span!("validate", records = index.len());
    let _guard = span.enter();

    let mut report = IntegrityReport {
        valid: true,
        records: index.len(),
        letters: index.letters().len(),
        positions: index.available_start_positions().len(),
        excluded_rows: index.report().failure_count(),
        ..IntegrityReport::default()
    };

    let mut by_letter = 0;
    for (letter, records) in index.letter_groups() {
        by_letter += records.len();
        for record in records {
            if record.letter.as_ref() != Some(letter) {
                report.push(
                    None,
                    Issue::LetterMismatch {
                        filed_under: letter.to_string(),
                        found: record.letter.as_ref().map(ToString::to_string),
                    },
                );
            }
        }
    }

    let mut by_position = 0;
    for (position, records) in index.position_groups() {
        by_position += records.len();
        for record in records {
            if record.start_position.as_ref() != Some(position) {
                report.push(
                    None,
                    Issue::PositionMismatch {
                        filed_under: position.to_string(),
                        found: record.start_position.as_ref().map(ToString::to_string),
                    },
                );
            }
        }
    }

    let with_position = index
        .records()
        .iter()
        .filter(|record| record.start_position.is_some())
        .count();
    check_view(&mut report, "by-letter", index.len(), by_letter);
    check_view(&mut report, "by-position", with_position, by_position);

    for (slot, record) in index.records().iter().enumerate() {
        check_record(&mut report, slot, record);
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "dataset validated"
    );
    report
}

fn check_view(report: &mut IntegrityReport, view: &str, expected: usize, found: usize) {
    if expected != found {
        report.push(
            None,
            Issue::ViewCountMismatch {
                view: view.to_string(),
                expected,
                found,
            },
        );
    }
}

fn check_record(report: &mut IntegrityReport, slot: usize, record: &PictographRecord) {
    let Some(letter) = &record.letter else {
        report.push(Some(slot), Issue::BlankRecordIndexed);
        return;
    };
    if !letter.is_catalogued() {
        report.push(
            Some(slot),
            Issue::UnknownLetter {
                letter: letter.to_string(),
            },
        );
    }

    for role in ChannelRole::ALL {
        match record.channel(role) {
            None => report.push(Some(slot), Issue::ChannelMissing { channel: role }),
            Some(channel) if !channel.turns_consistent() => report.push(
                Some(slot),
                Issue::IndeterminateTurns {
                    field: format!("{role}.{}", ChannelField::Turns),
                    motion: channel.motion_kind.to_string(),
                },
            ),
            Some(_) => {}
        }
    }

    if record.classification != classify(record) {
        report.push(
            Some(slot),
            Issue::StaleClassification {
                letter: letter.to_string(),
            },
        );
    }
}
