//! Structural checks on raw records.

use std::fmt::Display;

use serde_json::Value;

use glyph_model::{
    ChannelRole, Letter, Location, MotionKind, Orientation, RotationDirection, Turns,
};
use glyph_normalization::fields::{END_POS, LETTER, START_POS};
use glyph_normalization::{
    CanonicalFamily, ChannelField, NormalizeOptions, RawChannel, RawRecord, Resolution,
    canonicalize, present, value_kind,
};

use crate::issue::Issue;
use crate::report::ValidationReport;

/// Checks a raw record without converting it.
///
/// Errors are the problems that make normalization fail, plus channel
/// sub-fields of the wrong type. Warnings cover values the normalizer
/// replaces with a default.
pub fn validate_structure(raw: &Value, options: &NormalizeOptions) -> ValidationReport {
    let Some(record) = raw.as_object() else {
        return ValidationReport::from_issues(vec![Issue::NotAMapping {
            found: value_kind(raw).to_string(),
        }]);
    };

    let mut issues = Vec::new();
    check_letter(record, &mut issues);
    for field in [START_POS, END_POS] {
        check_position(record, field, &mut issues);
    }
    for role in ChannelRole::ALL {
        check_channel(record, role, options, &mut issues);
    }
    ValidationReport::from_issues(issues)
}

fn check_letter(record: &RawRecord, issues: &mut Vec<Issue>) {
    match present(record.get(LETTER)) {
        None => issues.push(Issue::RequiredMissing {
            field: LETTER.to_string(),
        }),
        Some(Value::String(text)) => {
            if let Some(letter) = Letter::new(text)
                && !letter.is_catalogued()
            {
                issues.push(Issue::UnknownLetter {
                    letter: letter.as_str().to_string(),
                });
            }
        }
        Some(other) => issues.push(wrong_type(LETTER, "string", other)),
    }
}

fn check_position(record: &RawRecord, field: &str, issues: &mut Vec<Issue>) {
    match present(record.get(field)) {
        None => issues.push(Issue::ExpectedMissing {
            field: field.to_string(),
        }),
        Some(Value::String(_)) => {}
        Some(other) => issues.push(wrong_type(field, "string", other)),
    }
}

fn check_channel(
    record: &RawRecord,
    role: ChannelRole,
    options: &NormalizeOptions,
    issues: &mut Vec<Issue>,
) {
    let channel = match RawChannel::resolve(record, role, options) {
        Ok(channel) => channel,
        Err(error) => {
            issues.push(Issue::from(&error));
            RawChannel::flat(record, role, options)
        }
    };
    if !channel.is_present() {
        issues.push(Issue::ChannelMissing { channel: role });
        return;
    }

    for field in ChannelField::ALL {
        let name = channel.field_name(field);
        let Some(value) = channel.get(field) else {
            if field.is_schema_required() {
                issues.push(Issue::ExpectedMissing { field: name });
            }
            continue;
        };
        let accepts_number = field == ChannelField::Turns;
        match value {
            Value::String(_) => {}
            Value::Number(_) if accepts_number => {}
            other => {
                let expected = if accepts_number {
                    "string or number"
                } else {
                    "string"
                };
                issues.push(wrong_type(&name, expected, other));
                continue;
            }
        }
        let unrecognized = match field {
            ChannelField::MotionType => check_value::<MotionKind>(&name, value),
            ChannelField::PropRotDir => check_value::<RotationDirection>(&name, value),
            ChannelField::StartLoc | ChannelField::EndLoc => check_value::<Location>(&name, value),
            ChannelField::StartOri | ChannelField::EndOri => {
                check_value::<Orientation>(&name, value)
            }
            ChannelField::Turns => check_value::<Turns>(&name, value),
        };
        issues.extend(unrecognized);
    }

    let motion = canonicalize::<MotionKind>(channel.get(ChannelField::MotionType)).value;
    let turns = canonicalize::<Turns>(channel.get(ChannelField::Turns)).value;
    if turns.is_indeterminate() && !motion.allows_indeterminate_turns() {
        issues.push(Issue::IndeterminateTurns {
            field: channel.field_name(ChannelField::Turns),
            motion: motion.to_string(),
        });
    }
}

fn check_value<T: CanonicalFamily + Display>(field: &str, value: &Value) -> Option<Issue> {
    let canonical = canonicalize::<T>(Some(value));
    if canonical.resolution != Resolution::Unrecognized {
        return None;
    }
    Some(Issue::UnrecognizedValue {
        field: field.to_string(),
        family: T::FAMILY.to_string(),
        value: display_raw(value),
        default: canonical.value.to_string(),
    })
}

fn display_raw(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn wrong_type(field: &str, expected: &str, found: &Value) -> Issue {
    Issue::WrongType {
        field: field.to_string(),
        expected: expected.to_string(),
        found: value_kind(found).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_mapping_is_the_only_issue() {
        let report = validate_structure(&json!(42), &NormalizeOptions::default());
        assert!(!report.valid);
        assert_eq!(
            report.issues,
            vec![Issue::NotAMapping {
                found: "number".to_string()
            }]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn nested_fields_are_named_by_path() {
        let raw = json!({
            "letter": "A",
            "start_pos": "alpha1",
            "end_pos": "alpha3",
            "blue_attributes": {"motion_type": "pro", "prop_rot_dir": 5},
        });
        let report = validate_structure(&raw, &NormalizeOptions::default());
        assert!(!report.valid);
        assert!(report.issues.contains(&Issue::WrongType {
            field: "blue_attributes.prop_rot_dir".to_string(),
            expected: "string".to_string(),
            found: "number".to_string(),
        }));
    }

    #[test]
    fn bad_attributes_object_still_checks_flat_columns() {
        let raw = json!({
            "letter": "A",
            "red_attributes": "anti",
            "red_motion_type": "sideways",
        });
        let report = validate_structure(&raw, &NormalizeOptions::default());
        assert!(report.issues.iter().any(|issue| issue.field() == Some("red_attributes")));
        assert!(report.warnings.iter().any(|issue| matches!(
            issue,
            Issue::UnrecognizedValue { field, .. } if field == "red_motion_type"
        )));
    }
}
