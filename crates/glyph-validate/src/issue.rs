//! Validation issue types.
//!
//! Each `Issue` variant carries only the data it needs. Severity and
//! category are derived from the variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use glyph_model::{ChannelRole, ValidationError, ValidationErrorKind};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The record cannot be converted, or the index is inconsistent.
    Error,
    /// Converted, but something fell back to a default or looks suspect.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Issue grouping, for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Shape and type of the raw input.
    Structure,
    /// Required or expected fields that are absent.
    Presence,
    /// Values that did not match any alias.
    Canonical,
    /// Letters outside the catalogue.
    Catalogue,
    /// Cross-field and cross-record consistency.
    Consistency,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Presence => "Presence",
            Self::Canonical => "Canonical",
            Self::Catalogue => "Catalogue",
            Self::Consistency => "Consistency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    // Structure checks
    /// The input is not a mapping.
    NotAMapping { found: String },
    /// A field holds a value of the wrong type.
    WrongType {
        field: String,
        expected: String,
        found: String,
    },

    // Presence checks
    /// A required field is absent, null or empty.
    RequiredMissing { field: String },
    /// An expected field is absent; its default is used.
    ExpectedMissing { field: String },
    /// A channel has no motion type and is omitted.
    ChannelMissing { channel: ChannelRole },

    // Canonicalization checks
    /// A value matched no alias and fell back to the family default.
    UnrecognizedValue {
        field: String,
        family: String,
        value: String,
        default: String,
    },

    // Catalogue checks
    /// The letter is not in the static catalogue.
    UnknownLetter { letter: String },

    // Consistency checks
    /// Indeterminate turns on a motion that needs a finite count.
    IndeterminateTurns { field: String, motion: String },
    /// A record is filed under a letter it does not carry.
    LetterMismatch {
        filed_under: String,
        found: Option<String>,
    },
    /// A record is filed under a start position it does not carry.
    PositionMismatch {
        filed_under: String,
        found: Option<String>,
    },
    /// A record without a letter is in the index.
    BlankRecordIndexed,
    /// The stored classification differs from a fresh one.
    StaleClassification { letter: String },
    /// An index view does not cover the records it should.
    ViewCountMismatch {
        view: String,
        expected: usize,
        found: usize,
    },
    /// A field changed when the record was flattened and read back.
    RoundTripMismatch {
        field: String,
        expected: Option<String>,
        found: Option<String>,
    },
}

impl Issue {
    /// The field the issue is about, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Issue::WrongType { field, .. }
            | Issue::RequiredMissing { field }
            | Issue::ExpectedMissing { field }
            | Issue::UnrecognizedValue { field, .. }
            | Issue::IndeterminateTurns { field, .. }
            | Issue::RoundTripMismatch { field, .. } => Some(field),
            Issue::ChannelMissing { channel } => Some(channel.as_str()),
            Issue::UnknownLetter { .. } | Issue::LetterMismatch { .. } => Some("letter"),
            Issue::PositionMismatch { .. } => Some("start_pos"),
            Issue::NotAMapping { .. }
            | Issue::BlankRecordIndexed
            | Issue::StaleClassification { .. }
            | Issue::ViewCountMismatch { .. } => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::NotAMapping { .. } | Issue::WrongType { .. } => Category::Structure,
            Issue::RequiredMissing { .. }
            | Issue::ExpectedMissing { .. }
            | Issue::ChannelMissing { .. } => Category::Presence,
            Issue::UnrecognizedValue { .. } => Category::Canonical,
            Issue::UnknownLetter { .. } => Category::Catalogue,
            Issue::IndeterminateTurns { .. }
            | Issue::LetterMismatch { .. }
            | Issue::PositionMismatch { .. }
            | Issue::BlankRecordIndexed
            | Issue::StaleClassification { .. }
            | Issue::ViewCountMismatch { .. }
            | Issue::RoundTripMismatch { .. } => Category::Consistency,
        }
    }

    /// Default severity. Indeterminate turns are a warning on raw input
    /// (the normalizer repairs them) and an error inside an index.
    pub fn default_severity(&self) -> Severity {
        match self {
            Issue::ExpectedMissing { .. }
            | Issue::ChannelMissing { .. }
            | Issue::UnrecognizedValue { .. }
            | Issue::UnknownLetter { .. }
            | Issue::IndeterminateTurns { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::NotAMapping { found } => format!("Expected a mapping, found {found}"),
            Issue::WrongType {
                field,
                expected,
                found,
            } => format!("Field {field} should be {expected}, found {found}"),
            Issue::RequiredMissing { field } => format!("Required field {field} is missing"),
            Issue::ExpectedMissing { field } => {
                format!("Field {field} is missing; the default is used")
            }
            Issue::ChannelMissing { channel } => {
                format!("The {channel} channel has no motion type and is omitted")
            }
            Issue::UnrecognizedValue {
                field,
                family,
                value,
                default,
            } => format!("Unrecognized {family} '{value}' in {field}; using {default}"),
            Issue::UnknownLetter { letter } => {
                format!("Letter '{letter}' is not in the catalogue")
            }
            Issue::IndeterminateTurns { field, motion } => {
                format!("Field {field} is indeterminate on a {motion} motion")
            }
            Issue::LetterMismatch { filed_under, found } => format!(
                "Record filed under letter '{filed_under}' carries {}",
                describe(found.as_deref())
            ),
            Issue::PositionMismatch { filed_under, found } => format!(
                "Record filed under position '{filed_under}' starts at {}",
                describe(found.as_deref())
            ),
            Issue::BlankRecordIndexed => "A blank record is indexed".to_string(),
            Issue::StaleClassification { letter } => {
                format!("Stored classification of '{letter}' differs from a fresh one")
            }
            Issue::ViewCountMismatch {
                view,
                expected,
                found,
            } => format!("The {view} view covers {found} records, expected {expected}"),
            Issue::RoundTripMismatch {
                field,
                expected,
                found,
            } => format!(
                "Field {field} changed on round trip: {} became {}",
                describe(expected.as_deref()),
                describe(found.as_deref())
            ),
        }
    }
}

fn describe(value: Option<&str>) -> String {
    value.map_or_else(|| "nothing".to_string(), |value| format!("'{value}'"))
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<&ValidationError> for Issue {
    fn from(error: &ValidationError) -> Self {
        match &error.kind {
            ValidationErrorKind::NotAMapping { found } => Issue::NotAMapping {
                found: found.clone(),
            },
            ValidationErrorKind::Missing => Issue::RequiredMissing {
                field: error.field.clone(),
            },
            ValidationErrorKind::WrongType { expected, found } => Issue::WrongType {
                field: error.field.clone(),
                expected: expected.clone(),
                found: found.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_follow_the_variant() {
        let missing = Issue::RequiredMissing {
            field: "letter".to_string(),
        };
        assert_eq!(missing.default_severity(), Severity::Error);
        assert_eq!(missing.category(), Category::Presence);
        assert_eq!(missing.field(), Some("letter"));

        let unknown = Issue::UnknownLetter {
            letter: "Ж".to_string(),
        };
        assert_eq!(unknown.default_severity(), Severity::Warning);
        assert_eq!(unknown.to_string(), "Letter 'Ж' is not in the catalogue");
    }

    #[test]
    fn converts_validation_errors() {
        let issue = Issue::from(&ValidationError::wrong_type("start_pos", "string", "number"));
        assert_eq!(
            issue.message(),
            "Field start_pos should be string, found number"
        );
    }
}
