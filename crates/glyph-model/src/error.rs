//! Error types for record conversion.
//!
//! Per-row failures are values: they are collected into batch results and
//! load reports rather than aborting the surrounding work.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What is wrong with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The input is not a record/mapping.
    NotAMapping { found: String },
    /// A required field is absent, null or empty.
    Missing,
    /// The field holds a value of the wrong type.
    WrongType { expected: String, found: String },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMapping { found } => write!(f, "expected a mapping, found {found}"),
            Self::Missing => f.write_str("required field is missing"),
            Self::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

/// The input is structurally wrong. Always names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid field '{field}': {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::Missing,
        }
    }

    pub fn wrong_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::WrongType {
                expected: expected.into(),
                found: found.into(),
            },
        }
    }

    pub fn not_a_mapping(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::NotAMapping {
                found: found.into(),
            },
        }
    }
}

/// Stage at which a processing failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    Ingest,
    Normalize,
    Classify,
    Index,
}

impl ProcessingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingest => "ingest",
            Self::Normalize => "normalize",
            Self::Classify => "classify",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well-formed-looking row failed unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{stage} failed: {message}")]
pub struct ProcessingError {
    pub stage: ProcessingStage,
    pub message: String,
}

impl ProcessingError {
    pub fn new(stage: ProcessingStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

/// Why a single row could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ConvertError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl ConvertError {
    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(error) => Some(&error.field),
            Self::Processing(_) => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Processing(_) => None,
        }
    }
}
