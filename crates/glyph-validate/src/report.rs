use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Severity};

/// Result of checking one raw record or one typed record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Error-severity issues.
    pub issues: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    /// Splits issues by default severity.
    pub fn from_issues(all: Vec<Issue>) -> Self {
        let (issues, warnings): (Vec<Issue>, Vec<Issue>) = all
            .into_iter()
            .partition(|issue| issue.default_severity() == Severity::Error);
        Self {
            valid: issues.is_empty(),
            issues,
            warnings,
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// An integrity issue, tied to the record it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Position of the record in the index, when the issue is about one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,
    #[serde(flatten)]
    pub issue: Issue,
}

/// Result of a cross-record consistency check over an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub valid: bool,
    pub records: usize,
    pub letters: usize,
    pub positions: usize,
    /// Rows excluded when the index was built.
    pub excluded_rows: usize,
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl IntegrityReport {
    pub(crate) fn push(&mut self, record: Option<usize>, issue: Issue) {
        let severity = match issue {
            // Inside an index the turns invariant must already hold.
            Issue::IndeterminateTurns { .. } => Severity::Error,
            ref other => other.default_severity(),
        };
        let finding = Finding { record, issue };
        match severity {
            Severity::Error => self.issues.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
        self.valid = self.issues.is_empty();
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
