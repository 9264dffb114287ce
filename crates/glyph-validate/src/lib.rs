//! Validation for pictograph records and datasets.
//!
//! - [`validate_structure`]: checks a raw record before conversion
//! - [`validate_dataset`]: cross-record consistency of a built index
//! - [`validate_round_trip`]: a typed record survives flatten-and-reread
//!
//! Reports are plain data and are always returned, valid or not.

pub mod dataset;
pub mod issue;
pub mod report;
pub mod round_trip;
pub mod structure;

pub use dataset::validate_dataset;
pub use issue::{Category, Issue, Severity};
pub use report::{Finding, IntegrityReport, ValidationReport};
pub use round_trip::validate_round_trip;
pub use structure::validate_structure;
