//! Pictograph dataset engine.
//!
//! Classification, batch conversion and the immutable dataset index built
//! on top of `glyph-normalization`.

pub mod batch;
pub mod classify;
pub mod handle;
pub mod index;

pub use batch::{
    BatchResult, convert_many, convert_many_with_progress, convert_one, convert_outcomes,
    normalize_one,
};
pub use classify::{classify, classify_in_place, pattern_mode};
pub use handle::DatasetHandle;
pub use index::{DatasetIndex, LoadReport, RowFailure};
