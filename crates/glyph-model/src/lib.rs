//! Pictograph data model.
//!
//! Strongly typed records, motion channels, classification tags and the
//! per-row error taxonomy shared by every other crate in the workspace.
//! Nothing here knows about raw input; see `glyph-normalization` for the
//! untyped boundary.

pub mod classification;
pub mod enums;
pub mod error;
pub mod letter;
pub mod record;
pub mod turns;

pub use classification::{ElementalTag, GlyphClassification, PatternMode, SpatialRelation};
pub use enums::{Location, MotionKind, Orientation, RotationDirection};
pub use error::{
    ConvertError, ProcessingError, ProcessingStage, ValidationError, ValidationErrorKind,
};
pub use letter::{DASH_MARKER, Letter, LetterType, catalogue};
pub use record::{ChannelRole, MotionChannel, PictographRecord, PositionId};
pub use turns::{INDETERMINATE_CODE, Turns};
