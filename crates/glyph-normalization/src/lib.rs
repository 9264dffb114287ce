//! Pictograph record normalization.
//!
//! This crate owns the untyped boundary: it turns loosely-typed raw
//! mappings (CSV rows, ad-hoc JSON) into `PictographRecord`s and back.
//!
//! - [`canonical`]: per-family alias tables and total canonicalization
//! - [`normalize`]: raw record to typed record
//! - [`denormalize`]: typed record to the flat column schema

pub mod canonical;
pub mod denormalize;
pub mod fields;
pub mod normalize;
pub mod options;
pub mod raw;

pub use canonical::{
    Canonical, CanonicalFamily, Resolution, canonicalize, canonicalize_str, compact_key,
};
pub use denormalize::to_raw;
pub use fields::ChannelField;
pub use normalize::{channel_turns, normalize, normalize_channel, normalize_record};
pub use options::NormalizeOptions;
pub use raw::{RawChannel, RawRecord, present, value_kind};
