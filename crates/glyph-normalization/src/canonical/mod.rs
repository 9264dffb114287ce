//! Canonicalization of loosely-typed raw fields.
//!
//! One module per enum family, each holding that family's only alias table
//! and its documented default. Every function here is total: any input maps
//! to some variant, and the result says whether the default was used.

mod location;
mod motion;
mod orientation;
mod rotation;
mod turns;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a canonical value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The raw value matched an alias.
    Matched,
    /// The field was absent, null or empty; the default was used.
    Absent,
    /// The raw value was present but not recognized; the default was used.
    Unrecognized,
}

/// A canonical value together with how it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonical<T> {
    pub value: T,
    pub resolution: Resolution,
}

impl<T> Canonical<T> {
    pub fn matched(value: T) -> Self {
        Self {
            value,
            resolution: Resolution::Matched,
        }
    }

    /// True when the family default stood in for the raw value.
    pub fn is_fallback(&self) -> bool {
        !matches!(self.resolution, Resolution::Matched)
    }
}

/// An enum family with an alias table and a documented default.
pub trait CanonicalFamily: Copy + Sized {
    /// Family name used in diagnostics.
    const FAMILY: &'static str;

    /// Value used whenever no alias matches.
    fn default_value() -> Self;

    /// Looks up a compacted key (see [`compact_key`]).
    fn from_key(key: &str) -> Option<Self>;

    /// Interprets a numeric raw value. Most families have none.
    fn from_number(_value: f64) -> Option<Self> {
        None
    }
}

/// Lowercase alphanumeric characters only: "Counter_Clockwise " becomes
/// "counterclockwise", "no-rot" becomes "norot".
pub fn compact_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonicalizes a raw string.
pub fn canonicalize_str<T: CanonicalFamily>(raw: &str) -> Canonical<T> {
    let key = compact_key(raw);
    if key.is_empty() {
        return Canonical {
            value: T::default_value(),
            resolution: Resolution::Absent,
        };
    }
    if let Some(value) = T::from_key(&key) {
        return Canonical::matched(value);
    }
    if let Ok(number) = raw.trim().parse::<f64>()
        && let Some(value) = T::from_number(number)
    {
        return Canonical::matched(value);
    }
    Canonical {
        value: T::default_value(),
        resolution: Resolution::Unrecognized,
    }
}

/// Canonicalizes an optional raw JSON value.
///
/// Absent and null inputs resolve to the default as `Absent`. Strings go
/// through the alias table, numbers through [`CanonicalFamily::from_number`].
/// Anything else is `Unrecognized`.
pub fn canonicalize<T: CanonicalFamily>(raw: Option<&Value>) -> Canonical<T> {
    match raw {
        None | Some(Value::Null) => Canonical {
            value: T::default_value(),
            resolution: Resolution::Absent,
        },
        Some(Value::String(text)) => canonicalize_str(text),
        Some(Value::Number(number)) => match number.as_f64().and_then(T::from_number) {
            Some(value) => Canonical::matched(value),
            None => Canonical {
                value: T::default_value(),
                resolution: Resolution::Unrecognized,
            },
        },
        Some(_) => Canonical {
            value: T::default_value(),
            resolution: Resolution::Unrecognized,
        },
    }
}
