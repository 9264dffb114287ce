//! Turn counts.
//!
//! Turns are non-negative and always a multiple of one half, so they are
//! stored exactly as a count of half turns. Float motions carry the
//! `Indeterminate` sentinel instead of a number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Spelling of the indeterminate sentinel in source tables.
pub const INDETERMINATE_CODE: &str = "fl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turns {
    /// A finite number of turns, in half-turn units.
    Halves(u32),
    /// No committed turn count (float motions only).
    Indeterminate,
}

impl Turns {
    pub const ZERO: Turns = Turns::Halves(0);

    /// Builds a finite turn count from a number of half turns.
    pub fn from_halves(halves: u32) -> Self {
        Turns::Halves(halves)
    }

    /// Builds a finite turn count from a decimal value.
    ///
    /// Returns `None` for negative or non-finite values and for values that
    /// are not a whole number of half turns; nothing is rounded.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let halves = value * 2.0;
        if halves.fract() != 0.0 || halves > f64::from(u32::MAX) {
            return None;
        }
        Some(Turns::Halves(halves as u32))
    }

    /// Decimal value of a finite count.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Turns::Halves(halves) => Some(f64::from(*halves) / 2.0),
            Turns::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Turns::Indeterminate)
    }

    /// Spelling used in source tables ("0", "1.5", "fl").
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::ZERO
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Halves(halves) if halves % 2 == 0 => write!(f, "{}", halves / 2),
            Turns::Halves(halves) => write!(f, "{}.5", halves / 2),
            Turns::Indeterminate => f.write_str(INDETERMINATE_CODE),
        }
    }
}

impl Serialize for Turns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(INDETERMINATE_CODE),
        }
    }
}

impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Turns::from_f64(value)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid turn count: {value}"))),
            Repr::Text(text) if text == INDETERMINATE_CODE => Ok(Turns::Indeterminate),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "invalid turn count: {text}"
            ))),
        }
    }
}
