//! Turn counts. Default: zero turns.
//!
//! Numbers (or numeric strings) that are a whole number of half turns become
//! finite counts; the float spellings become `Indeterminate`. Negative,
//! non-finite and off-grid numbers ("1.25") are unrecognized.

use glyph_model::Turns;

use super::CanonicalFamily;

impl CanonicalFamily for Turns {
    const FAMILY: &'static str = "turns";

    fn default_value() -> Self {
        Turns::ZERO
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "fl" | "float" | "indeterminate" => Some(Turns::Indeterminate),
            _ => None,
        }
    }

    fn from_number(value: f64) -> Option<Self> {
        Turns::from_f64(value)
    }
}
