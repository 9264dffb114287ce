//! Letter tags and the static letter catalogue.
//!
//! A letter identifies a record's movement pattern. The catalogue is closed:
//! 47 tags in six letter types. Letters outside the catalogue are still
//! representable (source data is not trusted), they simply have no type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Marker that distinguishes dash letters ("W-", "Φ-", ...).
pub const DASH_MARKER: char = '-';

/// A letter tag as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(String);

impl Letter {
    /// Wraps a tag, trimming surrounding whitespace. Returns `None` for an
    /// empty tag.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True iff the tag contains the dash marker.
    pub fn has_dash(&self) -> bool {
        self.0.contains(DASH_MARKER)
    }

    /// Letter type from the static catalogue, `None` for unknown tags.
    pub fn letter_type(&self) -> Option<LetterType> {
        LetterType::of(&self.0)
    }

    pub fn is_catalogued(&self) -> bool {
        self.letter_type().is_some()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Letter {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Grouping of letters by the motions their channels perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterType {
    /// Dual-shift: both channels shift.
    Type1,
    /// Shift: one channel shifts, the other is static.
    Type2,
    /// Cross-shift: one channel shifts, the other dashes.
    Type3,
    /// Dash: one channel dashes, the other is static.
    Type4,
    /// Dual-dash: both channels dash.
    Type5,
    /// Static: neither channel travels.
    Type6,
}

const TYPE1_LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V",
];
const TYPE2_LETTERS: &[&str] = &["W", "X", "Y", "Z", "Σ", "Δ", "θ", "Ω"];
const TYPE3_LETTERS: &[&str] = &["W-", "X-", "Y-", "Z-", "Σ-", "Δ-", "θ-", "Ω-"];
const TYPE4_LETTERS: &[&str] = &["Φ", "Ψ", "Λ"];
const TYPE5_LETTERS: &[&str] = &["Φ-", "Ψ-", "Λ-"];
const TYPE6_LETTERS: &[&str] = &["α", "β", "Γ"];

impl LetterType {
    pub const ALL: [LetterType; 6] = [
        LetterType::Type1,
        LetterType::Type2,
        LetterType::Type3,
        LetterType::Type4,
        LetterType::Type5,
        LetterType::Type6,
    ];

    /// Looks a tag up in the catalogue. Exact, case-sensitive match: "a" is
    /// not "A", and Greek capitals differ from their lowercase forms.
    pub fn of(tag: &str) -> Option<LetterType> {
        let tag = tag.trim();
        LetterType::ALL
            .into_iter()
            .find(|letter_type| letter_type.letters().contains(&tag))
    }

    /// Catalogue letters of this type, in alphabet order.
    pub fn letters(&self) -> &'static [&'static str] {
        match self {
            LetterType::Type1 => TYPE1_LETTERS,
            LetterType::Type2 => TYPE2_LETTERS,
            LetterType::Type3 => TYPE3_LETTERS,
            LetterType::Type4 => TYPE4_LETTERS,
            LetterType::Type5 => TYPE5_LETTERS,
            LetterType::Type6 => TYPE6_LETTERS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterType::Type1 => "Type1",
            LetterType::Type2 => "Type2",
            LetterType::Type3 => "Type3",
            LetterType::Type4 => "Type4",
            LetterType::Type5 => "Type5",
            LetterType::Type6 => "Type6",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LetterType::Type1 => "Dual-Shift",
            LetterType::Type2 => "Shift",
            LetterType::Type3 => "Cross-Shift",
            LetterType::Type4 => "Dash",
            LetterType::Type5 => "Dual-Dash",
            LetterType::Type6 => "Static",
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every catalogue letter, grouped by type in alphabet order.
pub fn catalogue() -> impl Iterator<Item = (LetterType, &'static str)> {
    LetterType::ALL.into_iter().flat_map(|letter_type| {
        letter_type
            .letters()
            .iter()
            .map(move |letter| (letter_type, *letter))
    })
}
