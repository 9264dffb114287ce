//! Classification tags derived from a record.
//!
//! The combination tables live here, next to the types they map between.
//! Computing the inputs from a record is done by the classifier in
//! `glyph-core`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Location;
use crate::letter::LetterType;

/// How the two channels' start locations relate on the compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialRelation {
    /// Diametrically opposite points (N/S, E/W, NE/SW, NW/SE).
    Split,
    /// The same point.
    Together,
    /// Any other pairing.
    Quarter,
}

impl SpatialRelation {
    pub fn between(first: Location, second: Location) -> Self {
        if first == second {
            SpatialRelation::Together
        } else if first.opposite() == second {
            SpatialRelation::Split
        } else {
            SpatialRelation::Quarter
        }
    }
}

/// Directional-pattern mode of a channel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternMode {
    SplitSame,
    SplitOpposite,
    TogetherSame,
    TogetherOpposite,
    QuarterSame,
    QuarterOpposite,
}

impl PatternMode {
    pub const ALL: [PatternMode; 6] = [
        PatternMode::SplitSame,
        PatternMode::SplitOpposite,
        PatternMode::TogetherSame,
        PatternMode::TogetherOpposite,
        PatternMode::QuarterSame,
        PatternMode::QuarterOpposite,
    ];

    /// Combines a spatial relation with rotation-direction agreement.
    pub fn from_parts(relation: SpatialRelation, same_direction: bool) -> Self {
        match (relation, same_direction) {
            (SpatialRelation::Split, true) => PatternMode::SplitSame,
            (SpatialRelation::Split, false) => PatternMode::SplitOpposite,
            (SpatialRelation::Together, true) => PatternMode::TogetherSame,
            (SpatialRelation::Together, false) => PatternMode::TogetherOpposite,
            (SpatialRelation::Quarter, true) => PatternMode::QuarterSame,
            (SpatialRelation::Quarter, false) => PatternMode::QuarterOpposite,
        }
    }

    pub fn relation(&self) -> SpatialRelation {
        match self {
            PatternMode::SplitSame | PatternMode::SplitOpposite => SpatialRelation::Split,
            PatternMode::TogetherSame | PatternMode::TogetherOpposite => SpatialRelation::Together,
            PatternMode::QuarterSame | PatternMode::QuarterOpposite => SpatialRelation::Quarter,
        }
    }

    pub fn is_same_direction(&self) -> bool {
        matches!(
            self,
            PatternMode::SplitSame | PatternMode::TogetherSame | PatternMode::QuarterSame
        )
    }

    /// The elemental tag this mode maps to, one-to-one.
    pub fn elemental_tag(&self) -> ElementalTag {
        match self {
            PatternMode::SplitSame => ElementalTag::Water,
            PatternMode::SplitOpposite => ElementalTag::Fire,
            PatternMode::TogetherSame => ElementalTag::Earth,
            PatternMode::TogetherOpposite => ElementalTag::Air,
            PatternMode::QuarterSame => ElementalTag::Sun,
            PatternMode::QuarterOpposite => ElementalTag::Moon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternMode::SplitSame => "SplitSame",
            PatternMode::SplitOpposite => "SplitOpposite",
            PatternMode::TogetherSame => "TogetherSame",
            PatternMode::TogetherOpposite => "TogetherOpposite",
            PatternMode::QuarterSame => "QuarterSame",
            PatternMode::QuarterOpposite => "QuarterOpposite",
        }
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementalTag {
    Fire,
    Water,
    Earth,
    Air,
    Sun,
    Moon,
}

impl ElementalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementalTag::Fire => "Fire",
            ElementalTag::Water => "Water",
            ElementalTag::Earth => "Earth",
            ElementalTag::Air => "Air",
            ElementalTag::Sun => "Sun",
            ElementalTag::Moon => "Moon",
        }
    }
}

impl fmt::Display for ElementalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic tags used to decide how a pictograph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphClassification {
    /// `None` when the letter is outside the catalogue.
    pub letter_type: Option<LetterType>,
    /// `None` unless both channels are present.
    pub pattern_mode: Option<PatternMode>,
    /// Follows `pattern_mode`.
    pub elemental_tag: Option<ElementalTag>,
    pub has_dash: bool,
}
