//! Type-safe enumerations for motion channel attributes.
//!
//! Source data spells these attributes as free-form strings ("pro", "CW",
//! "counter", ...). The enums here are the canonical forms; turning raw
//! strings into them is the job of the canonicalizer in
//! `glyph-normalization`, which keeps the one alias table per family.
//!
//! Each enum exposes `code()`, the spelling written back out when a record
//! is rendered to the flat column schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of movement a channel performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MotionKind {
    /// No travel; the prop stays where it started.
    Stationary,
    /// Travels between locations, spinning with the travel ("pro").
    Shift,
    /// Travels between locations, spinning against the travel ("anti").
    RotateInPlace,
    /// Straight-line travel through the centre.
    Dash,
    /// Travel with no committed spin; turns are indeterminate.
    Float,
}

impl MotionKind {
    pub const ALL: [MotionKind; 5] = [
        MotionKind::Stationary,
        MotionKind::Shift,
        MotionKind::RotateInPlace,
        MotionKind::Dash,
        MotionKind::Float,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Stationary => "Stationary",
            MotionKind::Shift => "Shift",
            MotionKind::RotateInPlace => "RotateInPlace",
            MotionKind::Dash => "Dash",
            MotionKind::Float => "Float",
        }
    }

    /// Returns the spelling used in source tables.
    pub fn code(&self) -> &'static str {
        match self {
            MotionKind::Stationary => "static",
            MotionKind::Shift => "pro",
            MotionKind::RotateInPlace => "anti",
            MotionKind::Dash => "dash",
            MotionKind::Float => "float",
        }
    }

    /// Returns true if this motion may carry indeterminate turns.
    pub fn allows_indeterminate_turns(&self) -> bool {
        matches!(self, MotionKind::Float)
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spin direction of a channel's prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    /// No rotation. Compared by equality like the other variants.
    None,
}

impl RotationDirection {
    pub const ALL: [RotationDirection; 3] = [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
        RotationDirection::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "Clockwise",
            RotationDirection::CounterClockwise => "CounterClockwise",
            RotationDirection::None => "None",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::None => "no_rot",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eight compass points on the grid.
///
/// Variants are declared clockwise starting at north, so the declaration
/// index doubles as the point's position on the compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// Position on the compass, 0 = north, increasing clockwise.
    pub fn compass_index(&self) -> usize {
        match self {
            Location::N => 0,
            Location::NE => 1,
            Location::E => 2,
            Location::SE => 3,
            Location::S => 4,
            Location::SW => 5,
            Location::W => 6,
            Location::NW => 7,
        }
    }

    /// The diametrically opposite point.
    pub fn opposite(&self) -> Location {
        match self {
            Location::N => Location::S,
            Location::NE => Location::SW,
            Location::E => Location::W,
            Location::SE => Location::NW,
            Location::S => Location::N,
            Location::SW => Location::NE,
            Location::W => Location::E,
            Location::NW => Location::SE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::N => "N",
            Location::NE => "NE",
            Location::E => "E",
            Location::SE => "SE",
            Location::S => "S",
            Location::SW => "SW",
            Location::W => "W",
            Location::NW => "NW",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the prop faces relative to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    In,
    Out,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clockwise,
        Orientation::CounterClockwise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::In => "In",
            Orientation::Out => "Out",
            Orientation::Clockwise => "Clockwise",
            Orientation::CounterClockwise => "CounterClockwise",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clockwise => "clock",
            Orientation::CounterClockwise => "counter",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for location in Location::ALL {
            assert_eq!(location.opposite().opposite(), location);
            assert_ne!(location.opposite(), location);
        }
    }

    #[test]
    fn opposite_is_four_steps_around_the_compass() {
        for location in Location::ALL {
            let expected = (location.compass_index() + 4) % 8;
            assert_eq!(location.opposite().compass_index(), expected);
        }
    }

    #[test]
    fn only_float_allows_indeterminate_turns() {
        let allowed: Vec<MotionKind> = MotionKind::ALL
            .into_iter()
            .filter(MotionKind::allows_indeterminate_turns)
            .collect();
        assert_eq!(allowed, vec![MotionKind::Float]);
    }
}
