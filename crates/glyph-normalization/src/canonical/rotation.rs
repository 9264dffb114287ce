//! Rotation direction aliases. Default: `None`.

use glyph_model::RotationDirection;

use super::CanonicalFamily;

impl CanonicalFamily for RotationDirection {
    const FAMILY: &'static str = "rotation direction";

    fn default_value() -> Self {
        RotationDirection::None
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "cw" | "clockwise" | "clock" => Some(RotationDirection::Clockwise),
            "ccw" | "counterclockwise" | "counter" | "anticlockwise" => {
                Some(RotationDirection::CounterClockwise)
            }
            "none" | "norot" | "norotation" => Some(RotationDirection::None),
            _ => None,
        }
    }
}
