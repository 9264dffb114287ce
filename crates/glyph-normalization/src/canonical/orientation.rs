//! Orientation aliases. Default: `In`.

use glyph_model::Orientation;

use super::CanonicalFamily;

impl CanonicalFamily for Orientation {
    const FAMILY: &'static str = "orientation";

    fn default_value() -> Self {
        Orientation::In
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "in" => Some(Orientation::In),
            "out" => Some(Orientation::Out),
            "clock" | "cw" | "clockwise" => Some(Orientation::Clockwise),
            "counter" | "ccw" | "counterclockwise" => Some(Orientation::CounterClockwise),
            _ => None,
        }
    }
}
