//! Compass point aliases. Default: `N`.

use glyph_model::Location;

use super::CanonicalFamily;

impl CanonicalFamily for Location {
    const FAMILY: &'static str = "location";

    fn default_value() -> Self {
        Location::N
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "n" | "north" => Some(Location::N),
            "ne" | "northeast" => Some(Location::NE),
            "e" | "east" => Some(Location::E),
            "se" | "southeast" => Some(Location::SE),
            "s" | "south" => Some(Location::S),
            "sw" | "southwest" => Some(Location::SW),
            "w" | "west" => Some(Location::W),
            "nw" | "northwest" => Some(Location::NW),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::canonical::canonicalize_str;
    use glyph_model::Location;

    #[test]
    fn long_and_short_forms() {
        assert_eq!(canonicalize_str::<Location>("SW").value, Location::SW);
        assert_eq!(canonicalize_str::<Location>("north-east").value, Location::NE);
        assert_eq!(canonicalize_str::<Location>("West").value, Location::W);
    }

    #[test]
    fn unknown_defaults_to_north() {
        let result = canonicalize_str::<Location>("up");
        assert_eq!(result.value, Location::N);
        assert!(result.is_fallback());
    }
}
