//! Motion kind aliases. Default: `Stationary`.

use glyph_model::MotionKind;

use super::CanonicalFamily;

impl CanonicalFamily for MotionKind {
    const FAMILY: &'static str = "motion kind";

    fn default_value() -> Self {
        MotionKind::Stationary
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "static" | "stationary" | "still" => Some(MotionKind::Stationary),
            "pro" | "prospin" | "shift" => Some(MotionKind::Shift),
            "anti" | "antispin" | "rotate" | "rotateinplace" => Some(MotionKind::RotateInPlace),
            "dash" => Some(MotionKind::Dash),
            "float" | "fl" => Some(MotionKind::Float),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::canonical::canonicalize_str;
    use glyph_model::MotionKind;

    #[test]
    fn source_spellings() {
        assert_eq!(canonicalize_str::<MotionKind>("pro").value, MotionKind::Shift);
        assert_eq!(
            canonicalize_str::<MotionKind>("ANTI").value,
            MotionKind::RotateInPlace
        );
        assert_eq!(canonicalize_str::<MotionKind>(" Float ").value, MotionKind::Float);
    }

    #[test]
    fn codes_round_trip() {
        for kind in MotionKind::ALL {
            assert_eq!(canonicalize_str::<MotionKind>(kind.code()).value, kind);
            assert_eq!(canonicalize_str::<MotionKind>(kind.as_str()).value, kind);
        }
    }

    #[test]
    fn unknown_defaults_to_stationary() {
        let result = canonicalize_str::<MotionKind>("cartwheel");
        assert_eq!(result.value, MotionKind::Stationary);
        assert!(result.is_fallback());
    }
}
