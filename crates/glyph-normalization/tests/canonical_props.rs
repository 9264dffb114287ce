use glyph_model::{Location, MotionKind, Orientation, RotationDirection, Turns};
use glyph_normalization::{
    CanonicalFamily, NormalizeOptions, Resolution, canonicalize, canonicalize_str, normalize,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn falls_back_or_matches<T: CanonicalFamily + PartialEq + std::fmt::Debug>(raw: &str) {
    let result = canonicalize_str::<T>(raw);
    if result.resolution != Resolution::Matched {
        assert_eq!(result.value, T::default_value());
    }
}

proptest! {
    #[test]
    fn canonicalization_is_total(raw in ".{0,24}") {
        falls_back_or_matches::<MotionKind>(&raw);
        falls_back_or_matches::<RotationDirection>(&raw);
        falls_back_or_matches::<Location>(&raw);
        falls_back_or_matches::<Orientation>(&raw);
        falls_back_or_matches::<Turns>(&raw);
    }

    #[test]
    fn canonicalization_ignores_case_and_padding(
        location in prop::sample::select(Location::ALL.to_vec()),
        pad in " {0,3}",
        upper in any::<bool>(),
    ) {
        let code = if upper {
            location.code().to_uppercase()
        } else {
            location.code().to_string()
        };
        let raw = format!("{pad}{code}{pad}");
        prop_assert_eq!(canonicalize_str::<Location>(&raw).value, location);
    }

    #[test]
    fn half_turn_numbers_are_kept_exactly(halves in 0u32..200) {
        let value = f64::from(halves) / 2.0;
        let canonical = canonicalize::<Turns>(Some(&json!(value)));
        prop_assert_eq!(canonical.resolution, Resolution::Matched);
        prop_assert_eq!(canonical.value, Turns::from_halves(halves));
    }

    #[test]
    fn off_grid_numbers_are_flagged(value in 0.0f64..100.0) {
        prop_assume!((value * 2.0).fract() != 0.0);
        let canonical = canonicalize::<Turns>(Some(&json!(value)));
        prop_assert_eq!(canonical.resolution, Resolution::Unrecognized);
        prop_assert_eq!(canonical.value, Turns::ZERO);
    }

    #[test]
    fn any_string_subfields_never_fail_normalization(
        motion in ".{1,12}",
        rot in ".{0,12}",
        loc in ".{0,12}",
        turns in ".{0,12}",
    ) {
        let raw = json!({
            "letter": "A",
            "blue_motion_type": motion,
            "blue_prop_rot_dir": rot,
            "blue_start_loc": loc,
            "blue_turns": turns,
        });
        let record = normalize(&raw, &NormalizeOptions::default());
        prop_assert!(record.is_ok());
        let record = record.unwrap_or_default();
        prop_assert!(record.check_invariants().is_ok());
    }
}

#[test]
fn every_motion_code_resolves_to_itself() {
    for kind in MotionKind::ALL {
        let raw = Value::from(kind.code());
        assert_eq!(canonicalize::<MotionKind>(Some(&raw)).value, kind);
    }
}
