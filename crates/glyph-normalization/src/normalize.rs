//! Raw record to `PictographRecord` conversion.

use serde_json::Value;

use glyph_model::{
    ChannelRole, Letter, Location, MotionChannel, MotionKind, Orientation, PictographRecord,
    PositionId, RotationDirection, Turns, ValidationError,
};

use crate::canonical::{Canonical, Resolution, canonicalize};
use crate::fields::{self, ChannelField};
use crate::options::NormalizeOptions;
use crate::raw::{RawChannel, RawRecord, present, value_kind};

/// Normalizes one raw record.
///
/// Only structural problems fail: a non-mapping input, a missing or
/// non-string `letter`, non-string positions, or a nested channel object
/// that is not a mapping. Every channel sub-field is canonicalized on its
/// own and falls back to its family default.
pub fn normalize(
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<PictographRecord, ValidationError> {
    let Some(record) = raw.as_object() else {
        return Err(ValidationError::not_a_mapping("record", value_kind(raw)));
    };
    normalize_record(record, options)
}

/// Normalizes a raw mapping. See [`normalize`].
pub fn normalize_record(
    record: &RawRecord,
    options: &NormalizeOptions,
) -> Result<PictographRecord, ValidationError> {
    let letter = read_letter(record)?;
    let start_position = read_position(record, fields::START_POS)?;
    let end_position = read_position(record, fields::END_POS)?;

    let mut normalized =
        PictographRecord::new(letter).with_positions(start_position, end_position);
    for role in ChannelRole::ALL {
        let channel = RawChannel::resolve(record, role, options)?;
        if let Some(motion) = normalize_channel(&channel) {
            normalized = normalized.with_channel(role, motion);
        }
    }
    Ok(normalized)
}

fn read_letter(record: &RawRecord) -> Result<Letter, ValidationError> {
    match present(record.get(fields::LETTER)) {
        None => Err(ValidationError::missing(fields::LETTER)),
        Some(Value::String(text)) => {
            Letter::new(text).ok_or_else(|| ValidationError::missing(fields::LETTER))
        }
        Some(other) => Err(ValidationError::wrong_type(
            fields::LETTER,
            "string",
            value_kind(other),
        )),
    }
}

fn read_position(record: &RawRecord, field: &str) -> Result<Option<PositionId>, ValidationError> {
    match present(record.get(field)) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(PositionId::new(text)),
        Some(other) => Err(ValidationError::wrong_type(field, "string", value_kind(other))),
    }
}

/// Builds a channel from its raw fields, or `None` when the channel's
/// motion type is absent.
pub fn normalize_channel(channel: &RawChannel<'_>) -> Option<MotionChannel> {
    if !channel.is_present() {
        return None;
    }
    let motion_kind = canonicalize::<MotionKind>(channel.get(ChannelField::MotionType)).value;
    let raw_turns = canonicalize::<Turns>(channel.get(ChannelField::Turns));
    let turns = channel_turns(motion_kind, raw_turns);
    if turns != raw_turns.value {
        tracing::trace!(
            channel = %channel.role,
            motion = %motion_kind,
            turns = %turns,
            "adjusted turns to match motion kind"
        );
    }
    Some(MotionChannel {
        motion_kind,
        rotation_direction: canonicalize::<RotationDirection>(
            channel.get(ChannelField::PropRotDir),
        )
        .value,
        start_location: canonicalize::<Location>(channel.get(ChannelField::StartLoc)).value,
        end_location: canonicalize::<Location>(channel.get(ChannelField::EndLoc)).value,
        start_orientation: canonicalize::<Orientation>(channel.get(ChannelField::StartOri)).value,
        end_orientation: canonicalize::<Orientation>(channel.get(ChannelField::EndOri)).value,
        turns,
    })
}

/// Reconciles canonical turns with the motion kind.
///
/// Float motions default to indeterminate turns; indeterminate turns on any
/// other motion become zero.
pub fn channel_turns(motion_kind: MotionKind, turns: Canonical<Turns>) -> Turns {
    if motion_kind.allows_indeterminate_turns() {
        match turns.resolution {
            Resolution::Matched => turns.value,
            Resolution::Absent | Resolution::Unrecognized => Turns::Indeterminate,
        }
    } else if turns.value.is_indeterminate() {
        Turns::ZERO
    } else {
        turns.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_model::ValidationErrorKind;
    use serde_json::json;

    fn options() -> NormalizeOptions {
        NormalizeOptions::default()
    }

    #[test]
    fn non_mapping_input_is_rejected() {
        let err = normalize(&json!(["A"]), &options()).expect_err("not a mapping");
        assert_eq!(err.field, "record");
        assert!(matches!(err.kind, ValidationErrorKind::NotAMapping { .. }));
    }

    #[test]
    fn letter_must_be_a_non_empty_string() {
        let err = normalize(&json!({"letter": 7}), &options()).expect_err("number letter");
        assert_eq!(err.field, "letter");
        assert!(matches!(err.kind, ValidationErrorKind::WrongType { .. }));

        let err = normalize(&json!({"letter": "  "}), &options()).expect_err("blank letter");
        assert_eq!(err.kind, ValidationErrorKind::Missing);

        let err = normalize(&json!({"letter": null}), &options()).expect_err("null letter");
        assert_eq!(err.kind, ValidationErrorKind::Missing);
    }

    #[test]
    fn positions_must_be_strings() {
        let err = normalize(&json!({"letter": "A", "start_pos": 3}), &options())
            .expect_err("numeric position");
        assert_eq!(err.field, "start_pos");
    }

    #[test]
    fn channels_without_motion_type_are_omitted() {
        let record = normalize(
            &json!({"letter": "α", "red_motion_type": "static", "blue_start_loc": "s"}),
            &options(),
        )
        .expect("normalize");
        assert!(record.primary.is_none());
        assert!(record.secondary.is_some());
    }

    #[test]
    fn float_turns_are_indeterminate_unless_given() {
        let record = normalize(
            &json!({
                "letter": "A",
                "blue_motion_type": "float",
                "red_motion_type": "float",
                "red_turns": "1"
            }),
            &options(),
        )
        .expect("normalize");
        let primary = record.primary.expect("primary");
        let secondary = record.secondary.expect("secondary");
        assert_eq!(primary.turns, Turns::Indeterminate);
        assert_eq!(secondary.turns, Turns::from_halves(2));
    }

    #[test]
    fn indeterminate_turns_on_shift_become_zero() {
        let record = normalize(
            &json!({"letter": "B", "blue_motion_type": "pro", "blue_turns": "fl"}),
            &options(),
        )
        .expect("normalize");
        let primary = record.primary.expect("primary");
        assert_eq!(primary.turns, Turns::ZERO);
        assert!(record.check_invariants().is_ok());
    }

    #[test]
    fn nested_attributes_are_read() {
        let record = normalize(
            &json!({
                "letter": "C",
                "blue_attributes": {
                    "motion_type": "anti",
                    "prop_rot_dir": "ccw",
                    "start_loc": "e",
                    "end_loc": "s",
                    "turns": 0.5,
                    "start_ori": "out",
                    "end_ori": "clock"
                }
            }),
            &options(),
        )
        .expect("normalize");
        let primary = record.primary.expect("primary");
        assert_eq!(primary.motion_kind, MotionKind::RotateInPlace);
        assert_eq!(primary.rotation_direction, RotationDirection::CounterClockwise);
        assert_eq!(primary.start_location, Location::E);
        assert_eq!(primary.turns, Turns::from_halves(1));
        assert_eq!(primary.end_orientation, Orientation::Clockwise);
    }
}
