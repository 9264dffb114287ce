//! Typed record back to the flat raw schema.
//!
//! Writes every field with its canonical source spelling, so normalizing
//! the output yields the same record (classification aside).

use serde_json::Value;

use glyph_model::{ChannelRole, MotionChannel, PictographRecord};

use crate::fields::{self, ChannelField};
use crate::options::NormalizeOptions;
use crate::raw::RawRecord;

/// Flattens a record into `column -> text` form.
///
/// Blank records produce no `letter` column; absent channels and positions
/// produce no columns at all.
pub fn to_raw(record: &PictographRecord, options: &NormalizeOptions) -> RawRecord {
    let mut raw = RawRecord::new();
    if let Some(letter) = &record.letter {
        raw.insert(fields::LETTER.to_string(), Value::from(letter.as_str()));
    }
    if let Some(start) = &record.start_position {
        raw.insert(fields::START_POS.to_string(), Value::from(start.as_str()));
    }
    if let Some(end) = &record.end_position {
        raw.insert(fields::END_POS.to_string(), Value::from(end.as_str()));
    }
    for (role, channel) in record.channels() {
        write_channel(&mut raw, role, channel, options);
    }
    raw
}

fn write_channel(
    raw: &mut RawRecord,
    role: ChannelRole,
    channel: &MotionChannel,
    options: &NormalizeOptions,
) {
    for field in ChannelField::ALL {
        let text = match field {
            ChannelField::MotionType => channel.motion_kind.code().to_string(),
            ChannelField::PropRotDir => channel.rotation_direction.code().to_string(),
            ChannelField::StartLoc => channel.start_location.code().to_string(),
            ChannelField::EndLoc => channel.end_location.code().to_string(),
            ChannelField::Turns => channel.turns.code(),
            ChannelField::StartOri => channel.start_orientation.code().to_string(),
            ChannelField::EndOri => channel.end_orientation.code().to_string(),
        };
        raw.insert(options.column(role, field), Value::String(text));
    }
}
