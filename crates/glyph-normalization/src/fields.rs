//! Column schema of the raw record boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const LETTER: &str = "letter";
pub const START_POS: &str = "start_pos";
pub const END_POS: &str = "end_pos";

/// Per-channel sub-fields, each stored under `<prefix>_<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChannelField {
    MotionType,
    PropRotDir,
    StartLoc,
    EndLoc,
    Turns,
    StartOri,
    EndOri,
}

impl ChannelField {
    pub const ALL: [ChannelField; 7] = [
        ChannelField::MotionType,
        ChannelField::PropRotDir,
        ChannelField::StartLoc,
        ChannelField::EndLoc,
        ChannelField::Turns,
        ChannelField::StartOri,
        ChannelField::EndOri,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChannelField::MotionType => "motion_type",
            ChannelField::PropRotDir => "prop_rot_dir",
            ChannelField::StartLoc => "start_loc",
            ChannelField::EndLoc => "end_loc",
            ChannelField::Turns => "turns",
            ChannelField::StartOri => "start_ori",
            ChannelField::EndOri => "end_ori",
        }
    }

    /// Part of the fixed source schema. The others are optional columns.
    pub fn is_schema_required(&self) -> bool {
        matches!(
            self,
            ChannelField::MotionType
                | ChannelField::PropRotDir
                | ChannelField::StartLoc
                | ChannelField::EndLoc
        )
    }
}

impl fmt::Display for ChannelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
