//! Typed pictograph records.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::classification::GlyphClassification;
use crate::enums::{Location, MotionKind, Orientation, RotationDirection};
use crate::error::{ProcessingError, ProcessingStage};
use crate::letter::Letter;
use crate::turns::Turns;

/// Which of the two channels a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRole {
    Primary,
    Secondary,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 2] = [ChannelRole::Primary, ChannelRole::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelRole::Primary => "primary",
            ChannelRole::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One independent movement channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionChannel {
    pub motion_kind: MotionKind,
    pub rotation_direction: RotationDirection,
    pub start_location: Location,
    pub end_location: Location,
    pub start_orientation: Orientation,
    pub end_orientation: Orientation,
    pub turns: Turns,
}

impl MotionChannel {
    /// A channel with every attribute at its documented default.
    pub fn with_kind(motion_kind: MotionKind) -> Self {
        Self {
            motion_kind,
            rotation_direction: RotationDirection::None,
            start_location: Location::N,
            end_location: Location::N,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            turns: if motion_kind.allows_indeterminate_turns() {
                Turns::Indeterminate
            } else {
                Turns::ZERO
            },
        }
    }

    /// Indeterminate turns are only valid on float motions.
    pub fn turns_consistent(&self) -> bool {
        !self.turns.is_indeterminate() || self.motion_kind.allows_indeterminate_turns()
    }
}

/// Opaque position identifier ("alpha1", "beta5", ...).
///
/// Used as an index key; never parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(String);

impl PositionId {
    /// Returns `None` for an empty identifier.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PositionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PositionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One dataset entry.
///
/// A record is blank iff `letter` is `None`; blank records never carry a
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PictographRecord {
    pub letter: Option<Letter>,
    pub start_position: Option<PositionId>,
    pub end_position: Option<PositionId>,
    pub primary: Option<MotionChannel>,
    pub secondary: Option<MotionChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<GlyphClassification>,
}

impl PictographRecord {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(letter: Letter) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_positions(mut self, start: Option<PositionId>, end: Option<PositionId>) -> Self {
        self.start_position = start;
        self.end_position = end;
        self
    }

    #[must_use]
    pub fn with_channel(mut self, role: ChannelRole, channel: MotionChannel) -> Self {
        match role {
            ChannelRole::Primary => self.primary = Some(channel),
            ChannelRole::Secondary => self.secondary = Some(channel),
        }
        self
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_none()
    }

    pub fn channel(&self, role: ChannelRole) -> Option<&MotionChannel> {
        match role {
            ChannelRole::Primary => self.primary.as_ref(),
            ChannelRole::Secondary => self.secondary.as_ref(),
        }
    }

    /// Present channels with their roles, primary first.
    pub fn channels(&self) -> impl Iterator<Item = (ChannelRole, &MotionChannel)> {
        ChannelRole::ALL
            .into_iter()
            .filter_map(|role| self.channel(role).map(|channel| (role, channel)))
    }

    /// Both channels, if both are present.
    pub fn channel_pair(&self) -> Option<(&MotionChannel, &MotionChannel)> {
        Some((self.primary.as_ref()?, self.secondary.as_ref()?))
    }

    /// Attaches a classification. Ignored on blank records.
    pub fn set_classification(&mut self, classification: Option<GlyphClassification>) {
        self.classification = if self.is_blank() { None } else { classification };
    }

    /// Checks the record-level invariants.
    pub fn check_invariants(&self) -> Result<(), ProcessingError> {
        if self.is_blank() && self.classification.is_some() {
            return Err(ProcessingError::new(
                ProcessingStage::Classify,
                "blank record carries a classification",
            ));
        }
        for (role, channel) in self.channels() {
            if !channel.turns_consistent() {
                return Err(ProcessingError::new(
                    ProcessingStage::Normalize,
                    format!(
                        "{role} channel has indeterminate turns on a {} motion",
                        channel.motion_kind
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_drops_classification() {
        let mut record = PictographRecord::blank();
        record.set_classification(Some(GlyphClassification {
            letter_type: None,
            pattern_mode: None,
            elemental_tag: None,
            has_dash: false,
        }));
        assert!(record.classification.is_none());
        assert!(record.check_invariants().is_ok());
    }

    #[test]
    fn indeterminate_turns_outside_float_break_invariants() {
        let mut channel = MotionChannel::with_kind(MotionKind::Shift);
        channel.turns = Turns::Indeterminate;
        let letter = Letter::new("A").expect("letter");
        let record = PictographRecord::new(letter).with_channel(ChannelRole::Primary, channel);
        let error = record.check_invariants().expect_err("invariant violation");
        assert_eq!(error.stage, ProcessingStage::Normalize);
    }

    #[test]
    fn float_defaults_to_indeterminate_turns() {
        assert!(MotionChannel::with_kind(MotionKind::Float).turns.is_indeterminate());
        assert_eq!(MotionChannel::with_kind(MotionKind::Dash).turns, Turns::ZERO);
    }

    #[test]
    fn channels_iterates_present_roles() {
        let letter = Letter::new("Φ").expect("letter");
        let record = PictographRecord::new(letter)
            .with_channel(ChannelRole::Secondary, MotionChannel::with_kind(MotionKind::Dash));
        let roles: Vec<ChannelRole> = record.channels().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![ChannelRole::Secondary]);
        assert!(record.channel_pair().is_none());
    }
}
