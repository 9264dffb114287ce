//! Record classification.

use glyph_model::{
    GlyphClassification, MotionChannel, PatternMode, PictographRecord, SpatialRelation,
};

/// Derives the classification tags of a record, or `None` for a blank one.
///
/// Pure: the same record always yields the same classification. Letters
/// outside the catalogue get `letter_type: None`; the pattern mode and its
/// elemental tag need both channels.
pub fn classify(record: &PictographRecord) -> Option<GlyphClassification> {
    let letter = record.letter.as_ref()?;
    let pattern_mode = record
        .channel_pair()
        .map(|(primary, secondary)| pattern_mode(primary, secondary));
    Some(GlyphClassification {
        letter_type: letter.letter_type(),
        pattern_mode,
        elemental_tag: pattern_mode.map(|mode| mode.elemental_tag()),
        has_dash: letter.has_dash(),
    })
}

/// Classifies a record and stores the result on it.
pub fn classify_in_place(record: &mut PictographRecord) {
    let classification = classify(record);
    record.set_classification(classification);
}

/// Pattern mode of a channel pair: start-location relation combined with
/// rotation-direction agreement.
pub fn pattern_mode(primary: &MotionChannel, secondary: &MotionChannel) -> PatternMode {
    let relation = SpatialRelation::between(primary.start_location, secondary.start_location);
    let same_direction = primary.rotation_direction == secondary.rotation_direction;
    PatternMode::from_parts(relation, same_direction)
}
