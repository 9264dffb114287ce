use serde::{Deserialize, Serialize};

use glyph_model::ChannelRole;

use crate::fields::ChannelField;

/// Options for normalization.
///
/// Channel prefixes map the source's colour-named columns onto the
/// primary/secondary roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Column prefix of the primary channel. Default: "blue".
    pub primary_prefix: String,
    /// Column prefix of the secondary channel. Default: "red".
    pub secondary_prefix: String,
    /// Suffix of the nested per-channel object in ad-hoc records.
    /// Default: "attributes" (`blue_attributes: { motion_type: ... }`).
    pub attributes_suffix: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            primary_prefix: "blue".to_string(),
            secondary_prefix: "red".to_string(),
            attributes_suffix: "attributes".to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.primary_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_secondary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.secondary_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_attributes_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.attributes_suffix = suffix.into();
        self
    }

    pub fn prefix(&self, role: ChannelRole) -> &str {
        match role {
            ChannelRole::Primary => &self.primary_prefix,
            ChannelRole::Secondary => &self.secondary_prefix,
        }
    }

    /// Flat column name, e.g. `blue_motion_type`.
    pub fn column(&self, role: ChannelRole, field: ChannelField) -> String {
        format!("{}_{}", self.prefix(role), field.key())
    }

    /// Nested object key, e.g. `blue_attributes`.
    pub fn attributes_key(&self, role: ChannelRole) -> String {
        format!("{}_{}", self.prefix(role), self.attributes_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns() {
        let options = NormalizeOptions::default();
        assert_eq!(
            options.column(ChannelRole::Primary, ChannelField::PropRotDir),
            "blue_prop_rot_dir"
        );
        assert_eq!(options.attributes_key(ChannelRole::Secondary), "red_attributes");
    }

    #[test]
    fn prefixes_are_configurable() {
        let options = NormalizeOptions::new()
            .with_primary_prefix("left")
            .with_secondary_prefix("right");
        assert_eq!(
            options.column(ChannelRole::Secondary, ChannelField::Turns),
            "right_turns"
        );
    }
}
