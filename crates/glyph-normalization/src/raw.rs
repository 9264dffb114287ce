//! The untyped input boundary.
//!
//! Raw records are string-keyed JSON mappings: CSV rows arrive as flat
//! `column -> text` maps, ad-hoc records may nest each channel under
//! `<prefix>_attributes`. Only this crate reads them.

use serde_json::{Map, Value};

use glyph_model::{ChannelRole, ValidationError};

use crate::fields::ChannelField;
use crate::options::NormalizeOptions;

/// A loosely-typed record as supplied by a source or a caller.
pub type RawRecord = Map<String, Value>;

/// Name of a JSON value's type, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Null and blank strings count as absent.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        other => Some(other),
    }
}

/// The raw sub-fields of one channel.
///
/// Flat columns take precedence over the nested attributes object.
#[derive(Debug, Clone, Copy)]
pub struct RawChannel<'a> {
    pub role: ChannelRole,
    record: &'a RawRecord,
    nested: Option<&'a RawRecord>,
    options: &'a NormalizeOptions,
}

impl<'a> RawChannel<'a> {
    /// Locates a channel's fields. Fails only when the nested attributes
    /// value exists but is not a mapping.
    pub fn resolve(
        record: &'a RawRecord,
        role: ChannelRole,
        options: &'a NormalizeOptions,
    ) -> Result<Self, ValidationError> {
        let key = options.attributes_key(role);
        let nested = match present(record.get(&key)) {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(ValidationError::wrong_type(key, "object", value_kind(other)));
            }
        };
        Ok(Self {
            role,
            record,
            nested,
            options,
        })
    }

    /// A view over the flat columns only, ignoring any nested object.
    pub fn flat(record: &'a RawRecord, role: ChannelRole, options: &'a NormalizeOptions) -> Self {
        Self {
            role,
            record,
            nested: None,
            options,
        }
    }

    pub fn get(&self, field: ChannelField) -> Option<&'a Value> {
        present(self.record.get(&self.options.column(self.role, field)))
            .or_else(|| present(self.nested?.get(field.key())))
    }

    /// A channel exists iff its motion type is present.
    pub fn is_present(&self) -> bool {
        self.get(ChannelField::MotionType).is_some()
    }

    /// The key a field was (or would be) read from, for diagnostics.
    pub fn field_name(&self, field: ChannelField) -> String {
        let flat = self.options.column(self.role, field);
        if present(self.record.get(&flat)).is_none()
            && self
                .nested
                .is_some_and(|nested| present(nested.get(field.key())).is_some())
        {
            return format!("{}.{}", self.options.attributes_key(self.role), field.key());
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => RawRecord::new(),
        }
    }

    #[test]
    fn flat_columns_win_over_nested() {
        let options = NormalizeOptions::default();
        let raw = record(json!({
            "blue_motion_type": "pro",
            "blue_attributes": {"motion_type": "anti", "turns": 1}
        }));
        let channel = RawChannel::resolve(&raw, ChannelRole::Primary, &options).expect("resolve");
        assert_eq!(channel.get(ChannelField::MotionType), Some(&json!("pro")));
        assert_eq!(channel.get(ChannelField::Turns), Some(&json!(1)));
        assert_eq!(
            channel.field_name(ChannelField::Turns),
            "blue_attributes.turns"
        );
        assert_eq!(
            channel.field_name(ChannelField::MotionType),
            "blue_motion_type"
        );
    }

    #[test]
    fn blank_motion_type_means_no_channel() {
        let options = NormalizeOptions::default();
        let raw = record(json!({"red_motion_type": "  ", "red_start_loc": "n"}));
        let channel =
            RawChannel::resolve(&raw, ChannelRole::Secondary, &options).expect("resolve");
        assert!(!channel.is_present());
    }

    #[test]
    fn non_object_attributes_are_rejected() {
        let options = NormalizeOptions::default();
        let raw = record(json!({"blue_attributes": "pro"}));
        let err = RawChannel::resolve(&raw, ChannelRole::Primary, &options).expect_err("reject");
        assert_eq!(err.field, "blue_attributes");
    }
}
