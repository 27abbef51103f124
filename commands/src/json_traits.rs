//! Extension traits for JSON field access
//!
//! This module provides generic traits for:
//! - Field access on request objects using any type that implements `AsRef<str>`
//! - Reading scalar JSON values as request text

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Text form of a JSON value as a command parameter sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarText<'a> {
    /// `null`
    Null,
    /// A string, number or boolean rendered as text
    Text(Cow<'a, str>),
    /// An array or object where a single value was expected
    Composite,
}

impl ScalarText<'_> {
    /// Trimmed text, `None` for `null`, blank text and composites
    pub fn non_blank(&self) -> Option<&str> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            Self::Null | Self::Composite => None,
        }
    }

    /// Owned trimmed text, blank text kept as `None`
    pub fn into_trimmed(self) -> Option<String> {
        self.non_blank().map(ToString::to_string)
    }
}

/// Extension trait for type-safe JSON field access
pub trait JsonFieldAccess {
    /// Get field value using any type that can be a string reference
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value>;

    /// Get field value as request text, numbers and booleans stringified
    fn get_field_text<T: AsRef<str>>(&self, field: T) -> Option<ScalarText<'_>> {
        self.get_field(field).map(Value::scalar_text)
    }
}

impl JsonFieldAccess for Map<String, Value> {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value> {
        self.get(field.as_ref())
    }
}

/// Extension trait for reading a JSON value as request text
pub trait ScalarValue {
    /// Text form of this value
    fn scalar_text(&self) -> ScalarText<'_>;
}

impl ScalarValue for Value {
    fn scalar_text(&self) -> ScalarText<'_> {
        match self {
            Self::Null => ScalarText::Null,
            Self::String(s) => ScalarText::Text(Cow::Borrowed(s.as_str())),
            Self::Bool(b) => ScalarText::Text(Cow::Owned(b.to_string())),
            Self::Number(n) => ScalarText::Text(Cow::Owned(n.to_string())),
            Self::Array(_) | Self::Object(_) => ScalarText::Composite,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "tests fail loudly"
    )]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalar_text_stringifies_numbers_and_booleans() {
        assert_eq!(
            json!(12.5).scalar_text(),
            ScalarText::Text(Cow::Borrowed("12.5"))
        );
        assert_eq!(
            json!(true).scalar_text(),
            ScalarText::Text(Cow::Borrowed("true"))
        );
        assert_eq!(json!(null).scalar_text(), ScalarText::Null);
        assert_eq!(json!([1, 2]).scalar_text(), ScalarText::Composite);
        assert_eq!(json!({"a": 1}).scalar_text(), ScalarText::Composite);
    }

    #[test]
    fn test_non_blank_trims_and_drops_whitespace() {
        let object = json!({"name": "  Head Office  ", "blank": "   "});
        let map = object.as_object().unwrap();

        assert_eq!(
            map.get_field_text("name").unwrap().into_trimmed().as_deref(),
            Some("Head Office")
        );
        assert!(map.get_field_text("blank").unwrap().non_blank().is_none());
        assert!(map.get_field_text("absent").is_none());
    }
}
