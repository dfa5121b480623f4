//! Field-level validation primitives.
//!
//! A failed check yields a [`FieldError`], which serializes as a single-entry
//! JSON object (`{"title": "Title cannot be blank"}`) so a list of them renders
//! as the `errors` array of a 400 response.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One field-to-message violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.message)?;
        map.end()
    }
}

/// Render violations as `field: message` pairs separated by `; `.
pub fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Strip leading and trailing spaces and ASCII control characters
/// (everything at or below U+0020). Unicode spaces such as U+00A0 and U+3000
/// are content, not padding.
pub fn trim_padding(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// A value is blank when it is absent or holds nothing but padding.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => trim_padding(v).is_empty(),
    }
}

/// Push a violation onto `errors` if `value` is blank.
pub fn require_not_blank(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) {
    if is_blank(value) {
        errors.push(FieldError::new(field, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_serializes_as_single_entry_object() {
        let err = FieldError::new("category", "Category cannot be blank");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"category": "Category cannot be blank"}));
    }

    #[test]
    fn blank_covers_missing_empty_and_whitespace() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t\n")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn control_characters_are_padding() {
        assert!(is_blank(Some("\r\u{0}\u{1f} ")));
        assert_eq!(trim_padding("\t Heat\n"), "Heat");
    }

    #[test]
    fn unicode_spaces_are_not_blank() {
        assert!(!is_blank(Some("\u{3000}")));
        assert!(!is_blank(Some("\u{00A0}")));
        assert_eq!(trim_padding(" \u{3000} "), "\u{3000}");
    }

    #[test]
    fn joined_errors_keep_field_order() {
        let errors = [
            FieldError::new("title", "Title cannot be blank"),
            FieldError::new("category", "Category cannot be blank"),
        ];
        assert_eq!(
            join_field_errors(&errors),
            "title: Title cannot be blank; category: Category cannot be blank"
        );
        assert_eq!(join_field_errors(&[]), "");
    }

    #[test]
    fn require_not_blank_only_pushes_on_blank() {
        let mut errors = Vec::new();
        require_not_blank(&mut errors, "title", Some("Heat"), "Title cannot be blank");
        assert!(errors.is_empty());

        require_not_blank(&mut errors, "title", Some(" "), "Title cannot be blank");
        assert_eq!(errors, vec![FieldError::new("title", "Title cannot be blank")]);
    }
}
