//! Field value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generic named text value.
///
/// `Field` stores its value verbatim and accepts any string. Typed fields
/// such as [`Name`](super::Name) and [`Phone`](super::Phone) wrap it and
/// add their own rules on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(String);

impl Field {
    /// Create a new Field holding `value` as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the value as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Replace the stored value. Always succeeds.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_stores_value_verbatim() {
        let field = Field::new("  any text 123 ");
        assert_eq!(field.value(), "  any text 123 ");
    }

    #[test]
    fn test_field_set_value() {
        let mut field = Field::new("old");
        field.set_value("");
        assert_eq!(field.value(), "");
        field.set_value("new");
        assert_eq!(field.into_inner(), "new");
    }

    #[test]
    fn test_field_display() {
        let field = Field::new("hello");
        assert_eq!(format!("{}", field), "hello");
    }
}
