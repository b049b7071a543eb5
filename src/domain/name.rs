//! Name value object.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a contact.
///
/// A record is looked up in the address book by its name, so the value
/// is expected to be non-empty, but no validation is applied.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Andriy");
/// assert_eq!(name.as_str(), "Andriy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Field);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Field::new(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Replace the stored name.
    pub fn set_value(&mut self, name: impl Into<String>) {
        self.0.set_value(name);
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
