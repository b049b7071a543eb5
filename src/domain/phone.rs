//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Check that `phone` is exactly ten ASCII decimal digits.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the rejected value.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// A type-safe wrapper for phone numbers.
///
/// Every path that sets the value goes through [`validate_phone`], so a
/// `Phone` never holds anything but ten digits.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let mut phone = Phone::new("0981234567").unwrap();
/// assert!(phone.set_value("098-123-45").is_err());
/// assert_eq!(phone.as_str(), "0981234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(Field);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten characters, all of them `0`-`9`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        validate_phone(&phone)?;
        Ok(Self(Field::new(phone)))
    }

    /// Replace the number. On error the previous value is kept.
    pub fn set_value(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        validate_phone(&phone)?;
        self.0.set_value(phone);
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
