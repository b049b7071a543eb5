//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {} (must contain exactly 10 digits)",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_display() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid phone number: 12ab (must contain exactly 10 digits)"
        );
    }
}
