//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating records in the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not present in the record
    #[error("Phone number {0} not found in the record")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::PhoneNotFound("0981234567".to_string());
        assert_eq!(
            err.to_string(),
            "Phone number 0981234567 not found in the record"
        );

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_OUTPUT".to_string(),
            reason: "Must be 'text' or 'json'".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_OUTPUT"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AddressBookError = ValidationError::InvalidPhone("12".to_string()).into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Invalid phone number: 12 (must contain exactly 10 digits)"
        );
    }
}
