//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field value was rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record is stored under the given name
    #[error("No record found with name {0}")]
    RecordNotFound(String),

    /// The record has no phone with the given value
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// Reading or writing the persisted file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted file is not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was entered
    #[error("Empty command")]
    Empty,

    /// The keyword is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// The keyword is known but the arguments are wrong
    #[error("Invalid command format. Please use '{usage}'.")]
    Usage { usage: &'static str },
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
        let err = AddressBookError::RecordNotFound("John".to_string());
        assert_eq!(err.to_string(), "No record found with name John");

        let err = AddressBookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number 1234567890 not found");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be at least 1"
        );

        let err = CommandError::Usage {
            usage: "phone [name]",
        };
        assert_eq!(
            err.to_string(),
            "Invalid command format. Please use 'phone [name]'."
        );
    }

    #[test]
    fn test_validation_error_passes_message_through() {
        let err: AddressBookError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Invalid phone number format");
        assert!(matches!(err, AddressBookError::Validation(_)));
    }
}
