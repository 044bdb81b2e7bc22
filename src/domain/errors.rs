//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a field value.
///
/// The rendered messages are part of the user-facing contract: the command
/// line prints them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Invalid phone number format"),
            Self::InvalidBirthday(_) => {
                write!(f, "Incorrect birthday format, should be YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
