//! Phone number field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Field kind for phone numbers.
///
/// # Validation Rules
///
/// - Exactly ten characters
/// - Every character is an ASCII digit (no spaces, dashes or `+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {}

impl PhoneKind {
    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }
}

impl FieldKind for PhoneKind {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(raw.to_string())
    }

    fn check(value: &String) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }
}

/// A ten digit phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
pub type Phone = Field<PhoneKind>;
