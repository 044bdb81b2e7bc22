//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Validation strategy for one kind of [`Field`].
///
/// A kind decides how raw text is parsed into its value type and which typed
/// values are acceptable. `Field` calls into the kind on every write.
pub trait FieldKind {
    /// The stored representation.
    type Value: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Parse and validate raw text.
    fn parse(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Validate an already typed value.
    fn check(value: &Self::Value) -> Result<(), ValidationError>;
}

/// A scalar value that always satisfies the validation of its kind `K`.
///
/// # Example
///
/// ```
/// use address_book::domain::{Name, Phone};
///
/// let name = Name::new("John Doe").unwrap();
/// assert_eq!(name.to_string(), "John Doe");
///
/// let mut phone = Phone::new("1234567890").unwrap();
/// assert!(phone.set("123").is_err());
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
pub struct Field<K: FieldKind> {
    pub(super) value: K::Value,
}

impl<K: FieldKind> Field<K> {
    /// Create a field from raw text, validating it.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if the text is rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = K::parse(raw.as_ref())?;
        Ok(Self { value })
    }

    /// Create a field from an already typed value, validating it.
    pub fn from_value(value: K::Value) -> Result<Self, ValidationError> {
        K::check(&value)?;
        Ok(Self { value })
    }

    /// Get the stored value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Convert into the stored value.
    pub fn into_value(self) -> K::Value {
        self.value
    }

    /// Replace the value with parsed raw text.
    ///
    /// On error the previous value is kept.
    pub fn set(&mut self, raw: impl AsRef<str>) -> Result<(), ValidationError> {
        self.value = K::parse(raw.as_ref())?;
        Ok(())
    }

    /// Replace the value with a typed value.
    ///
    /// On error the previous value is kept.
    pub fn set_value(&mut self, value: K::Value) -> Result<(), ValidationError> {
        K::check(&value)?;
        self.value = value;
        Ok(())
    }
}

impl<K: FieldKind<Value = String>> Field<K> {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<K: FieldKind> PartialEq for Field<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value).finish()
    }
}

// Display support
impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the rendered string
impl<K: FieldKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.value)
    }
}

// Serde support - deserialize from string with validation
impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

/// Field kind for contact names. Any text is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {}

impl FieldKind for NameKind {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        Ok(raw.to_string())
    }

    fn check(_value: &String) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A contact name.
pub type Name = Field<NameKind>;

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}
