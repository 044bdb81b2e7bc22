//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted shape of a record.
///
/// This is the raw form read from and written to disk. Nothing in it is
/// validated; convert it with [`Record::try_from`] to get a checked record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecordEntry {
    /// Contact name
    pub name: String,

    /// Phone numbers in insertion order
    #[serde(default)]
    pub phones: Vec<String>,

    /// Birthday as `YYYY-MM-DD`, or null
    #[serde(default)]
    pub birthday: Option<String>,
}

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// Every phone and the birthday are validated on the way in, so a `Record`
/// never holds a malformed value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RecordEntry")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::from(name.into()),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday given as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the date is malformed.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// The phone list is untouched when validation fails.
    pub fn add_phone(&mut self, phone: impl AsRef<str>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove every phone equal to `phone`. Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PhoneNotFound` if no phone equals `old`
    /// - `AddressBookError::Validation` if `new` is not a valid phone
    ///
    /// Either way the phone list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;
        phone.set(new)?;
        Ok(())
    }

    /// Replace the name.
    ///
    /// This does not re-key the record inside an `AddressBook`; use
    /// `AddressBook::edit_record_name` for stored records.
    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.name = Name::from(name.into());
    }

    /// Whether some stored phone equals `phone` exactly.
    pub fn search_phone(&self, phone: &str) -> bool {
        self.find_phone(phone).is_some()
    }

    /// Set or replace the birthday from `YYYY-MM-DD` text.
    pub fn set_birthday(&mut self, birthday: impl AsRef<str>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Set or replace the birthday from a typed date.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidBirthday` if the year is outside `0..=9999`
    pub fn set_birthday_date(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::from_value(date)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days until the next birthday counted from the local current date.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(chrono::Local::now().date_naive())
    }

    /// Days until the next birthday counted from `today`.
    ///
    /// Feb 29 birthdays are observed on Mar 1 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Convert into the persisted shape.
    pub fn to_entry(&self) -> RecordEntry {
        RecordEntry {
            name: self.name.as_str().to_string(),
            phones: self.phones.iter().map(|p| p.as_str().to_string()).collect(),
            birthday: self.birthday.as_ref().map(|b| b.to_string()),
        }
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = ValidationError;

    /// Rebuild a record, re-running every field validation.
    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let phones = entry
            .phones
            .iter()
            .map(Phone::new)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = entry.birthday.as_deref().map(Birthday::new).transpose()?;

        Ok(Self {
            name: Name::from(entry.name),
            phones,
            birthday,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
