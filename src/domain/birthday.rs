//! Birthday field and anniversary arithmetic.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Storage and display format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static BIRTHDAY_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// Field kind for birthdays.
///
/// Text input must be a strict `YYYY-MM-DD` date: four digit year, two digit
/// month and day, nothing else. Typed `NaiveDate` input must have a year in
/// `0..=9999` so that it renders back in the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayKind {}

impl FieldKind for BirthdayKind {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn check(value: &NaiveDate) -> Result<(), ValidationError> {
        if (0..=9999).contains(&value.year()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidBirthday(value.to_string()))
        }
    }
}

/// A calendar date of birth.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-20").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-20");
/// assert!(Birthday::new("20.05.1990").is_err());
/// ```
pub type Birthday = Field<BirthdayKind>;

impl TryFrom<NaiveDate> for Birthday {
    type Error = ValidationError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Field<BirthdayKind> {
    /// Get the stored date.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }

    /// The day this birthday is celebrated in `year`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first celebration on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.observed_in(today.year()) {
            Some(this_year) if this_year >= today => Some(this_year),
            _ => self.observed_in(today.year() + 1),
        }
    }

    /// Whole days from `today` until the next celebration (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| next.signed_duration_since(today).num_days())
    }
}
