//! The name-keyed record store.

use super::pagination::Pages;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::num::NonZeroUsize;

/// Number of records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Iterator over the records of an [`AddressBook`] in insertion order.
pub type Iter<'a> = indexmap::map::Values<'a, String, Record>;

/// An insertion-ordered mapping from contact name to [`Record`].
///
/// The key of every entry is always the current name of its record. Records
/// can only be renamed through [`AddressBook::edit_record_name`], which
/// re-keys the entry; all other mutations go through methods that cannot
/// touch the name.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
    page_size: NonZeroUsize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Create an empty address book with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty address book with a custom page size.
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            records: IndexMap::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record under its current name.
    ///
    /// An existing record with the same name is replaced in place (last write
    /// wins, the original insertion position is kept).
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(name = %name, "Replaced existing record");
        } else {
            tracing::debug!(name = %name, "Added record");
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `false` and logs a warning when there is no such record.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.shift_remove(name).is_some() {
            tracing::debug!(name = %name, "Deleted record");
            true
        } else {
            tracing::warn!("No record found with name {}", name);
            false
        }
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` when there is no such record.
    pub fn remove_record(&mut self, name: &str) -> AddressBookResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }

    /// Records whose name contains `keyword`, ignoring case.
    pub fn search_records(&self, keyword: &str) -> Vec<&Record> {
        let keyword = keyword.to_lowercase();
        self.iter()
            .filter(|record| Self::name_contains(record, &keyword))
            .collect()
    }

    /// Records holding a phone exactly equal to `phone`.
    pub fn search_phone(&self, phone: &str) -> Vec<&Record> {
        self.iter()
            .filter(|record| record.search_phone(phone))
            .collect()
    }

    /// Records whose name contains `query` (ignoring case) or that hold a
    /// phone containing `query`.
    ///
    /// Each record appears once, in insertion order.
    pub fn search_contact(&self, query: &str) -> Vec<&Record> {
        let lowered = query.to_lowercase();
        self.iter()
            .filter(|record| {
                Self::name_contains(record, &lowered)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    fn name_contains(record: &Record, lowered: &str) -> bool {
        record.name().as_str().to_lowercase().contains(lowered)
    }

    fn record_mut(&mut self, name: &str) -> AddressBookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }

    /// Add a phone to the record stored under `name`.
    pub fn add_phone_to_record(&mut self, name: &str, phone: &str) -> AddressBookResult<()> {
        self.record_mut(name)?.add_phone(phone)?;
        Ok(())
    }

    /// Remove every matching phone from the record stored under `name`.
    pub fn remove_phone_from_record(&mut self, name: &str, phone: &str) -> AddressBookResult<()> {
        self.record_mut(name)?.remove_phone(phone);
        Ok(())
    }

    /// Replace a phone of the record stored under `name`.
    pub fn edit_phone_in_record(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> AddressBookResult<()> {
        self.record_mut(name)?.edit_phone(old, new)
    }

    /// Set the birthday of the record stored under `name`.
    pub fn set_birthday_for_record(&mut self, name: &str, birthday: &str) -> AddressBookResult<()> {
        self.record_mut(name)?.set_birthday(birthday)?;
        Ok(())
    }

    /// Rename a stored record and move it to its new key.
    ///
    /// The renamed record is re-inserted, so it moves to the end of the
    /// iteration order unless `new_name` already names another record, which
    /// it then replaces in place.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` when `old_name` is absent.
    pub fn edit_record_name(&mut self, old_name: &str, new_name: &str) -> AddressBookResult<()> {
        let mut record = self.remove_record(old_name)?;
        record.edit_name(new_name);
        tracing::debug!(old = %old_name, new = %new_name, "Renamed record");
        self.add_record(record);
        Ok(())
    }

    /// Iterate over the records in insertion order.
    ///
    /// Every call starts a fresh iteration from the first record.
    pub fn iter(&self) -> Iter<'_> {
        self.records.values()
    }

    /// Stored names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Split the records into pages of at most `page_size` records.
    ///
    /// Every call starts again from the first page.
    pub fn paginate(&self) -> Pages<'_> {
        Pages::new(self.iter(), self.page_size)
    }

    /// Records whose next birthday is at most `within_days` days after `today`.
    ///
    /// Sorted by days remaining; ties keep insertion order.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .iter()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}
