//! JSON file persistence for the address book.
//!
//! The file is a single JSON object keyed by contact name:
//!
//! ```json
//! {
//!   "John Doe": {
//!     "name": "John Doe",
//!     "phones": ["1234567890"],
//!     "birthday": "1990-05-20"
//!   }
//! }
//! ```
//!
//! Saving rewrites the whole file. Loading re-validates every field.

use super::address_book::{AddressBook, DEFAULT_PAGE_SIZE};
use crate::error::AddressBookResult;
use crate::models::{Record, RecordEntry};
use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::Path;

impl AddressBook {
    /// Render the whole book as pretty-printed JSON.
    pub fn to_json(&self) -> AddressBookResult<String> {
        let entries: IndexMap<&str, RecordEntry> = self
            .iter()
            .map(|record| (record.name().as_str(), record.to_entry()))
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Parse a book from JSON, validating every record.
    ///
    /// Records are keyed by their `name` field. A mismatching object key is
    /// logged and ignored.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Json` if the text is not the expected shape
    /// - `AddressBookError::Validation` if a phone or birthday is malformed
    pub fn from_json(json: &str) -> AddressBookResult<Self> {
        let entries: IndexMap<String, RecordEntry> = serde_json::from_str(json)?;
        let mut book = Self::new();
        for (key, entry) in entries {
            if key != entry.name {
                tracing::warn!(
                    key = %key,
                    name = %entry.name,
                    "Stored key does not match record name, using the name"
                );
            }
            book.add_record(Record::try_from(entry)?);
        }
        Ok(book)
    }

    /// Write the book to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> AddressBookResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), records = self.len(), "Saved address book");
        Ok(())
    }

    /// Read a book from `path` with the default page size.
    ///
    /// A missing file is not an error: it yields an empty book and a warning.
    /// Any other I/O failure is returned.
    pub fn load_from_file(path: impl AsRef<Path>) -> AddressBookResult<Self> {
        Self::load_from_file_with_page_size(path, DEFAULT_PAGE_SIZE)
    }

    /// Read a book from `path` and paginate it by `page_size`.
    pub fn load_from_file_with_page_size(
        path: impl AsRef<Path>,
        page_size: NonZeroUsize,
    ) -> AddressBookResult<Self> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Address book file not found, starting with an empty book"
                );
                return Ok(Self::with_page_size(page_size));
            }
            Err(e) => return Err(e.into()),
        };

        let mut book = Self::from_json(&json)?;
        book.set_page_size(page_size);
        tracing::info!(path = %path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }
}
