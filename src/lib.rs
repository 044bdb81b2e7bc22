//! Address Book - an in-memory contact directory with validated records.
//!
//! This library provides a name-keyed store of contact records with
//! field-level validation, keyword and phone search, pagination and JSON file
//! persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (names, phone numbers, birthdays)
//! - **models**: The contact `Record` and its persisted form
//! - **book**: The `AddressBook` store, pagination and persistence
//! - **matching**: Fuzzy name and normalized phone matching
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command parsing and handlers for the interactive front end

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use book::{AddressBook, Pages};
pub use cli::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, CommandError, ConfigError};
pub use matching::{ContactMatcher, ContactQuery, MatchResult, MatchType};
pub use models::{Record, RecordEntry};
