//! Data models for address book entities.
//!
//! This module contains the contact record and the raw shape it is persisted
//! in.

pub mod record;

pub use record::{Record, RecordEntry};
