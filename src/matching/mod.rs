//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides fuzzy name matching and normalized phone matching
//! over the records of an address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, ContactQuery, MatchResult, MatchType};
