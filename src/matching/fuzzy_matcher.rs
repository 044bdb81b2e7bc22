//! Fuzzy matching implementation for contact lookup.
//!
//! This module provides tolerant contact matching with:
//! - Exact matching on phone numbers after digit normalization
//! - Fuzzy name matching (substring and Levenshtein similarity)
//! - Confidence scoring (0-100 scale)

use crate::book::AddressBook;
use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for contact matching.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone number to search for, any formatting
    pub phone: Option<String>,
}

impl ContactQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Default::default()
        }
    }
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find matching records in an address book.
    ///
    /// # Arguments
    /// * `query` - Search parameters (name and/or phone)
    /// * `book` - Address book to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first)
    pub fn find_matches<'a>(
        &self,
        query: &ContactQuery,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in book {
            // Exact phone matches take priority
            if let Some(phone) = &query.phone {
                if let Some(confidence) = self.match_phone(phone, record) {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = self.fuzzy_match_name(name, record.name().as_str()) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            record,
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        // Sort by confidence (highest first), then by name
        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });

        results.truncate(max_results);

        results
    }

    /// Match phone numbers (exact match with normalization).
    ///
    /// Returns confidence score (100) if matched, None otherwise.
    fn match_phone(&self, query_phone: &str, record: &Record) -> Option<u8> {
        let normalized_query = Self::normalize_phone(query_phone);
        if normalized_query.is_empty() {
            return None;
        }

        record
            .phones()
            .iter()
            .any(|phone| phone.as_str() == normalized_query)
            .then_some(100)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, record_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(record_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8 // Scale to 0-85 range
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let len2 = s2_chars.len();

        if s1_chars.is_empty() {
            return len2;
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row
        let mut row: Vec<usize> = (0..=len2).collect();
        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[len2]
    }

    // ==================== Normalization Functions ====================

    /// Normalize a phone number for comparison.
    ///
    /// Extracts only digits and takes the last 10 digits (drops country codes).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
