//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default location of the persisted address book.
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the book is loaded from and saved to
    pub book_file: PathBuf,

    /// Number of records per page (default: 10)
    pub page_size: NonZeroUsize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the JSON file (default: `address_book.json`)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let book_file = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_page_size("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as a non-zero usize with a default value.
    fn parse_env_page_size(var_name: &str, default: NonZeroUsize) -> ConfigResult<NonZeroUsize> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number of at least 1, got: {}", val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_file, PathBuf::from("address_book.json"));
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("ADDRESS_BOOK_FILE");
        guard.unset("ADDRESS_BOOK_PAGE_SIZE");
        guard.unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from(DEFAULT_BOOK_FILE));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "/tmp/contacts.json");
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "25");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.page_size.get(), 25);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "0");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_PAGE_SIZE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_book_file() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "ADDRESS_BOOK_FILE"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_PAGE_SIZE", " 4 ");

        let result = Config::parse_env_page_size("TEST_PAGE_SIZE", DEFAULT_PAGE_SIZE);
        assert_eq!(result.unwrap().get(), 4);

        let result = Config::parse_env_page_size("NONEXISTENT_PAGE_SIZE", DEFAULT_PAGE_SIZE);
        assert_eq!(result.unwrap(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    #[serial]
    fn test_parse_env_page_size_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_PAGE_SIZE_INVALID", "not-a-number");

        let result = Config::parse_env_page_size("TEST_PAGE_SIZE_INVALID", DEFAULT_PAGE_SIZE);
        assert!(result.is_err());
    }
}
