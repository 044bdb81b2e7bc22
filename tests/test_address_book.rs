//! Behavioural tests for records and the address book.

mod fixtures;

use address_book::{AddressBook, AddressBookError, Record, ValidationError};
use fixtures::*;
use std::num::NonZeroUsize;

/// Add, search, rename, find: the canonical "John Doe" walk-through.
#[test]
fn test_john_doe_scenario() {
    let mut book = AddressBook::new();
    book.add_record(john_doe());

    assert_eq!(names(&book.search_contact("John")), vec!["John Doe"]);
    assert_eq!(names(&book.search_phone("9876543210")), vec!["John Doe"]);

    book.edit_record_name("John Doe", "Jon Doe").unwrap();

    assert!(book.find("John Doe").is_none());
    let renamed = book.find("Jon Doe").expect("renamed record is stored");
    let phones: Vec<&str> = renamed.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["1234567890", "9876543210"]);
    assert_eq!(renamed.birthday().unwrap().to_string(), "1990-05-20");
}

#[test]
fn test_short_phone_is_rejected() {
    let mut record = john_doe();
    let err = record.add_phone("123").unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone("123".to_string()));
    assert_eq!(record.phones().len(), 2);
}

#[test]
fn test_add_then_find_returns_same_record() {
    let mut book = AddressBook::new();
    for record in [john_doe(), sample_record("Zoë", &[]), Record::new("")] {
        let name = record.name().as_str().to_string();
        book.add_record(record.clone());
        assert_eq!(book.find(&name), Some(&record));
    }
}

#[test]
fn test_delete_twice() {
    let mut book = sample_book();
    assert!(book.delete("Alice"));
    assert!(!book.delete("Alice"));
    assert!(book.find("Alice").is_none());
}

#[test]
fn test_edit_phone_failure_is_atomic() {
    let mut book = sample_book();
    let before = book.find("Bob Johnson").unwrap().clone();

    let err = book
        .edit_phone_in_record("Bob Johnson", "1112223333", "4445556666")
        .unwrap_err();
    assert!(matches!(err, AddressBookError::PhoneNotFound(_)));
    assert_eq!(book.find("Bob Johnson"), Some(&before));
}

#[test]
fn test_search_contact_mixes_name_and_phone_hits() {
    let book = sample_book();
    // "john" hits two names, "555" hits two phone lists
    assert_eq!(
        names(&book.search_contact("john")),
        vec!["John Doe", "Bob Johnson"]
    );
    assert_eq!(
        names(&book.search_contact("555")),
        vec!["Jane Smith", "Bob Johnson"]
    );
    assert!(book.search_contact("nobody").is_empty());
}

#[test]
fn test_pagination_covers_every_record_once() {
    let mut book = sample_book();
    for page_size in 1..=5 {
        book.set_page_size(NonZeroUsize::new(page_size).unwrap());
        let pages: Vec<Vec<&Record>> = book.paginate().collect();

        assert_eq!(pages.len(), book.len().div_ceil(page_size));
        assert!(pages.iter().all(|page| page.len() <= page_size));

        let flattened: Vec<&Record> = pages.into_iter().flatten().collect();
        let all: Vec<&Record> = book.iter().collect();
        assert_eq!(flattened, all);
    }
}

#[test]
fn test_iterating_twice_yields_everything_twice() {
    let book = sample_book();
    assert_eq!(book.iter().count(), 4);
    assert_eq!(book.iter().count(), 4);
    assert_eq!((&book).into_iter().count(), 4);
}

#[test]
fn test_missing_record_errors() {
    let mut book = sample_book();
    assert!(matches!(
        book.edit_record_name("Ghost", "Casper"),
        Err(AddressBookError::RecordNotFound(_))
    ));
    assert!(matches!(
        book.add_phone_to_record("Ghost", "1234567890"),
        Err(AddressBookError::RecordNotFound(_))
    ));
    assert!(matches!(
        book.remove_phone_from_record("Ghost", "1234567890"),
        Err(AddressBookError::RecordNotFound(_))
    ));
    assert!(matches!(
        book.remove_record("Ghost"),
        Err(AddressBookError::RecordNotFound(_))
    ));
}
