//! Test fixtures and sample data.
//!
//! Reusable records and address books shared by the integration tests.

use address_book::{AddressBook, Record};

/// Create a record with the given phones.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .expect("fixture phones must be valid");
    }
    record
}

/// The "John Doe" record used across scenarios.
pub fn john_doe() -> Record {
    let mut record = sample_record("John Doe", &["1234567890", "9876543210"]);
    record
        .set_birthday("1990-05-20")
        .expect("fixture birthday must be valid");
    record
}

/// A book with a handful of contacts, in a known insertion order.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(john_doe());
    book.add_record(sample_record("Jane Smith", &["5551234567"]));
    book.add_record(sample_record("Bob Johnson", &["5550001111", "5550002222"]));
    book.add_record(Record::new("Alice"));
    book
}

/// Names of the given records, in order.
#[allow(dead_code)]
pub fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.name().as_str().to_string())
        .collect()
}
