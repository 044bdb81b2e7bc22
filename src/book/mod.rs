//! The address book: storage, search, pagination and persistence.

pub mod address_book;
pub mod pagination;
mod persistence;

pub use address_book::{AddressBook, Iter, DEFAULT_PAGE_SIZE};
pub use pagination::Pages;
