//! Domain value objects and types.
//!
//! This module contains the validated building blocks of a contact record:
//! names, phone numbers and birthdays. Every value is validated when it is
//! constructed and again whenever it is overwritten, so an invalid value can
//! never be observed through a [`Field`].

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{Birthday, BirthdayKind};
pub use errors::ValidationError;
pub use field::{Field, FieldKind, Name, NameKind};
pub use phone::{Phone, PhoneKind};
