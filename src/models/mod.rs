//! Data models for the address book.
//!
//! A [`Record`] groups a contact's name with its phone numbers, and an
//! [`AddressBook`] holds records keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
