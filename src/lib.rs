//! Address Book - an in-memory contact directory.
//!
//! Contacts are stored as records holding a name and a list of validated
//! phone numbers. Records are kept in an [`AddressBook`] keyed by name.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Field`, `Name`, `Phone`) and phone validation
//! - **models**: `Record` and `AddressBook`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::new("Andriy");
//! record.add_phone("0981234567").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert!(book.find("Andriy").unwrap().find_phone("0981234567").is_some());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{validate_phone, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{AddressBook, Record};
