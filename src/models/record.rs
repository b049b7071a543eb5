//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: one name and an ordered list of phone numbers.
///
/// Phone numbers keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Validation` if the number is not ten digits;
    /// the record is left untouched.
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every entry equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        debug!(
            contact = %self.name,
            phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace the first entry equal to `old_phone` with `new_phone`.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PhoneNotFound` if no entry equals `old_phone`
    /// - `AddressBookError::Validation` if `new_phone` is invalid, in which
    ///   case the entry keeps its old value
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> AddressBookResult<()> {
        let entry = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old_phone.to_string()))?;

        entry.set_value(new_phone)?;
        debug!(contact = %self.name, old_phone, new_phone, "Edited phone");
        Ok(())
    }

    /// Find the first entry equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
