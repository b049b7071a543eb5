//! AddressBook model: the keyed collection of all records.

use super::record::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Records keyed by contact name.
///
/// Adding a record under a name that is already present replaces the
/// stored record. Iteration order is unspecified; use [`AddressBook::names`]
/// for a stable ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            warn!(contact = %name, "Overwrote existing record");
        } else {
            debug!(contact = %name, "Added record");
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            debug!(contact = %name, "Deleted record");
        }
    }

    /// Iterate over all `(name, record)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// All contact names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Serde support - serialize as a list of records ordered by name
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names().into_iter().filter_map(|n| self.find(n)))
    }
}

// Serde support - later duplicates overwrite earlier ones, as with add_record
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name);
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(record("Andriy", &["0981234567", "0509876543"]));
        book.add_record(record("Maria", &["0675554433"]));
        book
    }

    #[test]
    fn test_add_and_find() {
        let book = sample_book();
        assert_eq!(book.len(), 2);
        let andriy = book.find("Andriy").unwrap();
        assert_eq!(andriy, &record("Andriy", &["0981234567", "0509876543"]));
        assert!(book.find("Olena").is_none());
    }

    #[test]
    fn test_find_mut_reflects_in_place_edits() {
        let mut book = sample_book();
        book.find_mut("Andriy")
            .unwrap()
            .edit_phone("0981234567", "0631112233")
            .unwrap();

        let andriy = book.find("Andriy").unwrap();
        assert!(andriy.find_phone("0631112233").is_some());
        assert!(andriy.find_phone("0981234567").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = sample_book();
        book.delete("Maria");
        assert!(book.find("Maria").is_none());

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Andriy"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = sample_book();
        book.delete("Olena");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_add_same_name_overwrites() {
        let mut book = sample_book();
        book.add_record(record("Maria", &["0990000000"]));

        assert_eq!(book.len(), 2);
        let maria = book.find("Maria").unwrap();
        assert_eq!(maria.phones().len(), 1);
        assert_eq!(maria.phones()[0].as_str(), "0990000000");
    }

    #[test]
    fn test_names_sorted() {
        let mut book = sample_book();
        book.add_record(Record::new("Bohdan"));
        assert_eq!(book.names(), vec!["Andriy", "Bohdan", "Maria"]);
    }

    #[test]
    fn test_empty_book() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
    }

    #[test]
    fn test_book_serialization() {
        let book = sample_book();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "Andriy", "phones": ["0981234567", "0509876543"]},
                {"name": "Maria", "phones": ["0675554433"]}
            ])
        );

        let back: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }
}
