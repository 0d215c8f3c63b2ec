/// The address book: every contact record, keyed by name

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{birthdays, DomainError, Record, UpcomingBirthday};

/// Collection of contact records keyed by their exact name
///
/// Records are kept in a BTreeMap so listing is always in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, returning the record it replaced
    pub fn upsert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    /// Exact, case-sensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Like find, but fails with ContactNotFound instead of returning None
    pub fn require(&self, name: &str) -> Result<&Record, DomainError> {
        self.records
            .get(name)
            .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() })
    }

    /// Like find_mut, but fails with ContactNotFound instead of returning None
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Record, DomainError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() })
    }

    /// Fetch the record for `name`, creating an empty one if it does not exist
    ///
    /// The returned flag is true when a new record was created.
    pub fn find_or_create(&mut self, name: &str) -> Result<(&mut Record, bool), DomainError> {
        match self.records.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok((entry.into_mut(), false)),
            Entry::Vacant(entry) => {
                let record = Record::new(name)?;
                Ok((entry.insert(record), true))
            }
        }
    }

    /// All records in ascending name order
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next week, counting from `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.all(), today)
    }
}
