/// Contact record entity
///
/// A Record is one person in the address book: a name that never changes,
/// an ordered list of phone numbers and an optional birthday.

use crate::domain::{Birthday, DomainError, Name, PhoneNumber};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    /// Phone numbers in the order they were added; duplicates are kept
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for a new contact
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record from existing data (used when loading from storage)
    ///
    /// The parts are already validated types, so this cannot fail.
    pub fn from_existing(name: Name, phones: Vec<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position
    ///
    /// `new` is validated before the lookup, so a malformed replacement is
    /// reported even when `old` is also unknown.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<(), DomainError> {
        let new = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(DomainError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            }),
        }
    }

    /// Validate and store the birthday, overwriting any previous value
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), DomainError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phone numbers as plain strings, in insertion order
    pub fn list_phones(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Birthday formatted as `DD.MM.YYYY`, or None when unset
    pub fn birthday_text(&self) -> Option<String> {
        self.birthday.map(|b| b.to_text())
    }
}
