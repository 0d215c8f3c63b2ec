/// Domain module containing the contact book's core data types and logic
///
/// This module defines the validated field types (Name, PhoneNumber, Birthday),
/// the contact Record, the AddressBook collection and the upcoming-birthday
/// calculation. Nothing in here prints or logs; callers decide how to report.

pub mod fields;
pub mod record;
pub mod address_book;
pub mod birthdays;

// Re-export public types for easy access
pub use fields::*;
pub use record::*;
pub use address_book::*;
pub use birthdays::*;

use thiserror::Error;

/// The broad kinds of failure a contact book operation can report
///
/// Every error type in the crate maps onto one of these so the console layer
/// can treat them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, date or name input
    Validation,
    /// Unknown contact name or phone number
    NotFound,
    /// A command was given fewer arguments than it needs
    NotEnoughArguments,
}

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid phone number '{0}'. Use 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid date '{0}'. Use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },
}

impl DomainError {
    /// Classify this error for the caller
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidName(_)
            | DomainError::InvalidPhone(_)
            | DomainError::InvalidBirthday(_) => ErrorKind::Validation,
            DomainError::PhoneNotFound { .. } | DomainError::ContactNotFound { .. } => {
                ErrorKind::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DomainError::InvalidPhone("12".to_string()).kind(), ErrorKind::Validation);
        assert_eq!(DomainError::InvalidBirthday("x".to_string()).kind(), ErrorKind::Validation);
        assert_eq!(
            DomainError::ContactNotFound { name: "Bob".to_string() }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DomainError::PhoneNotFound { name: "Bob".to_string(), phone: "1".to_string() }.kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ContactNotFound { name: "Alice".to_string() };
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = DomainError::InvalidBirthday("31.04.2000".to_string());
        assert_eq!(err.to_string(), "Invalid date '31.04.2000'. Use DD.MM.YYYY");
    }
}
