/// Storage layer for persisting the address book
///
/// This module saves and loads the whole contact collection using SQLite.
/// The core only needs two operations, load and save, which the
/// AddressBookStorage trait describes.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::AddressBook;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No saved address book found")]
    NotFound,

    #[error("Corrupt record for contact '{name}': {reason}")]
    Corrupt { name: String, reason: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining how an address book is persisted
///
/// The whole collection is read once at startup and written back as a unit.
pub trait AddressBookStorage {
    /// Load the last saved address book
    ///
    /// Returns StorageError::NotFound when nothing has been saved yet.
    fn load(&self) -> Result<AddressBook, StorageError>;

    /// Replace the stored address book with `book`
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
