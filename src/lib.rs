/// Public library interface for the contact book assistant bot
///
/// This module exports the contact domain, the storage layer, the command
/// handlers and the interactive session, plus a small application type that
/// wires them together for the binary.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
pub mod commands;
pub mod cli;

// Re-export public modules and types
pub use domain::*;
pub use storage::{AddressBookStorage, SqliteStorage, StorageError};
pub use commands::{Command, CommandError, ContactSummary, Reply};
pub use cli::{ConsoleView, Session, UserView};

/// Errors that can end the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The assistant bot application backed by a SQLite database file
pub struct ContactBookApp {
    storage: SqliteStorage,
    today: Option<NaiveDate>,
}

impl ContactBookApp {
    /// Open (or create) the database at `db_path`
    pub fn new(db_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Initializing contact book with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;

        Ok(Self {
            storage,
            today: None,
        })
    }

    /// Use a fixed reference date for upcoming birthdays
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Run the interactive session on stdin/stdout until the user exits
    pub fn run(self) -> Result<(), AppError> {
        let mut session = Session::start(self.storage, ConsoleView::stdout())?
            .with_today(self.today);

        let stdin = io::stdin();
        session.run(stdin.lock())?;

        tracing::info!("Session finished with {} contacts", session.book().len());
        Ok(())
    }
}
