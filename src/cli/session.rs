/// The interactive session that drives the assistant bot
///
/// A Session owns the address book for the lifetime of the program: it loads
/// it from storage once, runs commands against it line by line and saves it
/// back on `close`/`exit`, on `save`, or when input runs out.

use std::io::BufRead;

use chrono::{Local, NaiveDate};
use tracing::{debug, error, info};

use crate::cli::UserView;
use crate::commands::{self, parse_input, Outcome};
use crate::domain::AddressBook;
use crate::storage::{AddressBookStorage, StorageError};
use crate::AppError;

/// Text shown before each line of input
pub const PROMPT: &str = "Enter a command: ";

/// A running bot session over some storage and some view
pub struct Session<S, V> {
    storage: S,
    view: V,
    book: AddressBook,
    /// Fixed reference date for `birthdays`; the local date when None
    today: Option<NaiveDate>,
}

impl<S: AddressBookStorage, V: UserView> Session<S, V> {
    /// Load the address book and tell the user whether one was found
    ///
    /// A storage with nothing saved yet starts an empty book. Any other
    /// storage failure is returned.
    pub fn start(storage: S, mut view: V) -> Result<Self, AppError> {
        let book = match storage.load() {
            Ok(book) => {
                info!("Loaded address book with {} contacts", book.len());
                view.show_message("Address book loaded successfully.")?;
                book
            }
            Err(StorageError::NotFound) => {
                info!("No saved address book, starting empty");
                view.show_message("No existing address book found. Creating a new one.")?;
                AddressBook::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            storage,
            view,
            book,
            today: None,
        })
    }

    /// Use a fixed date instead of the local date for upcoming birthdays
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Read and run commands from `input` until exit or end of input
    ///
    /// Lines that are not valid UTF-8 are decoded lossily. If reading fails
    /// the book is still saved before the error is returned.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<(), AppError> {
        self.view.show_message("Welcome to the assistant bot!")?;

        let mut buf = Vec::new();
        loop {
            self.view.prompt(PROMPT)?;

            buf.clear();
            let read = match input.read_until(b'\n', &mut buf) {
                Ok(read) => read,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    self.finish()?;
                    return Err(e.into());
                }
            };
            if read == 0 {
                info!("Input closed, saving address book");
                self.finish()?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if !self.handle_line(&line)? {
                break;
            }
        }

        Ok(())
    }

    /// Run one line of input; returns false once the session should end
    ///
    /// Command errors are shown to the user and do not end the session.
    pub fn handle_line(&mut self, line: &str) -> Result<bool, AppError> {
        let Some((command, args)) = parse_input(line) else {
            return Ok(true);
        };
        debug!(command = command.name(), args = args.len(), "Handling command");

        let today = self.today();
        match commands::execute(&command, &args, &mut self.book, today) {
            Ok(Outcome::Reply(reply)) => self.view.show_reply(&reply)?,
            Ok(Outcome::Save) => match self.storage.save(&self.book) {
                Ok(()) => self.view.show_message("Address book saved.")?,
                Err(e) => {
                    error!("Failed to save address book: {}", e);
                    self.view
                        .show_message(&format!("Failed to save address book: {}", e))?;
                }
            },
            Ok(Outcome::Exit) => {
                self.finish()?;
                return Ok(false);
            }
            Err(e) => {
                debug!(kind = ?e.kind(), "Command failed: {}", e);
                self.view.show_message(&e.to_string())?;
            }
        }

        Ok(true)
    }

    /// Save the book and say goodbye
    fn finish(&mut self) -> Result<(), AppError> {
        self.storage.save(&self.book)?;
        info!("Saved address book with {} contacts", self.book.len());
        self.view.show_message("Address book saved successfully.")?;
        self.view.show_message("Good bye!")?;
        Ok(())
    }
}
