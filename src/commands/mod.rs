/// Commands understood by the assistant bot
///
/// This module turns a line of user input into a Command and runs it against
/// an explicitly passed AddressBook. Commands never print; they return a
/// Reply for the view to render, or a CommandError.

pub mod contacts;
pub mod birthday;

pub use contacts::*;
pub use birthday::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{AddressBook, DomainError, ErrorKind, UpcomingBirthday};

/// Errors a command can report back to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Not enough arguments for {command} command. Usage: {usage}")]
    NotEnoughArguments {
        command: &'static str,
        usage: &'static str,
    },
}

impl CommandError {
    /// Classify this error for the caller
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Domain(e) => e.kind(),
            CommandError::NotEnoughArguments { .. } => ErrorKind::NotEnoughArguments,
        }
    }
}

/// A command word recognised by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Save,
    /// `close` or `exit`
    Exit,
    Unknown(String),
}

impl Command {
    /// Map a command word to a Command, ignoring case
    pub fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "save" => Command::Save,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        }
    }

    /// The word the user types for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Save => "save",
            Command::Exit => "exit",
            Command::Unknown(_) => "unknown",
        }
    }

    /// Number of arguments the command requires
    pub fn arity(&self) -> usize {
        match self {
            Command::Add | Command::AddBirthday => 2,
            Command::Change => 3,
            Command::Phone | Command::ShowBirthday => 1,
            _ => 0,
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Hello => "hello",
            Command::All => "all",
            Command::Birthdays => "birthdays",
            Command::Save => "save",
            Command::Exit => "close | exit",
            Command::Unknown(_) => "",
        }
    }
}

/// Split a line of input into a command and its arguments
///
/// The first whitespace-separated word is the command, the rest are
/// arguments. Returns None for blank input.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = Command::from_word(words.next()?);
    let args = words.map(str::to_string).collect();
    Some((command, args))
}

/// Check that `args` has at least as many entries as `command` needs
///
/// Extra arguments are ignored, so the returned slice has exactly
/// `command.arity()` entries.
pub fn expect_args<'a>(args: &'a [String], command: &Command) -> Result<&'a [String], CommandError> {
    let needed = command.arity();
    if args.len() < needed {
        return Err(CommandError::NotEnoughArguments {
            command: command.name(),
            usage: command.usage(),
        });
    }
    Ok(&args[..needed])
}

/// One line of the `all` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl std::fmt::Display for ContactSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.phones.join(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// What a command produced, for the view to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Contacts(Vec<ContactSummary>),
    Birthdays(Vec<UpcomingBirthday>),
}

/// Result of running a command
///
/// Save and Exit need the storage layer, which commands do not own, so they
/// are handed back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Reply),
    Save,
    Exit,
}

/// Run `command` against `book`
///
/// `today` is the reference date for the `birthdays` command.
pub fn execute(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
) -> Result<Outcome, CommandError> {
    let reply = match command {
        Command::Hello => Reply::Message("How can I help you?".to_string()),
        Command::Add => Reply::Message(add_contact(args, book)?),
        Command::Change => Reply::Message(change_phone(args, book)?),
        Command::Phone => Reply::Message(show_phone(args, book)?),
        Command::All => show_all(book),
        Command::AddBirthday => Reply::Message(add_birthday(args, book)?),
        Command::ShowBirthday => Reply::Message(show_birthday(args, book)?),
        Command::Birthdays => birthdays(book, today),
        Command::Save => return Ok(Outcome::Save),
        Command::Exit => return Ok(Outcome::Exit),
        Command::Unknown(_) => Reply::Message("Invalid command.".to_string()),
    };
    Ok(Outcome::Reply(reply))
}
