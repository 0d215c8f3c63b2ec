/// Rendering of command results
///
/// The session talks to a UserView rather than stdout directly, so output can
/// be captured in tests or rendered differently.

use std::io::{self, Write};

use crate::commands::{ContactSummary, Reply};
use crate::domain::{UpcomingBirthday, BIRTHDAY_FORMAT};

/// Something that can show the bot's output to the user
pub trait UserView {
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    fn show_contacts(&mut self, contacts: &[ContactSummary]) -> io::Result<()>;

    fn show_birthdays(&mut self, birthdays: &[UpcomingBirthday]) -> io::Result<()>;

    /// Ask for the next line of input; views without a prompt ignore this
    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    /// Show any command reply using the matching method
    fn show_reply(&mut self, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Message(message) => self.show_message(message),
            Reply::Contacts(contacts) => self.show_contacts(contacts),
            Reply::Birthdays(birthdays) => self.show_birthdays(birthdays),
        }
    }
}

/// Plain-text view writing one line per item
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the view and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UserView for ConsoleView<W> {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn show_contacts(&mut self, contacts: &[ContactSummary]) -> io::Result<()> {
        for contact in contacts {
            writeln!(self.out, "{}", contact)?;
        }
        Ok(())
    }

    fn show_birthdays(&mut self, birthdays: &[UpcomingBirthday]) -> io::Result<()> {
        for birthday in birthdays {
            writeln!(
                self.out,
                "{}: {}",
                birthday.name,
                birthday.congratulation_date.format(BIRTHDAY_FORMAT)
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}
