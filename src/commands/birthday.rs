/// Commands for storing birthdays and listing upcoming ones

use chrono::NaiveDate;

use crate::commands::{expect_args, Command, CommandError, Reply};
use crate::domain::AddressBook;

/// `add-birthday <name> <DD.MM.YYYY>`: set or overwrite a contact's birthday
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    let args = expect_args(args, &Command::AddBirthday)?;
    let (name, birthday) = (&args[0], &args[1]);

    book.require_mut(name)?.set_birthday(birthday)?;

    Ok(format!("Birthday for {} added/updated.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String, CommandError> {
    let args = expect_args(args, &Command::ShowBirthday)?;
    let name = &args[0];

    Ok(match book.require(name)?.birthday_text() {
        Some(text) => format!("Birthday for {} is {}", name, text),
        None => format!("Birthday for {} is not set.", name),
    })
}

/// `birthdays`: contacts to congratulate during the week starting `today`
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> Reply {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Reply::Message("No upcoming birthdays in the next week.".to_string());
    }
    Reply::Birthdays(upcoming)
}
