/// Commands for adding, changing and listing contact phone numbers

use crate::commands::{expect_args, Command, CommandError, ContactSummary, Reply};
use crate::domain::{AddressBook, PhoneNumber};

/// `add <name> <phone>`: add a phone, creating the contact if needed
///
/// The phone is validated before anything is created, so a bad number never
/// leaves an empty contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    let args = expect_args(args, &Command::Add)?;
    let (name, phone) = (&args[0], &args[1]);

    PhoneNumber::new(phone.as_str())?;

    let (record, created) = book.find_or_create(name)?;
    record.add_phone(phone)?;

    Ok(if created {
        "Contact added.".to_string()
    } else {
        "Contact updated.".to_string()
    })
}

/// `change <name> <old> <new>`: replace one of a contact's phones
pub fn change_phone(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    let args = expect_args(args, &Command::Change)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    book.require_mut(name)?.change_phone(old, new)?;

    Ok(format!(
        "Phone number for {} changed from {} to {}.",
        name, old, new
    ))
}

/// `phone <name>`: list a contact's phones
pub fn show_phone(args: &[String], book: &AddressBook) -> Result<String, CommandError> {
    let args = expect_args(args, &Command::Phone)?;
    let name = &args[0];

    let phones = book.require(name)?.list_phones();
    if phones.is_empty() {
        return Ok(format!("No phone numbers for {}.", name));
    }
    Ok(format!("Phones for {}: {}", name, phones.join(", ")))
}

/// `all`: every contact, in name order
pub fn show_all(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::Message("Address book is empty.".to_string());
    }

    Reply::Contacts(
        book.all()
            .map(|record| ContactSummary {
                name: record.name().to_string(),
                phones: record.list_phones(),
                birthday: record.birthday_text(),
            })
            .collect(),
    )
}
