/// Integration tests: sessions over a real database file
use contact_book::*;
use chrono::NaiveDate;
use std::io::Cursor;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn today() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, 10)
    }

    fn run_script(db_path: &std::path::Path, script: &str) -> String {
        let storage = SqliteStorage::new(db_path.to_path_buf()).expect("Failed to open storage");
        let mut session = Session::start(storage, ConsoleView::new(Vec::new()))
            .expect("Failed to start session")
            .with_today(today());
        session.run(Cursor::new(script.to_string())).expect("Session failed");
        String::from_utf8(session.into_view().into_inner()).expect("Output was not UTF-8")
    }

    #[test]
    fn test_app_opens_database() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let app = ContactBookApp::new(temp_file.path().to_path_buf())
            .expect("Failed to create app");

        // A freshly created database has nothing saved yet
        assert!(matches!(app.storage().load(), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_book_persists_between_sessions() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path();

        let first = run_script(
            db_path,
            "add John 1234567890\n\
             add John 5555555555\n\
             add-birthday John 15.06.1990\n\
             add Jane 0987654321\n\
             close\n",
        );
        assert!(first.starts_with("No existing address book found. Creating a new one.\n"));
        assert!(first.contains("Address book saved successfully."));

        let second = run_script(
            db_path,
            "phone John\n\
             show-birthday John\n\
             change Jane 0987654321 1111111111\n\
             all\n\
             birthdays\n\
             exit\n",
        );
        assert!(second.starts_with("Address book loaded successfully.\n"));
        assert!(second.contains("Phones for John: 1234567890, 5555555555"));
        assert!(second.contains("Birthday for John is 15.06.1990"));
        assert!(second.contains("Phone number for Jane changed from 0987654321 to 1111111111."));
        assert!(second.contains("Jane: 1111111111\nJohn: 1234567890, 5555555555, Birthday: 15.06.1990\n"));
        assert!(second.contains("John: 17.06.2024"));

        let storage = SqliteStorage::new(db_path.to_path_buf()).expect("Failed to reopen storage");
        let book = storage.load().expect("Failed to load book");
        assert_eq!(book.find("Jane").unwrap().list_phones(), vec!["1111111111"]);
    }

    #[test]
    fn test_explicit_save_command() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to open storage");
        let mut session = Session::start(storage, ConsoleView::new(Vec::new()))
            .expect("Failed to start session");

        assert!(session.handle_line("add Ann 2222222222").unwrap());
        assert!(session.handle_line("save").unwrap());

        // Saved without leaving the session
        let other = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to open storage");
        let book = other.load().expect("Failed to load book");
        assert_eq!(book.find("Ann").unwrap().list_phones(), vec!["2222222222"]);

        let out = String::from_utf8(session.into_view().into_inner()).unwrap();
        assert!(out.contains("Address book saved."));
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let out = run_script(
            temp_file.path(),
            "add Bob 12-34\n\
             phone Bob\n\
             change Bob 1\n\
             add-birthday\n\
             birthdays\n\
             exit\n",
        );

        assert!(out.contains("Invalid phone number '12-34'. Use 10 digits."));
        assert!(out.contains("Contact not found: Bob"));
        assert!(out.contains("Not enough arguments for change command"));
        assert!(out.contains("Not enough arguments for add-birthday command"));
        assert!(out.contains("No upcoming birthdays in the next week."));
        assert!(out.ends_with("Good bye!\n"));
    }
}
