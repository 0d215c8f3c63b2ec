/// SQLite implementation of the address book storage interface
///
/// This module provides the concrete SQLite storage. The whole book is
/// written in one transaction, so a failed save leaves the previous copy intact.

use std::path::PathBuf;
use rusqlite::{Connection, params};
use chrono::{NaiveDate, Utc};

use crate::domain::{AddressBook, Birthday, Name, PhoneNumber, Record};
use crate::storage::{AddressBookStorage, StorageError, migrations};

/// SQLite-based storage implementation
pub struct SqliteStorage {
    conn: Connection,
}

/// A contacts row as read from the database, before validation
struct ContactRow {
    name: String,
    phones_json: String,
    birthday: Option<String>,
}

/// Text form rusqlite writes for a NaiveDate
const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens (or creates) the database file and makes sure the schema
    /// exists. Opening does not imply a saved book exists; see `load`.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create a storage instance backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Whether a book has ever been saved to this database
    pub fn has_saved_book(&self) -> Result<bool, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM book_meta WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Turn a raw row into a validated Record
    fn row_to_record(row: ContactRow) -> Result<Record, StorageError> {
        let name = Name::new(row.name.clone()).map_err(|e| StorageError::Corrupt {
            name: row.name.clone(),
            reason: e.to_string(),
        })?;

        // PhoneNumber's Deserialize impl re-validates every number
        let phones: Vec<PhoneNumber> = serde_json::from_str(&row.phones_json)
            .map_err(|e| StorageError::Corrupt {
                name: row.name.clone(),
                reason: format!("invalid phone list: {}", e),
            })?;

        let birthday = match row.birthday.as_deref() {
            Some(text) => {
                let date = NaiveDate::parse_from_str(text, STORED_DATE_FORMAT).map_err(|e| {
                    StorageError::Corrupt {
                        name: row.name.clone(),
                        reason: format!("invalid birthday '{}': {}", text, e),
                    }
                })?;
                Some(Birthday::from_date(date))
            }
            None => None,
        };

        Ok(Record::from_existing(name, phones, birthday))
    }
}

impl AddressBookStorage for SqliteStorage {
    /// Load every saved contact into a fresh AddressBook
    fn load(&self) -> Result<AddressBook, StorageError> {
        if !self.has_saved_book()? {
            return Err(StorageError::NotFound);
        }

        let mut stmt = self.conn.prepare(
            "SELECT name, phones, birthday FROM contacts ORDER BY name"
        )?;

        let row_iter = stmt.query_map([], |row| {
            Ok(ContactRow {
                name: row.get(0)?,
                phones_json: row.get(1)?,
                birthday: row.get(2)?,
            })
        })?;

        let mut book = AddressBook::new();
        for row in row_iter {
            book.upsert(Self::row_to_record(row?)?);
        }

        tracing::debug!("Loaded {} contacts", book.len());
        Ok(book)
    }

    /// Replace the stored contacts with the contents of `book`
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute("DELETE FROM contacts", [])?;

        {
            let mut insert = tx.prepare(
                "INSERT INTO contacts (name, phones, birthday) VALUES (?1, ?2, ?3)"
            )?;
            for record in book.all() {
                let phones_json = serde_json::to_string(record.phones())?;
                insert.execute(params![
                    record.name().as_str(),
                    phones_json,
                    record.birthday().map(|b| b.date()),
                ])?;
            }
        }

        tx.execute(
            "INSERT OR REPLACE INTO book_meta (id, saved_at, contact_count) VALUES (1, ?1, ?2)",
            params![Utc::now().to_rfc3339(), book.len() as i64],
        )?;

        tx.commit()?;

        tracing::debug!("Saved {} contacts", book.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_phone("1234567890").unwrap();
        john.set_birthday("10.06.1990").unwrap();
        book.upsert(john);

        let mut jane = Record::new("Jane").unwrap();
        jane.add_phone("0987654321").unwrap();
        book.upsert(jane);

        book
    }

    #[test]
    fn test_load_before_any_save_is_not_found() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(!storage.has_saved_book().unwrap());
        assert!(matches!(storage.load(), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let book = sample_book();

        storage.save(&book).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, book);
        let john = loaded.find("John").unwrap();
        assert_eq!(john.list_phones(), vec!["1234567890", "5555555555", "1234567890"]);
        assert_eq!(john.birthday_text(), Some("10.06.1990".to_string()));
        assert_eq!(loaded.find("Jane").unwrap().birthday(), None);
    }

    #[test]
    fn test_empty_book_save_is_loadable() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.save(&AddressBook::new()).unwrap();

        let loaded = storage.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.save(&sample_book()).unwrap();

        let mut smaller = AddressBook::new();
        smaller.upsert(Record::new("Solo").unwrap());
        storage.save(&smaller).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.find("John").is_none());
    }

    #[test]
    fn test_corrupt_phone_list_reported() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.save(&AddressBook::new()).unwrap();
        storage
            .conn
            .execute(
                "INSERT INTO contacts (name, phones) VALUES ('Broken', '[\"12-34\"]')",
                [],
            )
            .unwrap();

        match storage.load() {
            Err(StorageError::Corrupt { name, .. }) => assert_eq!(name, "Broken"),
            other => panic!("expected corrupt record error, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_birthday_reported() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage.save(&AddressBook::new()).unwrap();
        storage
            .conn
            .execute(
                "INSERT INTO contacts (name, phones, birthday) VALUES ('Bad', '[]', 'not-a-date')",
                [],
            )
            .unwrap();

        match storage.load() {
            Err(StorageError::Corrupt { name, reason }) => {
                assert_eq!(name, "Bad");
                assert!(reason.contains("not-a-date"));
            }
            other => panic!("expected corrupt record error, got {:?}", other),
        }
    }
}
