/// Database schema management
///
/// This module creates the SQLite tables the address book is stored in and
/// records the schema version it created.

use rusqlite::Connection;
use crate::storage::StorageError;

/// Current database schema version
const CURRENT_VERSION: i32 = 1;

/// Initialize the database schema
///
/// This creates all required tables if they don't exist. A database written
/// by a newer version of the program is refused rather than modified.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let current_version = get_current_version(conn)?;

    if current_version > CURRENT_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema version {} is newer than supported version {}",
            current_version, CURRENT_VERSION
        )));
    }

    if current_version < CURRENT_VERSION {
        create_schema(conn)?;
        set_version(conn, CURRENT_VERSION)?;
    }

    Ok(())
}

/// Get the current database schema version, 0 for a fresh database
fn get_current_version(conn: &Connection) -> Result<i32, StorageError> {
    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get::<_, i32>(0),
    )?;

    Ok(version)
}

/// Set the database schema version
fn set_version(conn: &Connection, version: i32) -> Result<(), StorageError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Create the contact tables
///
/// Phones are kept as a JSON array in the contact row so their order is
/// preserved without a separate position column.
fn create_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contacts (
            name TEXT PRIMARY KEY,
            phones TEXT NOT NULL DEFAULT '[]',
            birthday TEXT
        )",
        [],
    )?;

    // Single row that exists once the book has been saved at least once
    conn.execute(
        "CREATE TABLE IF NOT EXISTS book_meta (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            saved_at TEXT NOT NULL,
            contact_count INTEGER NOT NULL
        )",
        [],
    )?;

    tracing::info!("Created address book schema v{}", CURRENT_VERSION);
    Ok(())
}
