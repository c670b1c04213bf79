//! SQLite connection management for Markshelf.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! opened strictly read-only — the snapshot is never mutated.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Read-only wrapper around a `places.sqlite` snapshot connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens an existing SQLite snapshot at the given path, read-only.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the file cannot be opened as a SQLite
    /// database (missing, unreadable, or not a database).
    pub fn open_readonly<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
