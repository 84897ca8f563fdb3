//! SQLite-backed key-value storage.
//!
//! Everything lives in a single `app_state(key, value)` table.

use super::KeyValueStore;
use crate::error::VocabResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> VocabResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        log::debug!("opened storage at {}", path.as_ref().display());
        Self::init(conn)
    }

    /// Opens a private in-memory database, gone when dropped.
    pub fn open_in_memory() -> VocabResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> VocabResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;
        Ok(Self { conn })
    }

    /// Number of stored keys.
    pub fn len(&self) -> VocabResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM app_state", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl KeyValueStore for SqliteStorage {
    fn get_item(&self, key: &str) -> VocabResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> VocabResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> VocabResult<()> {
        self.conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(())
    }
}
