//! SQLite storage layer for Notes
//!
//! Everything is persisted as whole values under a handful of string keys;
//! see [`StoreKey`] for the layout.

mod keys;
mod kv;
mod migrations;
mod traits;

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::directory::AccountDirectory;
use crate::error::Result;
use crate::notes::NoteStore;

pub use keys::StoreKey;
pub use kv::KvStore;
pub use traits::{get_json, set_json, KeyValueStore};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)
    }

    /// Get current schema version
    pub fn schema_version(&self) -> Result<u32> {
        migrations::current_version(&self.conn)
    }

    /// Raw key-value access
    pub fn kv(&self) -> KvStore<'_> {
        KvStore::new(&self.conn)
    }

    /// Account directory, session pointer and theme
    pub fn accounts(&self) -> AccountDirectory<'_, Self> {
        AccountDirectory::new(self)
    }

    /// Note collection of one user
    pub fn notes(&self, username: &str) -> NoteStore<'_, Self> {
        NoteStore::new(self, username)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.kv().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.kv().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.kv().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopening_a_file_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");

        {
            let db = Database::open(&path).unwrap();
            db.set("theme", "dark").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(db.schema_version().unwrap(), migrations::latest_version());
    }

    #[test]
    fn test_json_helpers_round_trip_through_trait() {
        let db = Database::open_in_memory().unwrap();
        set_json(&db, "numbers", &vec![1, 2, 3]).unwrap();

        let back: Option<Vec<i32>> = get_json(&db, "numbers").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));

        let missing: Option<Vec<i32>> = get_json(&db, "absent").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_corrupt_json_is_a_serialization_error() {
        let db = Database::open_in_memory().unwrap();
        db.set("users", "{not json").unwrap();

        let result: Result<Option<Vec<i32>>> = get_json(&db, "users");
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
