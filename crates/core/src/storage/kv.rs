//! SQLite-backed key-value table

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::{debug, instrument};

use crate::error::Result;

pub struct KvStore<'a> {
    conn: &'a Connection,
}

impl<'a> KvStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        debug!(found = value.is_some(), "Read store key");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }

}

trait OptionalExt<T> {
    fn optional(self) -> std::result::Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> std::result::Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::Database;

    #[test]
    fn test_set_get_overwrite_remove() {
        let db = Database::open_in_memory().unwrap();
        let kv = db.kv();

        assert_eq!(kv.get("theme").unwrap(), None);

        kv.set("theme", "dark").unwrap();
        assert_eq!(kv.get("theme").unwrap().as_deref(), Some("dark"));

        kv.set("theme", "light").unwrap();
        assert_eq!(kv.get("theme").unwrap().as_deref(), Some("light"));

        kv.remove("theme").unwrap();
        assert_eq!(kv.get("theme").unwrap(), None);

        // Removing again is fine
        kv.remove("theme").unwrap();
    }
}
