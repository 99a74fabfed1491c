//! Storage traits
//!
//! The account directory and note store only see this interface, so the
//! SQLite backend can be swapped for a mock or a different file format.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// String key → string value persistence
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read a JSON-encoded value
pub fn get_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Write a value as JSON, replacing whatever was there
pub fn set_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
