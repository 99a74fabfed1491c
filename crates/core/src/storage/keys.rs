//! Store key layout

use std::fmt;

const NOTES_PREFIX: &str = "notes_";

/// A named slot in the key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKey<'a> {
    /// Username → credential record mapping
    Users,
    /// Active username, absent when logged out
    CurrentUser,
    /// "dark" or "light"
    Theme,
    /// One user's note collection
    Notes(&'a str),
}

impl StoreKey<'_> {
    pub fn as_key(&self) -> String {
        match self {
            StoreKey::Users => "users".to_string(),
            StoreKey::CurrentUser => "currentUser".to_string(),
            StoreKey::Theme => "theme".to_string(),
            StoreKey::Notes(username) => format!("{}{}", NOTES_PREFIX, username),
        }
    }
}

impl fmt::Display for StoreKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}
