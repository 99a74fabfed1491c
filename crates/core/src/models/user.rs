//! User model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, keyed by username in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Argon2 PHC string, never the raw password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(password_hash: String) -> Self {
        Self {
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Username → credential record, persisted as one JSON object
pub type UserDirectory = BTreeMap<String, UserRecord>;
