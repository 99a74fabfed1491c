//! Note model

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Opaque note identifier, derived from the creation time in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    /// Fresh id for a collection: the current millisecond, bumped past any
    /// numeric id already present so ids keep increasing.
    pub fn generate(existing: &[Note], now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        let highest = existing
            .iter()
            .filter_map(|n| n.id.0.parse::<i64>().ok())
            .max();

        let next = match highest {
            Some(h) if h >= millis => h.saturating_add(1),
            _ => millis,
        };
        NoteId(next.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId(s.to_string())
    }
}

/// A user-owned note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: NoteId, title: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace content, keeping id and creation time
    pub fn revise(&mut self, title: String, description: String, now: DateTime<Utc>) {
        self.title = title;
        self.description = description;
        self.updated_at = later_than(self.updated_at, now);
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Copy-out format for the clipboard
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.description)
    }
}

/// `now`, or one millisecond past `previous` if the clock has not moved on
fn later_than(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
