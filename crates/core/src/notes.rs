//! Note store
//!
//! One user's notes, kept as a single JSON array under `notes_<username>`.
//! The stored order is newest-created first; listing order is decided by
//! [`sort_notes`] and never written back.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::invariants::assert_collection_invariants;
use crate::models::{Note, NoteId, SortKey};
use crate::storage::{get_json, set_json, KeyValueStore, StoreKey};
use crate::validation::validate_note;

pub struct NoteStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    username: String,
}

impl<'a, S: KeyValueStore + ?Sized> NoteStore<'a, S> {
    pub fn new(store: &'a S, username: &str) -> Self {
        Self {
            store,
            username: username.to_string(),
        }
    }

    fn key(&self) -> String {
        StoreKey::Notes(&self.username).as_key()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        assert_collection_invariants(notes);
        set_json(self.store, &self.key(), notes)?;
        debug!(count = notes.len(), "Saved note collection");
        Ok(())
    }

    /// The whole collection in stored order; empty if nothing was saved yet
    pub fn load_all(&self) -> Result<Vec<Note>> {
        Ok(get_json(self.store, &self.key())?.unwrap_or_default())
    }

    pub fn get(&self, id: &NoteId) -> Result<Option<Note>> {
        Ok(self.load_all()?.into_iter().find(|n| &n.id == id))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    /// Validate, assign a fresh id, and put the note at the front
    #[instrument(skip(self, title, description), fields(username = %self.username))]
    pub fn create(&self, title: &str, description: &str) -> Result<Note> {
        let (title, description) = validate_note(title, description)?;
        let mut notes = self.load_all()?;

        let now = Utc::now();
        let note = Note::new(NoteId::generate(&notes, now), title, description, now);
        notes.insert(0, note.clone());
        self.save(&notes)?;

        debug!(id = %note.id, "Note created");
        Ok(note)
    }

    /// Replace title and description, keeping id, creation time and position
    #[instrument(skip(self, title, description), fields(username = %self.username))]
    pub fn update(&self, id: &NoteId, title: &str, description: &str) -> Result<Note> {
        let (title, description) = validate_note(title, description)?;
        let mut notes = self.load_all()?;

        let note = notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        note.revise(title, description, Utc::now());
        let updated = note.clone();

        self.save(&notes)?;
        Ok(updated)
    }

    /// Remove a note. Returns whether anything was removed; an unknown id
    /// leaves the collection as it was.
    #[instrument(skip(self), fields(username = %self.username))]
    pub fn delete(&self, id: &NoteId) -> Result<bool> {
        let mut notes = self.load_all()?;
        let before = notes.len();
        notes.retain(|n| &n.id != id);

        let removed = notes.len() != before;
        self.save(&notes)?;
        Ok(removed)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Note>> {
        Ok(filter_notes(self.load_all()?, query))
    }

    /// Filtered and ordered listing for display
    pub fn view(&self, query: &str, key: SortKey) -> Result<Vec<Note>> {
        Ok(sort_notes(self.search(query)?, key))
    }
}

/// Keep notes whose title or description contains `query`, ignoring case.
/// A blank query keeps everything; otherwise surrounding spaces are part of
/// the text searched for.
pub fn filter_notes(notes: Vec<Note>, query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return notes;
    }

    let needle = query.to_lowercase();
    notes.into_iter().filter(|n| n.matches(&needle)).collect()
}

/// Stable sort by `key`
pub fn sort_notes(mut notes: Vec<Note>, key: SortKey) -> Vec<Note> {
    notes.sort_by(|a, b| key.compare(a, b));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use chrono::Duration;

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_empty_collection_for_new_user() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.notes("alice").load_all().unwrap().is_empty());
        assert_eq!(db.notes("alice").count().unwrap(), 0);
    }

    #[test]
    fn test_create_then_load() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");

        let created = store.create("Title", "Body").unwrap();
        let notes = store.load_all().unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0], created);
        assert_eq!(notes[0].title, "Title");
        assert_eq!(notes[0].description, "Body");
        assert_eq!(notes[0].created_at, notes[0].updated_at);
    }

    #[test]
    fn test_create_trims_content() {
        let db = Database::open_in_memory().unwrap();
        let note = db.notes("alice").create("  Title  ", "\nBody ").unwrap();
        assert_eq!(note.title, "Title");
        assert_eq!(note.description, "Body");
    }

    #[test]
    fn test_create_rejects_empty_fields_without_persisting() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");

        assert!(matches!(store.create("", "x"), Err(Error::Validation(_))));
        assert!(matches!(store.create("x", ""), Err(Error::Validation(_))));
        assert!(matches!(store.create("  ", "x"), Err(Error::Validation(_))));

        assert!(store.load_all().unwrap().is_empty());
        assert!(db.get("notes_alice").unwrap().is_none());
    }

    #[test]
    fn test_newest_created_is_stored_first_with_distinct_ids() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");

        let first = store.create("First", "1").unwrap();
        let second = store.create("Second", "2").unwrap();

        let notes = store.load_all().unwrap();
        assert_eq!(titles(&notes), vec!["Second", "First"]);
        assert_ne!(first.id, second.id);

        let a: i64 = first.id.as_str().parse().unwrap();
        let b: i64 = second.id.as_str().parse().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_update_preserves_identity_and_advances_updated_at() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        let original = store.create("Old", "Body").unwrap();

        let updated = store.update(&original.id, "New", "Body2").unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.description, "Body2");
        assert!(updated.updated_at > original.updated_at);

        assert_eq!(store.load_all().unwrap(), vec![updated]);
    }

    #[test]
    fn test_update_keeps_stored_position() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        let older = store.create("Older", "1").unwrap();
        store.create("Newer", "2").unwrap();

        store.update(&older.id, "Older edited", "1").unwrap();
        assert_eq!(
            titles(&store.load_all().unwrap()),
            vec!["Newer", "Older edited"]
        );
    }

    #[test]
    fn test_update_validates_and_reports_missing_id() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        let note = store.create("Title", "Body").unwrap();

        assert!(matches!(
            store.update(&note.id, "", "Body"),
            Err(Error::Validation(_))
        ));
        assert_eq!(store.get(&note.id).unwrap().unwrap().title, "Title");

        let err = store
            .update(&NoteId::from("missing"), "T", "D")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "Note not found: missing");
    }

    #[test]
    fn test_delete_removes_exactly_one_and_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        let keep = store.create("Keep", "1").unwrap();
        let gone = store.create("Gone", "2").unwrap();

        assert!(store.delete(&gone.id).unwrap());
        assert_eq!(store.load_all().unwrap(), vec![keep.clone()]);

        assert!(!store.delete(&gone.id).unwrap());
        assert_eq!(store.load_all().unwrap(), vec![keep]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_both_fields() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        store.create("Hello world", "first").unwrap();
        store.create("Groceries", "say HELLO to the baker").unwrap();
        store.create("Unrelated", "nothing here").unwrap();

        let found = store.search("hello").unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|n| n.matches("hello")));

        assert_eq!(store.search("").unwrap().len(), 3);
        assert_eq!(store.search("   ").unwrap().len(), 3);
        assert!(store.search("zebra").unwrap().is_empty());
    }

    #[test]
    fn test_search_keeps_surrounding_spaces_in_query() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        store.create("Buttermilk", "pancakes").unwrap();
        store.create("Shopping", "oat milk and eggs").unwrap();

        let found = store.search(" milk").unwrap();
        assert_eq!(titles(&found), vec!["Shopping"]);
        assert!(store.search("  milk").unwrap().is_empty());
        assert_eq!(store.search("milk").unwrap().len(), 2);
    }

    #[test]
    fn test_sort_by_title_and_dates() {
        let now = Utc::now();
        let mk = |id: &str, title: &str, created_mins: i64, updated_mins: i64| Note {
            id: NoteId::from(id),
            title: title.to_string(),
            description: "d".to_string(),
            created_at: now + Duration::minutes(created_mins),
            updated_at: now + Duration::minutes(updated_mins),
        };
        let notes = vec![
            mk("1", "banana", 0, 5),
            mk("2", "Apple", 1, 2),
            mk("3", "cherry", 2, 3),
        ];

        assert_eq!(
            titles(&sort_notes(notes.clone(), SortKey::Title)),
            vec!["Apple", "banana", "cherry"]
        );
        assert_eq!(
            titles(&sort_notes(notes.clone(), SortKey::Updated)),
            vec!["banana", "cherry", "Apple"]
        );
        assert_eq!(
            titles(&sort_notes(notes, SortKey::Created)),
            vec!["cherry", "Apple", "banana"]
        );
    }

    #[test]
    fn test_view_does_not_reorder_storage() {
        let db = Database::open_in_memory().unwrap();
        let store = db.notes("alice");
        store.create("b note", "x").unwrap();
        store.create("a note", "x").unwrap();
        store.create("c other", "x").unwrap();

        let listed = store.view("note", SortKey::Title).unwrap();
        assert_eq!(titles(&listed), vec!["a note", "b note"]);

        assert_eq!(
            titles(&store.load_all().unwrap()),
            vec!["c other", "a note", "b note"]
        );
    }

    #[test]
    fn test_users_cannot_see_each_others_notes() {
        let db = Database::open_in_memory().unwrap();
        let alice = db.notes("alice");
        let bob = db.notes("bob");

        let secret = alice.create("Alice only", "private").unwrap();

        assert!(bob.load_all().unwrap().is_empty());
        assert!(bob.get(&secret.id).unwrap().is_none());
        assert!(bob.search("alice").unwrap().is_empty());
        assert!(matches!(
            bob.update(&secret.id, "Hijack", "x"),
            Err(Error::NotFound(_))
        ));
        assert!(!bob.delete(&secret.id).unwrap());

        assert_eq!(alice.load_all().unwrap(), vec![secret]);
        assert!(db.get("notes_alice").unwrap().is_some());
    }
}
