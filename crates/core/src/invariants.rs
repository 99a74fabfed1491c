//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::Note;

/// A persisted note has trimmed, non-empty content and sane timestamps
pub fn assert_note_invariants(note: &Note) {
    debug_assert!(
        !note.title.is_empty() && note.title.trim() == note.title,
        "Note {} has an empty or untrimmed title",
        note.id
    );

    debug_assert!(
        !note.description.is_empty() && note.description.trim() == note.description,
        "Note {} has an empty or untrimmed description",
        note.id
    );

    debug_assert!(
        note.created_at <= note.updated_at,
        "Note {} was updated before it was created",
        note.id
    );
}

/// Every id in a collection is distinct
pub fn assert_collection_invariants(notes: &[Note]) {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        debug_assert!(
            seen.insert(&note.id),
            "Duplicate note id {} in collection",
            note.id
        );
        assert_note_invariants(note);
    }
}
