//! Notes dashboard view model

use notes_core::{NoteId, SortKey};

use crate::frontend::{Frontend, NoteItem, NoteListing};
use crate::state::AppState;

const LOGIN_REQUIRED: &str = "Please log in first";

/// Active username, or tell the user to log in
fn require_session<F: Frontend>(state: &AppState, ui: &mut F) -> Option<String> {
    let username = state.current_username().map(str::to_string);
    if username.is_none() {
        ui.show_notes_error(LOGIN_REQUIRED);
    }
    username
}

/// Re-run the current search and sort and redraw the list
pub fn refresh<F: Frontend>(state: &AppState, ui: &mut F) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    let dashboard = &state.dashboard;
    match state
        .notes_for(&username)
        .view(&dashboard.query, dashboard.sort)
    {
        Ok(notes) => ui.show_notes(&NoteListing {
            items: notes.iter().map(NoteItem::from).collect(),
            query: dashboard.query.clone(),
            sort: dashboard.sort,
        }),
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

pub fn create<F: Frontend>(state: &AppState, ui: &mut F, title: &str, description: &str) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    match state.notes_for(&username).create(title, description) {
        Ok(note) => {
            ui.show_status(&format!("Created note {}", note.id));
            refresh(state, ui);
        }
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

pub fn edit<F: Frontend>(state: &AppState, ui: &mut F, id: &str, title: &str, description: &str) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    match state
        .notes_for(&username)
        .update(&NoteId::from(id), title, description)
    {
        Ok(note) => {
            ui.show_status(&format!("Updated note {}", note.id));
            refresh(state, ui);
        }
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

pub fn delete<F: Frontend>(state: &AppState, ui: &mut F, id: &str) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    if !ui.confirm("Are you sure you want to delete this note?") {
        return;
    }

    match state.notes_for(&username).delete(&NoteId::from(id)) {
        Ok(true) => {
            ui.show_status(&format!("Deleted note {}", id));
            refresh(state, ui);
        }
        Ok(false) => refresh(state, ui),
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

pub fn show<F: Frontend>(state: &AppState, ui: &mut F, id: &str) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    match state.notes_for(&username).get(&NoteId::from(id)) {
        Ok(Some(note)) => ui.show_note(&NoteItem::from(&note)),
        Ok(None) => ui.show_notes_error(&format!("Note not found: {}", id)),
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

/// Put "<title>\n\n<description>" on the clipboard
pub fn copy<F: Frontend>(state: &AppState, ui: &mut F, id: &str) {
    let Some(username) = require_session(state, ui) else {
        return;
    };

    match state.notes_for(&username).get(&NoteId::from(id)) {
        Ok(Some(note)) => {
            if ui.copy_to_clipboard(&note.clipboard_text()) {
                ui.show_status("Copied to clipboard");
            } else {
                ui.show_notes_error("Could not access the clipboard");
            }
        }
        Ok(None) => ui.show_notes_error(&format!("Note not found: {}", id)),
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}

pub fn search<F: Frontend>(state: &mut AppState, ui: &mut F, query: &str) {
    state.dashboard.query = query.to_string();
    refresh(state, ui);
}

pub fn sort<F: Frontend>(state: &mut AppState, ui: &mut F, key: &str) {
    match key.parse::<SortKey>() {
        Ok(key) => {
            state.dashboard.sort = key;
            refresh(state, ui);
        }
        Err(e) => ui.show_notes_error(&e.to_string()),
    }
}
