//! Presentation surface
//!
//! View models push their results through [`Frontend`]; the console is one
//! implementation and tests use a recording one.

use chrono::{DateTime, Local, Utc};
use notes_core::{Note, SortKey, Theme};

/// A note as rendered in the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// e.g. "Oct 16, 2026"
    pub updated: String,
}

impl From<&Note> for NoteItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title.clone(),
            description: note.description.clone(),
            updated: format_date(note.updated_at),
        }
    }
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Dashboard contents after a filter/sort pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListing {
    pub items: Vec<NoteItem>,
    pub query: String,
    pub sort: SortKey,
}

impl NoteListing {
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// "1 note", "3 notes", "2 notes found"
    pub fn summary(&self) -> String {
        let n = self.items.len();
        let noun = if n == 1 { "note" } else { "notes" };
        if self.has_query() {
            format!("{} {} found", n, noun)
        } else {
            format!("{} {}", n, noun)
        }
    }

    /// Heading and hint shown instead of an empty list
    pub fn empty_state(&self) -> (&'static str, &'static str) {
        if self.has_query() {
            ("No notes found", "Try a different search term")
        } else {
            ("No notes yet", "Create your first note to get started")
        }
    }
}

pub trait Frontend {
    fn show_auth_error(&mut self, message: &str);
    fn show_auth_success(&mut self, message: &str);
    fn show_logged_in(&mut self, username: &str);
    fn show_logged_out(&mut self);
    fn show_theme(&mut self, theme: Theme);
    fn show_notes(&mut self, listing: &NoteListing);
    fn show_note(&mut self, note: &NoteItem);
    fn show_notes_error(&mut self, message: &str);
    fn show_status(&mut self, message: &str);

    /// Yes/no question; `false` means the action must not run
    fn confirm(&mut self, question: &str) -> bool;

    /// Returns false if no clipboard could be reached
    fn copy_to_clipboard(&mut self, text: &str) -> bool;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records everything the view models push
    #[derive(Default)]
    pub struct RecordingFrontend {
        pub auth_errors: Vec<String>,
        pub auth_successes: Vec<String>,
        pub logged_in_as: Option<String>,
        pub theme: Option<Theme>,
        pub listings: Vec<NoteListing>,
        pub shown: Vec<NoteItem>,
        pub notes_errors: Vec<String>,
        pub statuses: Vec<String>,
        pub questions: Vec<String>,
        pub clipboard: Vec<String>,
        /// Answer given to every confirmation
        pub answer: bool,
    }

    impl RecordingFrontend {
        pub fn agreeing() -> Self {
            Self {
                answer: true,
                ..Self::default()
            }
        }

        pub fn last_listing(&self) -> &NoteListing {
            self.listings.last().expect("no listing rendered")
        }
    }

    impl Frontend for RecordingFrontend {
        fn show_auth_error(&mut self, message: &str) {
            self.auth_errors.push(message.to_string());
        }

        fn show_auth_success(&mut self, message: &str) {
            self.auth_successes.push(message.to_string());
        }

        fn show_logged_in(&mut self, username: &str) {
            self.logged_in_as = Some(username.to_string());
        }

        fn show_logged_out(&mut self) {
            self.logged_in_as = None;
        }

        fn show_theme(&mut self, theme: Theme) {
            self.theme = Some(theme);
        }

        fn show_notes(&mut self, listing: &NoteListing) {
            self.listings.push(listing.clone());
        }

        fn show_note(&mut self, note: &NoteItem) {
            self.shown.push(note.clone());
        }

        fn show_notes_error(&mut self, message: &str) {
            self.notes_errors.push(message.to_string());
        }

        fn show_status(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }

        fn confirm(&mut self, question: &str) -> bool {
            self.questions.push(question.to_string());
            self.answer
        }

        fn copy_to_clipboard(&mut self, text: &str) -> bool {
            self.clipboard.push(text.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(n: usize, query: &str) -> NoteListing {
        let item = NoteItem {
            id: "1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            updated: "Jan 1, 2026".to_string(),
        };
        NoteListing {
            items: vec![item; n],
            query: query.to_string(),
            sort: SortKey::Updated,
        }
    }

    #[test]
    fn test_summary_pluralizes_and_marks_search() {
        assert_eq!(listing(1, "").summary(), "1 note");
        assert_eq!(listing(3, "").summary(), "3 notes");
        assert_eq!(listing(0, "milk").summary(), "0 notes found");
    }

    #[test]
    fn test_empty_state_depends_on_query() {
        assert_eq!(listing(0, "").empty_state().0, "No notes yet");
        assert_eq!(listing(0, "x").empty_state().0, "No notes found");
    }

    #[test]
    fn test_date_format_is_short_month_day_year() {
        let at = DateTime::parse_from_rfc3339("2026-10-16T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_date(at);
        // Local offset can shift the day by one
        assert!(formatted.starts_with("Oct 1"));
        assert!(formatted.ends_with(", 2026"));
    }
}
