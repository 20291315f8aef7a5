//! Note list and editor state, plus note form validation.
//!
//! DESIGN
//! ======
//! The create dialog and the detail editor share one rule set: a title is
//! required, and both fields are capped. Inputs are clamped while typing and
//! validated again before any request is issued.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::{Note, NoteForm};

pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 200;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_LONG: &str = "Title must be at most 50 characters";
pub const CONTENT_TOO_LONG: &str = "Content must be at most 200 characters";

/// Notes list page state.
#[derive(Clone, Debug, Default)]
pub struct NotesState {
    pub items: Vec<Note>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotesState {
    /// Replace the list after a successful fetch.
    pub fn loaded(&mut self, items: Vec<Note>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed operation without dropping the current list.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteFormErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl NoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// First message to show when only one slot is available.
    pub fn first(&self) -> Option<&'static str> {
        self.title.or(self.content)
    }
}

/// Check a note form before it is sent.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_note_form(form: &NoteForm) -> Result<(), NoteFormErrors> {
    let title = if form.title.trim().is_empty() {
        Some(TITLE_REQUIRED)
    } else if form.title.chars().count() > TITLE_MAX_CHARS {
        Some(TITLE_TOO_LONG)
    } else {
        None
    };
    let content = (form.content.chars().count() > CONTENT_MAX_CHARS).then_some(CONTENT_TOO_LONG);
    let errors = NoteFormErrors { title, content };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Truncate input to `max` characters.
pub fn clamp_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_owned(),
        None => value.to_owned(),
    }
}

/// Detail page state: the loaded note plus the edit draft.
#[derive(Clone, Debug, Default)]
pub struct NoteEditorState {
    pub note: Option<Note>,
    pub editing: bool,
    pub draft: NoteForm,
    pub error: Option<String>,
}

impl NoteEditorState {
    /// Show a freshly fetched note and reset the draft to it.
    pub fn show(&mut self, note: Note) {
        self.draft = NoteForm::from(&note);
        self.note = Some(note);
        self.editing = false;
        self.error = None;
    }

    pub fn start_editing(&mut self) {
        if let Some(note) = self.note.as_ref() {
            self.draft = NoteForm::from(note);
        }
        self.editing = true;
        self.error = None;
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = clamp_chars(title, TITLE_MAX_CHARS);
        self.error = None;
    }

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = clamp_chars(content, CONTENT_MAX_CHARS);
    }
}
