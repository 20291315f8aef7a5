use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::state::notes::TITLE_REQUIRED;

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    List,
    Get(String),
    Create(NoteForm),
    Update(String, NoteForm),
    Delete(String),
}

/// In-memory notes service recording every request.
#[derive(Default)]
struct FakeNotesApi {
    notes: RefCell<Vec<Note>>,
    calls: RefCell<Vec<Call>>,
    fail_status: Cell<Option<u16>>,
    reads_offline: Cell<bool>,
}

impl FakeNotesApi {
    fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes: RefCell::new(notes), ..Self::default() }
    }

    fn failing(status: u16) -> Self {
        let api = Self::default();
        api.fail_status.set(Some(status));
        api
    }

    /// Writes succeed but list and get report a transport failure.
    fn with_reads_offline(notes: Vec<Note>) -> Self {
        let api = Self::with_notes(notes);
        api.reads_offline.set(true);
        api
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let is_read = matches!(call, Call::List | Call::Get(_));
        self.calls.borrow_mut().push(call);
        if is_read && self.reads_offline.get() {
            return Err(ApiError::Network("offline".to_owned()));
        }
        match self.fail_status.get() {
            Some(status) => Err(ApiError::Status(status)),
            None => Ok(()),
        }
    }
}

impl NotesApi for FakeNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.record(Call::List)?;
        Ok(self.notes.borrow().clone())
    }

    async fn get_note(&self, id: &str) -> Result<Note, ApiError> {
        self.record(Call::Get(id.to_owned()))?;
        self.notes
            .borrow()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create_note(&self, form: &NoteForm) -> Result<Note, ApiError> {
        self.record(Call::Create(form.clone()))?;
        let id = (self.notes.borrow().len() + 1).to_string();
        let note = make_note(&id, &form.title, &form.content);
        self.notes.borrow_mut().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &str, form: &NoteForm) -> Result<Note, ApiError> {
        self.record(Call::Update(id.to_owned(), form.clone()))?;
        let mut notes = self.notes.borrow_mut();
        let note = notes.iter_mut().find(|n| n.id == id).ok_or(ApiError::Status(404))?;
        note.title.clone_from(&form.title);
        note.content.clone_from(&form.content);
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(id.to_owned()))?;
        self.notes.borrow_mut().retain(|n| n.id != id);
        Ok(())
    }
}

fn make_note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        updated_at: "2024-01-01T00:00:00.000Z".to_owned(),
        owner: "u-1".to_owned(),
    }
}

// =============================================================
// Create
// =============================================================

#[test]
fn create_sends_exact_body_and_refetches() {
    let api = FakeNotesApi::with_notes(vec![make_note("1", "Test Note", "Test Content")]);
    let form = NoteForm::new("New Note", "New Content");

    let created = block_on(create_note(&api, &form)).unwrap();
    let notes = created.list.unwrap();

    assert_eq!(api.calls(), vec![Call::Create(NoteForm::new("New Note", "New Content")), Call::List]);
    assert_eq!(created.note.title, "New Note");
    assert!(notes.iter().any(|n| n.title == "New Note" && n.content == "New Content"));
    assert_eq!(notes.len(), 2);
}

#[test]
fn create_with_blank_title_issues_no_request() {
    let api = FakeNotesApi::default();
    let err = block_on(create_note(&api, &NoteForm::new("  ", "content"))).unwrap_err();
    assert_eq!(err.user_message(), TITLE_REQUIRED);
    assert!(api.calls().is_empty());
}

#[test]
fn create_failure_surfaces_message() {
    let api = FakeNotesApi::failing(500);
    let err = block_on(create_note(&api, &NoteForm::new("A", "B"))).unwrap_err();
    assert_eq!(err.user_message(), "Failed to create note");
    assert_eq!(err, NoteActionError::Api { action: NoteAction::Create, source: ApiError::Status(500) });
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn create_succeeds_even_when_refetch_fails() {
    let api = FakeNotesApi::with_reads_offline(Vec::new());

    let created = block_on(create_note(&api, &NoteForm::new("Once", "Only"))).unwrap();

    assert_eq!(created.note.title, "Once");
    let refetch = created.list.unwrap_err();
    assert_eq!(refetch.user_message(), "Failed to load notes");
    assert_eq!(api.calls(), vec![Call::Create(NoteForm::new("Once", "Only")), Call::List]);
    assert_eq!(api.notes.borrow().len(), 1);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_sends_id_and_refetches_without_it() {
    let api = FakeNotesApi::with_notes(vec![make_note("1", "Test Note", "Test Content"), make_note("2", "Keep", "")]);

    let notes = block_on(delete_note(&api, "1")).unwrap();

    assert_eq!(api.calls(), vec![Call::Delete("1".to_owned()), Call::List]);
    assert!(notes.iter().all(|n| n.id != "1"));
    assert_eq!(notes.len(), 1);
}

#[test]
fn delete_failure_surfaces_message() {
    let api = FakeNotesApi::failing(403);
    let err = block_on(delete_note(&api, "1")).unwrap_err();
    assert_eq!(err.user_message(), "Failed to delete note");
    assert_eq!(api.calls(), vec![Call::Delete("1".to_owned())]);
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_notes_returns_service_list() {
    let api = FakeNotesApi::with_notes(vec![make_note("1", "A", "")]);
    assert_eq!(block_on(load_notes(&api)).unwrap().len(), 1);
}

#[test]
fn load_notes_failure_surfaces_message() {
    let api = FakeNotesApi::failing(502);
    assert_eq!(block_on(load_notes(&api)).unwrap_err().user_message(), "Failed to load notes");
}

#[test]
fn load_note_missing_reports_fetch_failure() {
    let api = FakeNotesApi::default();
    let err = block_on(load_note(&api, "nope")).unwrap_err();
    assert_eq!(err.user_message(), "Failed to load note");
}

// =============================================================
// Save (detail edit)
// =============================================================

#[test]
fn save_with_empty_title_blocks_request() {
    let api = FakeNotesApi::with_notes(vec![make_note("1", "Title", "Body")]);
    let err = block_on(save_note(&api, "1", &NoteForm::new("", "Body"))).unwrap_err();
    assert_eq!(err.user_message(), "Title is required");
    assert_eq!(err.field_errors().and_then(|e| e.title), Some(TITLE_REQUIRED));
    assert!(api.calls().is_empty());
}

#[test]
fn save_updates_full_fields_and_refetches() {
    let api = FakeNotesApi::with_notes(vec![make_note("1", "Title", "Body")]);
    let form = NoteForm::new("Edited", "New body");

    let note = block_on(save_note(&api, "1", &form)).unwrap();

    assert_eq!(api.calls(), vec![Call::Update("1".to_owned(), form), Call::Get("1".to_owned())]);
    assert_eq!(note.title, "Edited");
    assert_eq!(note.content, "New body");
}

#[test]
fn save_failure_surfaces_update_message() {
    let api = FakeNotesApi::failing(500);
    let err = block_on(save_note(&api, "1", &NoteForm::new("T", "C"))).unwrap_err();
    assert_eq!(err.user_message(), "Failed to update note");
    assert!(err.field_errors().is_none());
}

#[test]
fn save_falls_back_to_update_response_when_refetch_fails() {
    let api = FakeNotesApi::with_reads_offline(vec![make_note("1", "Title", "Body")]);
    let form = NoteForm::new("Edited", "Saved");

    let note = block_on(save_note(&api, "1", &form)).unwrap();

    assert_eq!(note.title, "Edited");
    assert_eq!(note.content, "Saved");
    assert_eq!(api.calls(), vec![Call::Update("1".to_owned(), form), Call::Get("1".to_owned())]);
}
