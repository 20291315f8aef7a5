//! Note operations shared by the list and detail pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` with the browser `HttpApi`. Each flow
//! validates locally, issues one mutation, then refetches so the page shows
//! what the server stored.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged here and returned with a user-facing message, so
//! list, create, delete and update all surface errors the same way.

#[cfg(test)]
#[path = "note_actions_test.rs"]
mod note_actions_test;

use crate::net::api::{ApiError, NotesApi};
use crate::net::types::{Note, NoteForm};
use crate::state::notes::{NoteFormErrors, validate_note_form};

/// Which operation failed, for messages and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteAction {
    Load,
    Fetch,
    Create,
    Update,
    Delete,
}

impl NoteAction {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load notes",
            Self::Fetch => "Failed to load note",
            Self::Create => "Failed to create note",
            Self::Update => "Failed to update note",
            Self::Delete => "Failed to delete note",
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NoteActionError {
    #[error("note form rejected: {0:?}")]
    Invalid(NoteFormErrors),
    #[error("{action:?} failed: {source}")]
    Api {
        action: NoteAction,
        #[source]
        source: ApiError,
    },
}

impl NoteActionError {
    /// Message shown inline on the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Invalid(errors) => errors.first().unwrap_or("Invalid note"),
            Self::Api { action, .. } => action.failure_message(),
        }
    }

    /// Field errors when the failure was local validation.
    pub fn field_errors(&self) -> Option<NoteFormErrors> {
        match self {
            Self::Invalid(errors) => Some(*errors),
            Self::Api { .. } => None,
        }
    }
}

fn api_failure(action: NoteAction) -> impl FnOnce(ApiError) -> NoteActionError {
    move |source| {
        leptos::logging::warn!("note {action:?} failed: {source}");
        NoteActionError::Api { action, source }
    }
}

/// Fetch the full list.
///
/// # Errors
///
/// Returns [`NoteActionError::Api`] when the list request fails.
pub async fn load_notes<A: NotesApi>(api: &A) -> Result<Vec<Note>, NoteActionError> {
    api.list_notes().await.map_err(api_failure(NoteAction::Load))
}

/// Fetch one note for the detail page.
///
/// # Errors
///
/// Returns [`NoteActionError::Api`] when the note cannot be fetched.
pub async fn load_note<A: NotesApi>(api: &A, id: &str) -> Result<Note, NoteActionError> {
    api.get_note(id).await.map_err(api_failure(NoteAction::Fetch))
}

/// A successful create and the list refetch that followed it.
#[derive(Clone, Debug, PartialEq)]
pub struct Created {
    pub note: Note,
    /// The create already happened even when this is an error.
    pub list: Result<Vec<Note>, NoteActionError>,
}

/// Validate and create a note, then refetch the list.
///
/// # Errors
///
/// [`NoteActionError::Invalid`] without any request when validation fails;
/// [`NoteActionError::Api`] when the create fails. A failed refetch is
/// reported in [`Created::list`].
pub async fn create_note<A: NotesApi>(api: &A, form: &NoteForm) -> Result<Created, NoteActionError> {
    validate_note_form(form).map_err(NoteActionError::Invalid)?;
    let note = api.create_note(form).await.map_err(api_failure(NoteAction::Create))?;
    let list = load_notes(api).await;
    Ok(Created { note, list })
}

/// Delete a note, then refetch the list.
///
/// # Errors
///
/// Returns [`NoteActionError::Api`] when the delete or the refetch fails.
pub async fn delete_note<A: NotesApi>(api: &A, id: &str) -> Result<Vec<Note>, NoteActionError> {
    api.delete_note(id).await.map_err(api_failure(NoteAction::Delete))?;
    load_notes(api).await
}

/// Validate and save an edited note, then refetch it.
///
/// If the refetch fails the note returned by the update is used instead.
///
/// # Errors
///
/// [`NoteActionError::Invalid`] without any request when validation fails;
/// [`NoteActionError::Api`] when the update fails.
pub async fn save_note<A: NotesApi>(api: &A, id: &str, form: &NoteForm) -> Result<Note, NoteActionError> {
    validate_note_form(form).map_err(NoteActionError::Invalid)?;
    let updated = api.update_note(id, form).await.map_err(api_failure(NoteAction::Update))?;
    match api.get_note(id).await {
        Ok(note) => Ok(note),
        Err(e) => {
            leptos::logging::warn!("note {id} saved but refetch failed: {e}");
            Ok(updated)
        }
    }
}
