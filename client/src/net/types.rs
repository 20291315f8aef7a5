//! Wire DTOs for the remote notes service.
//!
//! DESIGN
//! ======
//! Field names follow the service's JSON (`_id`, `createdAt`, `user`). Notes
//! also accept the plain `id` and `owner` spellings, alone or alongside the
//! service ones.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A note as returned by the notes service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO-8601 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// Owning user id.
    #[serde(rename = "user")]
    pub owner: String,
}

/// Incoming note JSON. Each spelling gets its own slot so a body carrying
/// both `_id` and `id` (or `user` and `owner`) still decodes.
#[derive(Deserialize)]
struct NoteWire {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    title: String,
    content: String,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    created_at: String,
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    updated_at: String,
    user: Option<String>,
    owner: Option<String>,
}

impl TryFrom<NoteWire> for Note {
    type Error = &'static str;

    fn try_from(wire: NoteWire) -> Result<Self, Self::Error> {
        // `_id` wins when both are present.
        let id = wire.mongo_id.or(wire.id).ok_or("note has neither `_id` nor `id`")?;
        Ok(Self {
            id,
            title: wire.title,
            content: wire.content,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            owner: wire.user.or(wire.owner).unwrap_or_default(),
        })
    }
}

/// Create/update request body. Updates always send both fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }
}

impl From<&Note> for NoteForm {
    fn from(note: &Note) -> Self {
        Self { title: note.title.clone(), content: note.content.clone() }
    }
}

/// Login/register request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login/register response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}
