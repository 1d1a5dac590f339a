//! Keeper note model.
//!
//! # Invariants
//! - `id` is a positive epoch-millisecond value unique within a collection.
//! - `title` is never blank; blank input titles become `UNTITLED`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder used when a note is added without a title.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    NonPositiveId(i64),
    BlankTitle,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "note id must be > 0, got {id}"),
            Self::BlankTitle => write!(f, "note title cannot be blank"),
        }
    }
}

impl Error for NoteValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Human readable creation date, e.g. `10/14/2026`.
    pub date: String,
}

impl Note {
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.0 <= 0 {
            return Err(NoteValidationError::NonPositiveId(self.id.0));
        }
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

#[derive(Deserialize)]
struct NoteWire {
    id: i64,
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    date: String,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(wire: NoteWire) -> Result<Self, Self::Error> {
        let note = Self {
            id: NoteId(wire.id),
            title: wire.title,
            content: wire.content,
            date: wire.date,
        };
        note.validate()?;
        Ok(note)
    }
}
