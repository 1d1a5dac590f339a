//! Keeper (note list) controller.
//!
//! # Invariants
//! - Newest notes are kept at the front of the collection.
//! - An add with blank title and blank content is ignored without a save.
//! - The theme preference is stored independently of the notes.

use crate::clock::{Clock, SystemClock};
use crate::model::id::next_timestamp_id;
use crate::model::note::{Note, NoteId, UNTITLED};
use crate::model::theme::Theme;
use crate::repo::collection_repo::{CollectionSlot, ThemeSlot};
use crate::repo::kv_repo::{KeyValueStore, StoreResult};
use crate::view::format::format_note_date;
use crate::view::note_view::{render_notes, KeeperView};
use log::info;

/// Slot holding the note collection.
pub const NOTES_SLOT: CollectionSlot<Note> = CollectionSlot::new("keeperNotes");
/// Slot holding the keeper's theme preference.
pub const KEEPER_THEME_SLOT: ThemeSlot = ThemeSlot::new("theme", Theme::Light);

pub struct Keeper<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    notes: Vec<Note>,
    theme: Theme,
}

impl<S: KeyValueStore, C: Clock> Keeper<S, C> {
    pub fn load(store: S, clock: C) -> StoreResult<Self> {
        let notes = NOTES_SLOT.load(&store)?;
        let theme = KEEPER_THEME_SLOT.load(&store)?;
        Ok(Self {
            store,
            clock,
            notes,
            theme,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Adds a note at the front of the list.
    ///
    /// Returns `None` when both fields are blank after trimming.
    pub fn add(&mut self, title: &str, content: &str) -> StoreResult<Option<Note>> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() && content.is_empty() {
            return Ok(None);
        }

        let raw_id = next_timestamp_id(self.clock.now().timestamp_millis(), |candidate| {
            self.notes.iter().any(|note| note.id.0 == candidate)
        });
        let note = Note {
            id: NoteId(raw_id),
            title: if title.is_empty() { UNTITLED } else { title }.to_string(),
            content: content.to_string(),
            date: format_note_date(self.clock.today()),
        };

        self.notes.insert(0, note.clone());
        self.persist()?;
        info!("event=note_add module=service status=ok id={}", note.id);
        Ok(Some(note))
    }

    /// Removes the note with `id`; returns whether one was removed.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        self.persist()?;
        info!("event=note_delete module=service status=ok id={id} removed={removed}");
        Ok(removed)
    }

    /// Live search view; an empty query shows every note.
    pub fn view(&self, search: &str) -> KeeperView {
        render_notes(&self.notes, search, self.theme)
    }

    /// Flips between light and dark and persists the choice.
    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        KEEPER_THEME_SLOT.save(&mut self.store, next)?;
        self.theme = next;
        Ok(next)
    }

    fn persist(&mut self) -> StoreResult<()> {
        NOTES_SLOT.save(&mut self.store, &self.notes)
    }
}
