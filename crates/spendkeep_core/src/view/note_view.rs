//! Keeper card view model.

use crate::model::note::{Note, NoteId};
use crate::model::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeeperView {
    pub cards: Vec<NoteCard>,
    pub theme: Theme,
    pub theme_toggle_label: &'static str,
}

/// Renders notes matching `search` in collection order.
///
/// Matching is a case-insensitive substring test on title or content; an
/// empty query matches every note.
pub fn render_notes(notes: &[Note], search: &str, theme: Theme) -> KeeperView {
    let needle = search.to_lowercase();
    let cards = notes
        .iter()
        .filter(|note| note.matches_lowercase(&needle))
        .map(|note| NoteCard {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            date: note.date.clone(),
        })
        .collect();

    KeeperView {
        cards,
        theme,
        theme_toggle_label: theme.toggle_label(),
    }
}
