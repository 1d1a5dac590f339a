//! Pure view models derived from explicit application state.
//!
//! Views take the collection (plus filter, search text or date) as input and
//! never mutate it.

pub mod expense_view;
pub mod format;
pub mod note_view;
pub mod stats;
