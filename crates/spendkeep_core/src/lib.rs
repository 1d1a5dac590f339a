//! Core domain logic for SpendKeep: an expense tracker and a note keeper
//! backed by JSON collections in a local key-value slot store.
//! This crate is the single source of truth for record invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::expense::{Category, Expense, ExpenseDraft, ExpenseId, ExpenseValidationError};
pub use model::form::{ExpenseForm, FormError};
pub use model::note::{Note, NoteId, NoteValidationError, UNTITLED};
pub use model::theme::Theme;
pub use repo::collection_repo::{CollectionSlot, ThemeSlot};
pub use repo::kv_repo::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::expense_service::{
    union_by_id, Confirmation, EditSession, Export, ExportFile, ExpenseTracker,
};
pub use service::keeper_service::Keeper;
pub use service::notice::{Notice, NoticeLevel};
pub use view::expense_view::{CategoryFilter, ExpenseListView, ExpenseRow};
pub use view::note_view::{KeeperView, NoteCard};
pub use view::stats::{BreakdownDisplay, BreakdownRow, CategoryShare, ExpenseStats, StatsDisplay};
