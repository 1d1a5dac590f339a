//! Expense tracker controller.
//!
//! # Responsibility
//! - Validate form submissions and apply add/edit to the collection.
//! - Gate destructive actions behind an explicit `Confirmation` step.
//! - Import (union-by-id) and export the collection as JSON.
//!
//! # Invariants
//! - At most one record is in edit mode at a time.
//! - Import never lets an imported record replace an existing one with the
//!   same id.
//! - Filtering and statistics are read-only.

use crate::clock::{Clock, SystemClock};
use crate::model::expense::{Expense, ExpenseId};
use crate::model::form::ExpenseForm;
use crate::model::id::next_timestamp_id;
use crate::model::theme::Theme;
use crate::repo::collection_repo::{CollectionSlot, ThemeSlot};
use crate::repo::kv_repo::{KeyValueStore, StoreError, StoreResult};
use crate::service::notice::Notice;
use crate::view::expense_view::{render_expense_list, CategoryFilter, ExpenseListView};
use crate::view::stats::ExpenseStats;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashSet;

/// Slot holding the expense collection.
pub const EXPENSES_SLOT: CollectionSlot<Expense> = CollectionSlot::new("spendwiseExpenses");
/// Slot holding the tracker's theme preference.
pub const EXPENSE_THEME_SLOT: ThemeSlot = ThemeSlot::new("preferredTheme", Theme::Dark);

const IMPORT_FORMAT_ERROR: &str = "Error importing file. Please check the file format.";

/// Pending destructive action awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DeleteExpense(ExpenseId),
    DeleteAllExpenses,
}

impl Confirmation {
    /// Question to show before confirming.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DeleteExpense(_) => "Are you sure you want to delete this expense?",
            Self::DeleteAllExpenses => {
                "Are you sure you want to delete ALL expenses? This cannot be undone."
            }
        }
    }
}

/// Downloadable export payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    /// Pretty-printed JSON array.
    pub contents: String,
}

/// Result of an export request; `file` is `None` when there was nothing to
/// export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file: Option<ExportFile>,
    pub notice: Notice,
}

/// Form pre-filled from the record entering edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub form: ExpenseForm,
    pub notice: Notice,
}

/// Export file name for `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("spendwise-expenses-{}.json", date.format("%Y-%m-%d"))
}

/// Merges `imported` into `existing`, keeping one record per id.
///
/// Existing records win over imported duplicates. Output order is the
/// existing records followed by the first occurrence of each new id.
pub fn union_by_id(existing: Vec<Expense>, imported: Vec<Expense>) -> Vec<Expense> {
    let mut seen = HashSet::with_capacity(existing.len() + imported.len());
    existing
        .into_iter()
        .chain(imported)
        .filter(|expense| seen.insert(expense.id.clone()))
        .collect()
}

pub struct ExpenseTracker<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    expenses: Vec<Expense>,
    editing: Option<ExpenseId>,
    theme: Theme,
}

impl<S: KeyValueStore, C: Clock> ExpenseTracker<S, C> {
    /// Restores the collection and theme from `store`.
    pub fn load(store: S, clock: C) -> StoreResult<Self> {
        let expenses = EXPENSES_SLOT.load(&store)?;
        let theme = EXPENSE_THEME_SLOT.load(&store)?;
        Ok(Self {
            store,
            clock,
            expenses,
            editing: None,
            theme,
        })
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| &expense.id == id)
    }

    /// Id of the record currently in edit mode.
    pub fn editing(&self) -> Option<&ExpenseId> {
        self.editing.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        EXPENSE_THEME_SLOT.save(&mut self.store, theme)?;
        self.theme = theme;
        Ok(())
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Adds a record, or replaces the one in edit mode.
    ///
    /// Edit mode always names a record in the collection: deleting that
    /// record clears it.
    ///
    /// Validation failures return an `error` notice and leave both the
    /// collection and the edit mode untouched.
    pub fn submit(&mut self, form: &ExpenseForm) -> StoreResult<Notice> {
        let draft = match form.validate(self.clock.today()) {
            Ok(draft) => draft,
            Err(err) => {
                info!("event=expense_submit module=service status=rejected reason={err:?}");
                return Ok(Notice::error(err.message()));
            }
        };
        let now = self.clock.now();

        let editing = self.editing.take();
        let target = editing
            .as_ref()
            .and_then(|id| self.expenses.iter_mut().find(|expense| &expense.id == id));

        let notice = match target {
            Some(expense) => {
                expense.apply(draft, now);
                info!(
                    "event=expense_update module=service status=ok id={}",
                    expense.id
                );
                Notice::success("Expense updated successfully!")
            }
            None => {
                let raw_id = next_timestamp_id(now.timestamp_millis(), |candidate| {
                    let candidate = candidate.to_string();
                    self.expenses.iter().any(|expense| expense.id.0 == candidate)
                });
                let id = ExpenseId::from_timestamp_ms(raw_id);
                info!("event=expense_add module=service status=ok id={id}");
                self.expenses.push(Expense::create(id, draft, now));
                Notice::success("Expense added successfully!")
            }
        };

        self.persist()?;
        Ok(notice)
    }

    /// Enters edit mode for `id` and returns the pre-filled form.
    ///
    /// Returns `None` and keeps the current mode when `id` is unknown.
    pub fn begin_edit(&mut self, id: &ExpenseId) -> Option<EditSession> {
        let form = ExpenseForm::from_draft(&self.get(id)?.to_draft());
        self.editing = Some(id.clone());
        Some(EditSession {
            form,
            notice: Notice::info(
                "Editing expense. Update the fields and click \"Update Expense\"",
            ),
        })
    }

    /// Leaves edit mode and returns a blank form dated today.
    pub fn clear_form(&mut self) -> ExpenseForm {
        self.editing = None;
        ExpenseForm {
            date: self.clock.today().format("%Y-%m-%d").to_string(),
            ..ExpenseForm::default()
        }
    }

    pub fn request_delete(&self, id: ExpenseId) -> Confirmation {
        Confirmation::DeleteExpense(id)
    }

    /// Asks to clear the collection; refused with a warning when empty.
    pub fn request_delete_all(&self) -> Result<Confirmation, Notice> {
        if self.expenses.is_empty() {
            return Err(Notice::warning("No expenses to delete"));
        }
        Ok(Confirmation::DeleteAllExpenses)
    }

    /// Executes a confirmed destructive action.
    pub fn confirm(&mut self, confirmation: Confirmation) -> StoreResult<Notice> {
        match confirmation {
            Confirmation::DeleteExpense(id) => {
                let before = self.expenses.len();
                self.expenses.retain(|expense| expense.id != id);
                if self.expenses.len() == before {
                    info!("event=expense_delete module=service status=noop id={id}");
                    return Ok(Notice::warning("Expense not found"));
                }
                if self.editing.as_ref() == Some(&id) {
                    self.editing = None;
                }
                self.persist()?;
                info!("event=expense_delete module=service status=ok id={id}");
                Ok(Notice::success("Expense deleted successfully!"))
            }
            Confirmation::DeleteAllExpenses => {
                if self.expenses.is_empty() {
                    return Ok(Notice::warning("No expenses to delete"));
                }
                let removed = self.expenses.len();
                self.expenses.clear();
                self.editing = None;
                self.persist()?;
                info!("event=expense_delete_all module=service status=ok count={removed}");
                Ok(Notice::success("All expenses deleted successfully!"))
            }
        }
    }

    /// Serializes the full collection as a dated JSON file.
    pub fn export(&self) -> StoreResult<Export> {
        if self.expenses.is_empty() {
            return Ok(Export {
                file: None,
                notice: Notice::warning("No expenses to export"),
            });
        }

        let contents =
            serde_json::to_string_pretty(&self.expenses).map_err(StoreError::Serialize)?;
        let file = ExportFile {
            file_name: export_file_name(self.clock.today()),
            contents,
        };
        info!(
            "event=expense_export module=service status=ok count={}",
            self.expenses.len()
        );
        Ok(Export {
            file: Some(file),
            notice: Notice::success(format!(
                "Exported {} expenses successfully!",
                self.expenses.len()
            )),
        })
    }

    /// Parses `payload` as a JSON array of expenses and merges it in.
    ///
    /// The success message counts the records in the payload, not the ones
    /// actually added.
    pub fn import(&mut self, payload: &str) -> StoreResult<Notice> {
        let imported = match parse_import(payload) {
            Ok(imported) => imported,
            Err(reason) => {
                warn!("event=expense_import module=service status=rejected reason={reason}");
                return Ok(Notice::error(IMPORT_FORMAT_ERROR));
            }
        };

        let imported_count = imported.len();
        let before = self.expenses.len();
        let existing = std::mem::take(&mut self.expenses);
        self.expenses = union_by_id(existing, imported);
        self.persist()?;

        info!(
            "event=expense_import module=service status=ok imported={imported_count} added={}",
            self.expenses.len() - before
        );
        Ok(Notice::success(format!(
            "Successfully imported {imported_count} expenses!"
        )))
    }

    /// Renders the list for `filter`; never mutates the collection.
    pub fn list(&self, filter: CategoryFilter) -> ExpenseListView {
        render_expense_list(&self.expenses, filter)
    }

    /// Recomputes aggregates against the clock's current date.
    pub fn stats(&self) -> ExpenseStats {
        ExpenseStats::compute(&self.expenses, self.clock.today())
    }

    fn persist(&mut self) -> StoreResult<()> {
        EXPENSES_SLOT.save(&mut self.store, &self.expenses)
    }
}

fn parse_import(payload: &str) -> Result<Vec<Expense>, &'static str> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|_| "invalid_json")?;
    if !value.is_array() {
        return Err("not_an_array");
    }
    serde_json::from_value(value).map_err(|_| "invalid_record")
}
