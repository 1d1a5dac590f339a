//! Expense record model.
//!
//! # Responsibility
//! - Define the canonical expense record and its fixed category set.
//! - Validate records whenever they are deserialized (storage or import).
//!
//! # Invariants
//! - `id` is non-empty and unique within one collection.
//! - `amount` is finite and strictly positive.
//! - `updated_at` is always set; `created_at` may be absent on records that
//!   were written before creation timestamps were tracked.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Stable expense identifier (epoch milliseconds rendered as a string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub String);

impl ExpenseId {
    pub fn from_timestamp_ms(value: i64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fixed category set offered by the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Education,
    Other,
}

impl Category {
    /// All categories in form order.
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Health,
        Self::Education,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExpenseValidationError;

    /// Matches category names case-insensitively after trimming.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ExpenseValidationError::UnknownCategory(trimmed.to_string()))
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyId,
    EmptyName,
    NonPositiveAmount(f64),
    NonFiniteAmount,
    UnknownCategory(String),
    InvalidDate(String),
    MissingTimestamps,
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "expense id cannot be empty"),
            Self::EmptyName => write!(f, "expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "expense amount must be > 0, got {amount}")
            }
            Self::NonFiniteAmount => write!(f, "expense amount must be a finite number"),
            Self::UnknownCategory(value) => write!(f, "unknown expense category `{value}`"),
            Self::InvalidDate(value) => {
                write!(f, "expense date `{value}` is not a YYYY-MM-DD calendar date")
            }
            Self::MissingTimestamps => {
                write!(f, "expense needs at least one of createdAt/updatedAt")
            }
        }
    }
}

impl Error for ExpenseValidationError {}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_expense_date(value: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let trimmed = value.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(ExpenseValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ExpenseValidationError::InvalidDate(trimmed.to_string()))
}

/// Canonical expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ExpenseWire")]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: f64,
    pub category: Category,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Validated user input shared by create and edit paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: String,
}

impl Expense {
    /// Creates a record from a draft with both timestamps set to `now`.
    pub fn create(id: ExpenseId, draft: ExpenseDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            notes: draft.notes,
            created_at: Some(now),
            updated_at: now,
        }
    }

    /// Replaces all user fields, keeping identity and creation time.
    pub fn apply(&mut self, draft: ExpenseDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.amount = draft.amount;
        self.category = draft.category;
        self.date = draft.date;
        self.notes = draft.notes;
        self.updated_at = now;
    }

    /// Returns the user-editable fields of this record.
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            name: self.name.clone(),
            amount: self.amount,
            category: self.category,
            date: self.date,
            notes: self.notes.clone(),
        }
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.0.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }
        if self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Wire shape accepted on deserialization before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseWire {
    id: String,
    name: String,
    amount: f64,
    category: String,
    date: String,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ExpenseWire> for Expense {
    type Error = ExpenseValidationError;

    fn try_from(wire: ExpenseWire) -> Result<Self, Self::Error> {
        let updated_at = wire
            .updated_at
            .or(wire.created_at)
            .ok_or(ExpenseValidationError::MissingTimestamps)?;
        let expense = Self {
            id: ExpenseId(wire.id),
            name: wire.name,
            amount: wire.amount,
            category: wire.category.parse()?,
            date: parse_expense_date(&wire.date)?,
            notes: wire.notes.unwrap_or_default(),
            created_at: wire.created_at,
            updated_at,
        };
        expense.validate()?;
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_expense_date, Category, ExpenseValidationError};

    #[test]
    fn category_parse_ignores_case_and_whitespace() {
        assert_eq!(" food ".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            "Groceries".parse::<Category>().unwrap_err(),
            ExpenseValidationError::UnknownCategory("Groceries".to_string())
        );
    }

    #[test]
    fn date_parse_requires_padded_iso_shape() {
        assert!(parse_expense_date("2026-10-14").is_ok());
        assert!(parse_expense_date("2026-1-4").is_err());
        assert!(parse_expense_date("2026-02-30").is_err());
    }
}
