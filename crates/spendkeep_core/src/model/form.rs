//! Raw expense form input and its validation.
//!
//! The form carries unparsed strings exactly as a user typed them; only
//! `ExpenseForm::validate` turns them into an `ExpenseDraft`.

use crate::model::expense::{parse_expense_date, Category, ExpenseDraft};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

/// Why a form submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank or does not parse.
    MissingRequiredFields,
    NonPositiveAmount,
    FutureDate,
}

impl FormError {
    /// User-facing message for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "Please fill all required fields",
            Self::NonPositiveAmount => "Amount must be greater than 0",
            Self::FutureDate => "Date cannot be in the future",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FormError {}

impl ExpenseForm {
    /// Pre-fills a form from an existing record's fields.
    pub fn from_draft(draft: &ExpenseDraft) -> Self {
        Self {
            name: draft.name.clone(),
            amount: draft.amount.to_string(),
            category: draft.category.as_str().to_string(),
            date: draft.date.format("%Y-%m-%d").to_string(),
            notes: draft.notes.clone(),
        }
    }

    /// Validates the form against `today` (the form's maximum date).
    pub fn validate(&self, today: NaiveDate) -> Result<ExpenseDraft, FormError> {
        let name = self.name.trim();
        let notes = self.notes.trim();
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite());
        let category = self.category.parse::<Category>().ok();
        let date = parse_expense_date(&self.date).ok();

        let (Some(amount), Some(category), Some(date)) = (amount, category, date) else {
            return Err(FormError::MissingRequiredFields);
        };
        if name.is_empty() {
            return Err(FormError::MissingRequiredFields);
        }
        if amount <= 0.0 {
            return Err(FormError::NonPositiveAmount);
        }
        if date > today {
            return Err(FormError::FutureDate);
        }

        Ok(ExpenseDraft {
            name: name.to_string(),
            amount,
            category,
            date,
            notes: notes.to_string(),
        })
    }
}
