//! Expense list view model.

use crate::model::expense::{Category, Expense, ExpenseId};
use crate::view::format::{format_expense_date, format_indian};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const EMPTY_LIST_TITLE: &str = "No expenses found";
pub const EMPTY_LIST_HINT_ALL: &str = "Add your first expense";
pub const EMPTY_LIST_HINT_FILTERED: &str = "No expenses in this category";

/// Category selector of the list; `All` when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = <Category as FromStr>::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub name: String,
    pub category: String,
    pub date: String,
    /// `None` when the record has no notes.
    pub notes: Option<String>,
    /// Grouped amount without the currency prefix.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseListView {
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    Rows(Vec<ExpenseRow>),
}

/// Renders the filtered collection, newest date first.
///
/// Records sharing a date keep their collection order. The input slice is
/// never reordered.
pub fn render_expense_list(expenses: &[Expense], filter: CategoryFilter) -> ExpenseListView {
    let mut visible: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .collect();

    if visible.is_empty() {
        let hint = match filter {
            CategoryFilter::All => EMPTY_LIST_HINT_ALL,
            CategoryFilter::Only(_) => EMPTY_LIST_HINT_FILTERED,
        };
        return ExpenseListView::Empty {
            title: EMPTY_LIST_TITLE,
            hint,
        };
    }

    visible.sort_by(|left, right| right.date.cmp(&left.date));
    ExpenseListView::Rows(visible.into_iter().map(expense_row).collect())
}

fn expense_row(expense: &Expense) -> ExpenseRow {
    ExpenseRow {
        id: expense.id.clone(),
        name: expense.name.clone(),
        category: expense.category.as_str().to_string(),
        date: format_expense_date(expense.date),
        notes: (!expense.notes.is_empty()).then(|| expense.notes.clone()),
        amount: format_indian(expense.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryFilter;
    use crate::model::expense::Category;

    #[test]
    fn filter_parses_all_and_categories() {
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "bills".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Bills)
        );
        assert!("rent".parse::<CategoryFilter>().is_err());
    }
}
