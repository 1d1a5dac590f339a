//! Aggregate statistics over an expense collection.
//!
//! # Invariants
//! - Every value is recomputed from the full collection on each call.
//! - An empty collection produces the documented empty values, never a
//!   division by zero.
//! - Category ties resolve to the category reached first in collection
//!   order.

use crate::model::expense::{Category, Expense};
use crate::view::format::{format_percentage, format_rupees, format_rupees_whole};
use chrono::{Days, NaiveDate};

/// Window length of the trailing "last 7 days" total.
pub const WEEK_WINDOW_DAYS: u64 = 7;

/// Empty-state text of the category breakdown.
pub const EMPTY_BREAKDOWN_MESSAGE: &str = "Add expenses to see category breakdown";

/// Top-category display value for an empty collection.
pub const NO_TOP_CATEGORY: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: f64,
    /// Share of the grand total in percent (0..=100).
    pub percentage: f64,
}

/// Raw aggregate values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseStats {
    pub total: f64,
    pub transaction_count: usize,
    pub today_total: f64,
    pub week_total: f64,
    pub average_per_day: f64,
    pub top_category: Option<Category>,
    /// Sorted by amount descending.
    pub breakdown: Vec<CategoryShare>,
}

impl ExpenseStats {
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let total = sum_amounts(expenses.iter());
        let today_total = sum_amounts(expenses.iter().filter(|expense| expense.date == today));

        let week_start = today
            .checked_sub_days(Days::new(WEEK_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        let week_total = sum_amounts(
            expenses
                .iter()
                .filter(|expense| expense.date >= week_start && expense.date <= today),
        );

        let average_per_day = match expenses.iter().map(|expense| expense.date).min() {
            Some(earliest) => {
                let days = (today - earliest).num_days().max(1);
                total / days as f64
            }
            None => 0.0,
        };

        let totals = category_totals(expenses);
        let top_category = top_category(&totals);

        let mut breakdown: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        // Stable sort keeps first-occurrence order among equal amounts.
        breakdown.sort_by(|left, right| right.amount.total_cmp(&left.amount));

        Self {
            total,
            transaction_count: expenses.len(),
            today_total,
            week_total,
            average_per_day,
            top_category,
            breakdown,
        }
    }

    /// Formats the aggregates for display.
    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            total: format_rupees(self.total),
            transaction_count: self.transaction_count.to_string(),
            today_total: format_rupees(self.today_total),
            week_total: format_rupees(self.week_total),
            average_per_day: format_rupees_whole(self.average_per_day),
            top_category: self
                .top_category
                .map_or_else(|| NO_TOP_CATEGORY.to_string(), |c| c.as_str().to_string()),
            breakdown: if self.breakdown.is_empty() {
                BreakdownDisplay::Empty {
                    message: EMPTY_BREAKDOWN_MESSAGE,
                }
            } else {
                BreakdownDisplay::Rows(
                    self.breakdown
                        .iter()
                        .map(|share| BreakdownRow {
                            category: share.category.as_str().to_string(),
                            amount: format_rupees(share.amount),
                            percentage: format!("{}%", format_percentage(share.percentage)),
                        })
                        .collect(),
                )
            },
        }
    }
}

/// Display strings of every statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub total: String,
    pub transaction_count: String,
    pub today_total: String,
    pub week_total: String,
    pub average_per_day: String,
    pub top_category: String,
    pub breakdown: BreakdownDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownDisplay {
    Empty { message: &'static str },
    Rows(Vec<BreakdownRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub category: String,
    pub amount: String,
    pub percentage: String,
}

fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> f64 {
    expenses.map(|expense| expense.amount).sum()
}

/// Per-category sums in first-occurrence order.
fn category_totals(expenses: &[Expense]) -> Vec<(Category, f64)> {
    let mut totals: Vec<(Category, f64)> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, amount)) => *amount += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    totals
}

fn top_category(totals: &[(Category, f64)]) -> Option<Category> {
    let mut best: Option<(Category, f64)> = None;
    for &(category, amount) in totals {
        if best.map_or(true, |(_, max)| amount > max) {
            best = Some((category, amount));
        }
    }
    best.map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::top_category;
    use crate::model::expense::Category;

    #[test]
    fn top_category_prefers_first_on_tie() {
        let totals = [
            (Category::Bills, 50.0),
            (Category::Food, 80.0),
            (Category::Health, 80.0),
        ];
        assert_eq!(top_category(&totals), Some(Category::Food));
        assert_eq!(top_category(&[]), None);
    }
}
