use chrono::NaiveDate;
use serde_json::json;
use spendkeep_core::{BreakdownDisplay, Category, Expense, ExpenseStats};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn expense(id: &str, amount: f64, category: &str, date: &str) -> Expense {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("expense {id}"),
        "amount": amount,
        "category": category,
        "date": date,
        "updatedAt": "2026-10-01T00:00:00Z"
    }))
    .unwrap()
}

#[test]
fn two_food_expenses_today() {
    let expenses = [
        expense("1", 100.0, "Food", "2026-10-14"),
        expense("2", 50.0, "Food", "2026-10-14"),
    ];
    let stats = ExpenseStats::compute(&expenses, today());

    assert_eq!(stats.total, 150.0);
    assert_eq!(stats.transaction_count, 2);
    assert_eq!(stats.today_total, 150.0);
    assert_eq!(stats.top_category, Some(Category::Food));
    assert_eq!(stats.breakdown.len(), 1);
    assert_eq!(stats.breakdown[0].percentage, 100.0);

    let display = stats.display();
    assert_eq!(display.total, "₹ 150");
    assert_eq!(display.today_total, "₹ 150");
    assert_eq!(display.top_category, "Food");
    let BreakdownDisplay::Rows(rows) = display.breakdown else {
        panic!("expected breakdown rows");
    };
    assert_eq!(rows[0].percentage, "100.0%");
    assert_eq!(rows[0].amount, "₹ 150");
}

#[test]
fn empty_collection_uses_empty_display_values() {
    let stats = ExpenseStats::compute(&[], today());
    assert_eq!(stats.total, 0.0);
    assert_eq!(stats.average_per_day, 0.0);
    assert_eq!(stats.top_category, None);

    let display = stats.display();
    assert_eq!(display.total, "₹ 0");
    assert_eq!(display.transaction_count, "0");
    assert_eq!(display.today_total, "₹ 0");
    assert_eq!(display.week_total, "₹ 0");
    assert_eq!(display.average_per_day, "₹ 0");
    assert_eq!(display.top_category, "-");
    assert_eq!(
        display.breakdown,
        BreakdownDisplay::Empty {
            message: "Add expenses to see category breakdown"
        }
    );
}

#[test]
fn average_of_single_record_today_is_its_amount() {
    let expenses = [expense("1", 437.5, "Bills", "2026-10-14")];
    let stats = ExpenseStats::compute(&expenses, today());
    assert_eq!(stats.average_per_day, 437.5);
}

#[test]
fn average_divides_by_days_since_earliest_record() {
    let expenses = [
        expense("1", 300.0, "Bills", "2026-10-04"),
        expense("2", 200.0, "Food", "2026-10-14"),
    ];
    let stats = ExpenseStats::compute(&expenses, today());
    assert_eq!(stats.average_per_day, 50.0);
    assert_eq!(stats.display().average_per_day, "₹ 50");
}

#[test]
fn week_window_includes_exactly_seven_days_back() {
    let expenses = [
        expense("1", 1.0, "Food", "2026-10-14"),
        expense("2", 10.0, "Food", "2026-10-07"),
        expense("3", 100.0, "Food", "2026-10-06"),
    ];
    let stats = ExpenseStats::compute(&expenses, today());
    assert_eq!(stats.week_total, 11.0);
    assert_eq!(stats.today_total, 1.0);
    assert_eq!(stats.total, 111.0);
}

#[test]
fn top_category_tie_goes_to_first_seen_category() {
    let expenses = [
        expense("1", 40.0, "Health", "2026-10-10"),
        expense("2", 10.0, "Food", "2026-10-10"),
        expense("3", 30.0, "Food", "2026-10-10"),
        expense("4", 5.0, "Bills", "2026-10-10"),
    ];
    let stats = ExpenseStats::compute(&expenses, today());
    assert_eq!(stats.top_category, Some(Category::Health));

    let order: Vec<Category> = stats.breakdown.iter().map(|s| s.category).collect();
    assert_eq!(order, vec![Category::Health, Category::Food, Category::Bills]);
}

#[test]
fn breakdown_is_sorted_and_percentages_sum_to_100() {
    let expenses = [
        expense("1", 333.0, "Food", "2026-10-10"),
        expense("2", 1000.0, "Bills", "2026-10-11"),
        expense("3", 666.0, "Transport", "2026-10-12"),
        expense("4", 1.0, "Other", "2026-10-13"),
    ];
    let stats = ExpenseStats::compute(&expenses, today());

    let amounts: Vec<f64> = stats.breakdown.iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![1000.0, 666.0, 333.0, 1.0]);

    let sum: f64 = stats.breakdown.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum={sum}");
    assert_eq!(stats.display().total, "₹ 2,000");
}
