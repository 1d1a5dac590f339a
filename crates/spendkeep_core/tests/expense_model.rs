use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use spendkeep_core::{Category, Expense, ExpenseDraft, ExpenseId};

fn sample() -> Expense {
    let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
    Expense::create(
        ExpenseId::from("1760434200000"),
        ExpenseDraft {
            name: "Metro card".to_string(),
            amount: 500.0,
            category: Category::Transport,
            date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
            notes: String::new(),
        },
        now,
    )
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["id"], "1760434200000");
    assert_eq!(json["name"], "Metro card");
    assert_eq!(json["amount"], 500.0);
    assert_eq!(json["category"], "Transport");
    assert_eq!(json["date"], "2026-10-14");
    assert_eq!(json["notes"], "");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());

    let decoded: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample());
}

#[test]
fn deserialize_accepts_browser_iso_timestamps_without_created_at() {
    let value = json!({
        "id": "1700000000000",
        "name": "Groceries",
        "amount": 1250.75,
        "category": "Food",
        "date": "2026-10-01",
        "notes": "weekly",
        "updatedAt": "2026-10-01T08:15:00.000Z"
    });

    let expense: Expense = serde_json::from_value(value).unwrap();
    assert_eq!(expense.created_at, None);
    assert_eq!(
        expense.updated_at,
        Utc.with_ymd_and_hms(2026, 10, 1, 8, 15, 0).unwrap()
    );
    assert_eq!(expense.category, Category::Food);
}

#[test]
fn deserialize_rejects_records_that_break_invariants() {
    let base = json!({
        "id": "1",
        "name": "Tea",
        "amount": 20,
        "category": "Food",
        "date": "2026-10-01",
        "createdAt": "2026-10-01T08:15:00Z",
        "updatedAt": "2026-10-01T08:15:00Z"
    });

    let cases = [
        ("amount", json!(0), "must be > 0"),
        ("amount", json!(-3.5), "must be > 0"),
        ("category", json!("Rent"), "unknown expense category"),
        ("date", json!("01/10/2026"), "is not a YYYY-MM-DD"),
        ("name", json!("  "), "name cannot be empty"),
        ("id", json!(""), "id cannot be empty"),
    ];

    for (field, value, expected) in cases {
        let mut record = base.clone();
        record[field] = value;
        let err = serde_json::from_value::<Expense>(record).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "field={field} unexpected error: {err}"
        );
    }
}

#[test]
fn deserialize_requires_some_timestamp() {
    let value = json!({
        "id": "1",
        "name": "Tea",
        "amount": 20,
        "category": "Food",
        "date": "2026-10-01"
    });
    let err = serde_json::from_value::<Expense>(value).unwrap_err();
    assert!(err.to_string().contains("createdAt/updatedAt"));
}
