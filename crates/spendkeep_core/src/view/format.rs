//! Display formatting for amounts, percentages and dates.

use chrono::NaiveDate;

/// Currency prefix used by every amount display.
pub const CURRENCY_PREFIX: &str = "₹ ";

/// Formats `value` with Indian digit grouping (`12,34,567.5`).
///
/// Keeps at most three fraction digits and drops trailing zeros.
pub fn format_indian(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = (value.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if fraction != 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_indian(whole: u128) -> String {
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `₹ ` followed by the grouped amount.
pub fn format_rupees(value: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", format_indian(value))
}

/// `₹ ` followed by the grouped amount rounded to a whole number.
pub fn format_rupees_whole(value: f64) -> String {
    format_rupees(value.round())
}

/// One-decimal percentage without the `%` sign.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}")
}

/// Expense list date, e.g. `Wed, 14 Oct 2026`.
pub fn format_expense_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

/// Note creation date, e.g. `10/14/2026`.
pub fn format_note_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        format_expense_date, format_indian, format_note_date, format_percentage, format_rupees,
        format_rupees_whole,
    };
    use chrono::NaiveDate;

    #[test]
    fn indian_grouping_uses_thousands_then_pairs() {
        assert_eq!(format_indian(0.0), "0");
        assert_eq!(format_indian(999.0), "999");
        assert_eq!(format_indian(1000.0), "1,000");
        assert_eq!(format_indian(123456.0), "1,23,456");
        assert_eq!(format_indian(12345678.0), "1,23,45,678");
    }

    #[test]
    fn fraction_is_capped_at_three_digits_and_trimmed() {
        assert_eq!(format_indian(1234567.5), "12,34,567.5");
        assert_eq!(format_indian(10.1234), "10.123");
        assert_eq!(format_indian(10.9999), "11");
        assert_eq!(format_indian(-2500.25), "-2,500.25");
    }

    #[test]
    fn rupee_helpers_prefix_currency() {
        assert_eq!(format_rupees(150.0), "₹ 150");
        assert_eq!(format_rupees_whole(1666.6), "₹ 1,667");
        assert_eq!(format_percentage(33.333), "33.3");
    }

    #[test]
    fn dates_render_like_the_list_and_cards() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(format_expense_date(date), "Wed, 04 Mar 2026");
        assert_eq!(format_note_date(date), "3/4/2026");
    }
}
