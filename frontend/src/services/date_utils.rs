use chrono::{Datelike, NaiveDate};
use shared::month_name;

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format a date for the group divider (e.g., "Wednesday, May 1, 2024")
pub fn format_group_heading(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), format_date_for_display(date))
}

/// Format a date for display (e.g., "May 1, 2024")
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Format a money amount with two decimals
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Check if a date is today
pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}
