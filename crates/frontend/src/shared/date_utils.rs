/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the dashboard
use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp as DD/MM/YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Same as [`format_datetime`] but renders a dash for missing values
pub fn format_opt_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Format a date as DD/MM/YYYY
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Parse the yyyy-mm-dd value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Render a date as the yyyy-mm-dd value of an `<input type="date">`
pub fn to_input_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}
