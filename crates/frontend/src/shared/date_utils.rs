//! Utilities for date formatting
//!
//! The API sends ISO dates (`YYYY-MM-DD`, sometimes with a time part);
//! tables show them day first.

use chrono::NaiveDate;

/// Parse the date part of an ISO date or datetime string
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
/// Unparsable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}
