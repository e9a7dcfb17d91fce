//! Date helpers shared by the planner, the INR log and the calendar.

use chrono::{Datelike, NaiveDate};

/// Formats accepted for user-supplied dates. The planner files written by
/// older versions store `MM/DD/YYYY`.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict ISO date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// ISO or US-style date.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

pub fn format_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `Monday, Jan 01, 2024`
pub fn format_long(d: NaiveDate) -> String {
    d.format("%A, %b %d, %Y").to_string()
}

pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Offset of `d` from the preceding Sunday (Sunday = 0).
pub fn weekday_from_sunday(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}
