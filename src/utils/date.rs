use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `(year, month0)` of today.
pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month0())
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `YYYY-MM`
pub fn month_label(year: i32, month0: u32) -> String {
    format!("{year}-{:02}", month0 + 1)
}

pub fn month_name(month0: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
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
    MONTHS[(month0 % 12) as usize]
}
