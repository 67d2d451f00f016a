//! Calendar arithmetic shared by the monthly aggregator and the calendar view.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First column of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Zero-based column of `day` in a grid starting on this weekday.
    pub fn offset_of(&self, day: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => day.num_days_from_sunday(),
            WeekStart::Monday => day.num_days_from_monday(),
        }
    }
}

/// First day of the month; `month0` is zero-based (0 = January).
pub fn first_of_month(year: i32, month0: u32) -> AppResult<NaiveDate> {
    if month0 > 11 {
        return Err(AppError::InvalidMonth(month0));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{:02}", month0 + 1)))
}

pub fn days_in_month(year: i32, month0: u32) -> AppResult<u32> {
    let first = first_of_month(year, month0)?;
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    }
    .ok_or_else(|| AppError::InvalidDate(format!("{year}-{:02}", month0 + 1)))?;

    Ok((next - first).num_days() as u32)
}

pub fn first_weekday_offset(year: i32, month0: u32, week_start: WeekStart) -> AppResult<u32> {
    let first = first_of_month(year, month0)?;
    Ok(week_start.offset_of(first.weekday()))
}

/// Number of grid rows the month touches, partial weeks included.
pub fn weeks_in_month(year: i32, month0: u32, week_start: WeekStart) -> AppResult<u32> {
    let days = days_in_month(year, month0)?;
    let offset = first_weekday_offset(year, month0, week_start)?;
    Ok((days + offset).div_ceil(7))
}

/// Every date of the month, in order.
pub fn month_dates(year: i32, month0: u32) -> AppResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month0)?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month0() == month0)
        .collect())
}

/// Parse `YYYY-MM` into `(year, month0)`.
pub fn parse_year_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok((d.year(), d.month0()))
}
