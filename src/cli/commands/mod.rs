pub mod backup;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod scan;

use crate::errors::AppResult;
use crate::utils::date;
use crate::core::calculator::calendar::parse_year_month;

/// `--period YYYY-MM`, or the current month when omitted.
pub(crate) fn resolve_month(period: &Option<String>) -> AppResult<(i32, u32)> {
    match period {
        Some(p) => parse_year_month(p),
        None => Ok(date::current_month()),
    }
}
