// src/export/model.rs

use crate::models::PersonMonthlyReport;
use serde::Serialize;

/// Flat per-person row for CSV export (no daily series).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    pub month: String,
    pub person: String,
    pub total_minutes: i64,
    pub total_days: u32,
    pub avg_minutes_per_day: i64,
    pub avg_days_per_week: f64,
    pub avg_minutes_per_week: i64,
    pub avg_first_check_in: String,
    pub avg_last_check_out: String,
}

impl ReportExport {
    pub fn from_report(month: &str, r: &PersonMonthlyReport) -> Self {
        Self {
            month: month.to_string(),
            person: r.person.clone(),
            total_minutes: r.total_minutes,
            total_days: r.total_days,
            avg_minutes_per_day: r.avg_minutes_per_day,
            avg_days_per_week: r.avg_days_per_week,
            avg_minutes_per_week: r.avg_minutes_per_week,
            avg_first_check_in: r.avg_first_check_in.clone().unwrap_or_default(),
            avg_last_check_out: r.avg_last_check_out.clone().unwrap_or_default(),
        }
    }
}
