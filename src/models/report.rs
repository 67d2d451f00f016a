use serde::Serialize;

/// Minutes connected on one day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub day: u32,
    pub minutes: i64,
}

/// Per-person statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonMonthlyReport {
    pub person: String,
    pub total_minutes: i64,
    /// Days with `total_minutes > 0`.
    pub total_days: u32,
    pub avg_minutes_per_day: i64,
    /// One decimal place.
    pub avg_days_per_week: f64,
    pub avg_minutes_per_week: i64,
    /// `HH:MM`
    pub avg_first_check_in: Option<String>,
    /// `HH:MM`
    pub avg_last_check_out: Option<String>,
    /// One entry per day of the month, day 1 first.
    pub daily_data: Vec<DailyPoint>,
}

impl PersonMonthlyReport {
    pub fn empty(person: &str) -> Self {
        Self {
            person: person.to_string(),
            total_minutes: 0,
            total_days: 0,
            avg_minutes_per_day: 0,
            avg_days_per_week: 0.0,
            avg_minutes_per_week: 0,
            avg_first_check_in: None,
            avg_last_check_out: None,
            daily_data: Vec::new(),
        }
    }
}
