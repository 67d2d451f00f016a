//! Monthly aggregation: per-day summaries of one person → `PersonMonthlyReport`.

use crate::core::calculator::calendar::{self, WeekStart};
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::report::{DailyPoint, PersonMonthlyReport};
use crate::models::sample::minute_of_day;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Day summaries of one person, keyed by date.
pub type PersonDays = BTreeMap<NaiveDate, DaySummary>;

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyAggregator {
    week_start: WeekStart,
}

impl MonthlyAggregator {
    pub fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    /// Build the report of `person` for the zero-based `month0` of `year`.
    /// Missing days count as zero; only an invalid month is an error.
    pub fn aggregate(
        &self,
        person: &str,
        days: &PersonDays,
        year: i32,
        month0: u32,
    ) -> AppResult<PersonMonthlyReport> {
        let dates = calendar::month_dates(year, month0)?;
        let weeks = calendar::weeks_in_month(year, month0, self.week_start)?;

        let mut report = PersonMonthlyReport::empty(person);
        let mut first_check_ins: Vec<i64> = Vec::new();
        let mut last_check_outs: Vec<i64> = Vec::new();

        for (idx, date) in dates.iter().enumerate() {
            let day = idx as u32 + 1;

            match days.get(date) {
                Some(summary) if summary.has_data() => {
                    report.total_minutes += summary.total_minutes;
                    report.total_days += 1;
                    report.daily_data.push(DailyPoint {
                        day,
                        minutes: summary.total_minutes,
                    });

                    if let Some(t) = summary.first_seen {
                        first_check_ins.push(minute_of_day(t));
                    }
                    if let Some(t) = summary.last_seen {
                        last_check_outs.push(minute_of_day(t));
                    }
                }
                _ => report.daily_data.push(DailyPoint { day, minutes: 0 }),
            }
        }

        let total = report.total_minutes as f64;

        if report.total_days > 0 {
            report.avg_minutes_per_day = (total / report.total_days as f64).round() as i64;
        }
        if weeks > 0 {
            report.avg_days_per_week = round1(report.total_days as f64 / weeks as f64);
            report.avg_minutes_per_week = (total / weeks as f64).round() as i64;
        }

        report.avg_first_check_in = mean_time_of_day(&first_check_ins);
        report.avg_last_check_out = mean_time_of_day(&last_check_outs);

        Ok(report)
    }

    /// One report per person in `people`, ordered by person identifier.
    pub fn aggregate_all(
        &self,
        people: &BTreeMap<String, PersonDays>,
        year: i32,
        month0: u32,
    ) -> AppResult<Vec<PersonMonthlyReport>> {
        people
            .iter()
            .map(|(person, days)| self.aggregate(person, days, year, month0))
            .collect()
    }
}

/// Aggregate with a Sunday-first week grid.
pub fn aggregate(
    person: &str,
    days: &PersonDays,
    year: i32,
    month0: u32,
) -> AppResult<PersonMonthlyReport> {
    MonthlyAggregator::default().aggregate(person, days, year, month0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Arithmetic mean of minutes-since-midnight values as `HH:MM`.
fn mean_time_of_day(values: &[i64]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<i64>() as f64 / values.len() as f64;
    let mins = mean.round() as i64;
    Some(format!("{:02}:{:02}", mins / 60, mins % 60))
}
