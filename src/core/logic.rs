use crate::config::Config;
use crate::core::calculator::calendar;
use crate::core::calculator::monthly::{MonthlyAggregator, PersonDays};
use crate::core::calculator::sessions::SessionReconstructor;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySummary, PersonMonthlyReport};
use crate::store::SampleStore;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Wires the sample store to the reconstructor and the aggregator.
pub struct Core {
    store: SampleStore,
    reconstructor: SessionReconstructor,
    aggregator: MonthlyAggregator,
}

impl Core {
    pub fn new(
        store: SampleStore,
        reconstructor: SessionReconstructor,
        aggregator: MonthlyAggregator,
    ) -> Self {
        Self {
            store,
            reconstructor,
            aggregator,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            SampleStore::new(cfg.data_path()),
            cfg.reconstructor(),
            MonthlyAggregator::new(cfg.week_start),
        )
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// People to report on: everyone with a sample directory, or just `only`.
    pub fn people(&self, only: Option<&str>) -> AppResult<Vec<String>> {
        match only {
            Some(p) if self.store.has_person(p) => Ok(vec![p.to_string()]),
            Some(p) => Err(AppError::UnknownPerson(p.to_string())),
            None => self.store.people(),
        }
    }

    pub fn build_day_summary(&self, person: &str, date: NaiveDate) -> AppResult<DaySummary> {
        let samples = self.store.load_day(person, date)?;
        debug!(person, %date, samples = samples.len(), "reconstructing day");
        Ok(self.reconstructor.reconstruct(&samples))
    }

    /// Summaries for every date of the month that has a sample file.
    pub fn month_days(&self, person: &str, year: i32, month0: u32) -> AppResult<PersonDays> {
        let first = calendar::first_of_month(year, month0)?;

        let mut days = PersonDays::new();
        for date in self.store.dates(person)? {
            if date.year() == first.year() && date.month0() == month0 {
                days.insert(date, self.build_day_summary(person, date)?);
            }
        }
        Ok(days)
    }

    pub fn monthly_reports(
        &self,
        year: i32,
        month0: u32,
        only: Option<&str>,
    ) -> AppResult<Vec<PersonMonthlyReport>> {
        let mut source: BTreeMap<String, PersonDays> = BTreeMap::new();
        for person in self.people(only)? {
            let days = self.month_days(&person, year, month0)?;
            source.insert(person, days);
        }

        self.aggregator.aggregate_all(&source, year, month0)
    }
}
