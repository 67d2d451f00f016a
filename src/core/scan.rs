//! Probe rounds: ping every configured person and append the outcome.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RawSample;
use crate::probe::Prober;
use crate::store::SampleStore;
use crate::ui::messages::info;
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;
use tracing::{error, info as log_info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub person: String,
    pub address: String,
    pub online: bool,
}

pub struct ScanLogic;

impl ScanLogic {
    /// Probe everyone in parallel, then record one sample per person at `now`.
    /// Results come back in person order.
    pub fn run_once(
        people: &BTreeMap<String, String>,
        prober: &dyn Prober,
        store: &SampleStore,
        now: NaiveDateTime,
    ) -> AppResult<Vec<ProbeResult>> {
        let results = thread::scope(|s| {
            let handles: Vec<_> = people
                .iter()
                .map(|(person, address)| {
                    s.spawn(move || ProbeResult {
                        person: person.clone(),
                        address: address.clone(),
                        online: prober.is_online(address),
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .map_err(|_| AppError::Other("probe thread panicked".to_string()))
                })
                .collect::<AppResult<Vec<_>>>()
        })?;

        let sample_time = now.time();
        for r in &results {
            store.append(&r.person, now.date(), &RawSample::new(sample_time, r.online))?;
            log_info!(
                "[{}] {}: {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                r.person,
                if r.online { "online" } else { "offline" }
            );
        }

        Ok(results)
    }

    /// Run a probe round every `probe_interval_minutes`, forever.
    /// A failed round is logged and the loop keeps going.
    pub fn run_loop(cfg: &Config, prober: &dyn Prober, store: &SampleStore) -> AppResult<()> {
        if cfg.people.is_empty() {
            return Err(AppError::Config(
                "no people configured: add `people:` entries to the config file".to_string(),
            ));
        }

        let interval = Duration::from_secs(cfg.probe_interval_minutes as u64 * 60);
        info(format!(
            "Checking {} address(es) every {} seconds",
            cfg.people.len(),
            interval.as_secs()
        ));

        loop {
            let now = Local::now().naive_local();
            if let Err(e) = Self::run_once(&cfg.people, prober, store, now) {
                error!("probe round failed: {e}");
            }
            thread::sleep(interval);
        }
    }
}
