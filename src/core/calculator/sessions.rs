//! Session reconstruction: one day of ordered probe samples → `DaySummary`.

use crate::models::day_summary::DaySummary;
use crate::models::sample::{RawSample, minute_of_day};
use crate::models::session::Session;
use chrono::NaiveTime;

/// Minutes added to the trailing session of a day: presence is known to
/// last at least until the next scheduled probe. Equals the probe cadence.
pub const DEFAULT_GRACE_MINUTES: i64 = 3;

/// Rebuilds connection sessions from raw samples.
#[derive(Debug, Clone, Copy)]
pub struct SessionReconstructor {
    grace_minutes: i64,
}

impl Default for SessionReconstructor {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_MINUTES)
    }
}

/// Scan state, advanced once per sample.
#[derive(Debug, Default)]
struct ScanState {
    open_start: Option<NaiveTime>,
    first_seen: Option<NaiveTime>,
    last_seen: Option<NaiveTime>,
    sessions: Vec<Session>,
}

impl ScanState {
    fn step(&mut self, sample: &RawSample) {
        let t = sample.timestamp;

        if sample.online {
            self.last_seen = Some(t);
            if self.first_seen.is_none() {
                self.first_seen = Some(t);
            }
            if self.open_start.is_none() {
                self.open_start = Some(t);
            }
        } else if let Some(start) = self.open_start.take() {
            self.sessions.push(Session {
                start,
                end: Some(t),
                duration_minutes: minute_of_day(t) - minute_of_day(start),
            });
        }
    }
}

impl SessionReconstructor {
    pub fn new(grace_minutes: i64) -> Self {
        Self { grace_minutes }
    }

    pub fn grace_minutes(&self) -> i64 {
        self.grace_minutes
    }

    /// Samples must be in non-decreasing timestamp order; no reordering
    /// happens here.
    pub fn reconstruct(&self, samples: &[RawSample]) -> DaySummary {
        let Some(last) = samples.last() else {
            return DaySummary::default();
        };

        let mut state = ScanState::default();
        for sample in samples {
            state.step(sample);
        }

        let still_connected = last.online;

        // -----------------------------
        // Trailing session (open at scan end)
        // -----------------------------
        if let Some(start) = state.open_start.take() {
            state.sessions.push(Session {
                start,
                end: if still_connected {
                    None
                } else {
                    Some(last.timestamp)
                },
                duration_minutes: minute_of_day(last.timestamp) - minute_of_day(start)
                    + self.grace_minutes,
            });
        }

        let total_minutes = state.sessions.iter().map(|s| s.duration_minutes).sum();

        DaySummary {
            sessions: state.sessions,
            total_minutes,
            first_seen: state.first_seen,
            last_seen: state.last_seen,
            still_connected,
        }
    }
}

/// Reconstruct with the default grace correction.
pub fn reconstruct(samples: &[RawSample]) -> DaySummary {
    SessionReconstructor::default().reconstruct(samples)
}
