use super::session::Session;
use chrono::NaiveTime;
use serde::Serialize;

/// Sessions and aggregates for one person on one date.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub sessions: Vec<Session>,
    pub total_minutes: i64,
    pub first_seen: Option<NaiveTime>,
    pub last_seen: Option<NaiveTime>,
    pub still_connected: bool,
}

impl DaySummary {
    pub fn has_data(&self) -> bool {
        self.total_minutes > 0
    }
}
