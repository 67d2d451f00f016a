use chrono::NaiveTime;
use serde::Serialize;

/// A maximal contiguous interval during which a person was seen online.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub start: NaiveTime,
    /// `None` while the session is still open.
    pub end: Option<NaiveTime>,
    pub duration_minutes: i64,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(|t| t.format("%H:%M:%S").to_string())
    }
}
