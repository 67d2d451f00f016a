//! Raw probe observations and the line format they are stored in.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One probe observation: `HH:MM:SS,1` on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: NaiveTime,
    pub online: bool,
}

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{2}:\d{2}:\d{2}),([01])$").expect("static sample regex is valid")
    })
}

impl RawSample {
    pub fn new(timestamp: NaiveTime, online: bool) -> Self {
        Self { timestamp, online }
    }

    /// Parse a single `HH:MM:SS,<0|1>` line.
    pub fn parse_line(line: &str) -> AppResult<Self> {
        let trimmed = line.trim();
        let caps = line_re()
            .captures(trimmed)
            .ok_or_else(|| AppError::InvalidSample(trimmed.to_string()))?;

        let timestamp = NaiveTime::parse_from_str(&caps[1], "%H:%M:%S")
            .map_err(|_| AppError::InvalidSample(trimmed.to_string()))?;

        Ok(Self {
            timestamp,
            online: &caps[2] == "1",
        })
    }

    /// Render the sample back to its storage line (without newline).
    pub fn to_line(&self) -> String {
        format!(
            "{},{}",
            self.timestamp.format("%H:%M:%S"),
            if self.online { 1 } else { 0 }
        )
    }

    /// Minutes since midnight, seconds ignored.
    pub fn minute_of_day(&self) -> i64 {
        minute_of_day(self.timestamp)
    }
}

/// Minutes since midnight for a time-of-day (seconds are dropped).
pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Outcome of parsing a whole day file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    pub samples: Vec<RawSample>,
    /// Non-blank lines that could not be parsed (1-based line number, text).
    pub rejected: Vec<(usize, String)>,
}

/// Parse the content of a day log. Blank lines are ignored, malformed
/// lines are collected in `rejected` and skipped.
pub fn parse_log(content: &str) -> ParsedLog {
    let mut out = ParsedLog::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match RawSample::parse_line(line) {
            Ok(s) => out.samples.push(s),
            Err(_) => out.rejected.push((idx + 1, line.to_string())),
        }
    }

    out
}
