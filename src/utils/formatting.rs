//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveTime;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `45m`, `2h`, `2h 5m`
pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    let hours = m / 60;
    let mins = m % 60;

    if hours == 0 {
        format!("{sign}{mins}m")
    } else if mins == 0 {
        format!("{sign}{hours}h")
    } else {
        format!("{sign}{hours}h {mins}m")
    }
}

/// `HH:MM`, or `--:--` when absent.
pub fn format_time_opt(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
