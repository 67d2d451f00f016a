mod common;
use chrono::NaiveTime;
use common::samples;
use rcheckin::core::calculator::sessions::{
    DEFAULT_GRACE_MINUTES, SessionReconstructor, reconstruct,
};
use rcheckin::models::DaySummary;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
}

#[test]
fn test_closed_session() {
    let day = reconstruct(&samples(&["09:00:00,1", "09:03:00,1", "09:06:00,0"]));

    assert_eq!(day.sessions.len(), 1);
    let s = &day.sessions[0];
    assert_eq!(s.start, t("09:00:00"));
    assert_eq!(s.end, Some(t("09:06:00")));
    assert_eq!(s.duration_minutes, 6);
    assert_eq!(day.total_minutes, 6);
    assert_eq!(day.first_seen, Some(t("09:00:00")));
    assert_eq!(day.last_seen, Some(t("09:03:00")));
    assert!(!day.still_connected);
}

#[test]
fn test_open_session_gets_grace() {
    let day = reconstruct(&samples(&["08:00:00,1", "08:03:00,1"]));

    assert_eq!(day.sessions.len(), 1);
    let s = &day.sessions[0];
    assert_eq!(s.start, t("08:00:00"));
    assert!(s.is_open());
    assert_eq!(s.duration_minutes, 3 + DEFAULT_GRACE_MINUTES);
    assert_eq!(s.duration_minutes, 6);
    assert!(day.still_connected);
}

#[test]
fn test_empty_day() {
    let day = reconstruct(&[]);

    assert_eq!(day, DaySummary::default());
    assert!(day.sessions.is_empty());
    assert_eq!(day.total_minutes, 0);
    assert_eq!(day.first_seen, None);
    assert_eq!(day.last_seen, None);
    assert!(!day.still_connected);
}

#[test]
fn test_only_trailing_session_gets_grace() {
    let day = reconstruct(&samples(&[
        "08:00:00,1",
        "08:03:00,1",
        "08:06:00,0",
        "08:09:00,0",
        "10:00:00,1",
        "10:03:00,1",
    ]));

    assert_eq!(day.sessions.len(), 2);
    assert_eq!(day.sessions[0].end, Some(t("08:06:00")));
    assert_eq!(day.sessions[0].duration_minutes, 6);
    assert_eq!(day.sessions[1].start, t("10:00:00"));
    assert_eq!(day.sessions[1].end, None);
    assert_eq!(day.sessions[1].duration_minutes, 6);
    assert_eq!(day.total_minutes, 12);
    assert_eq!(day.first_seen, Some(t("08:00:00")));
    assert_eq!(day.last_seen, Some(t("10:03:00")));
    assert!(day.still_connected);
}

#[test]
fn test_offline_only_day_has_no_sessions() {
    let day = reconstruct(&samples(&["07:00:00,0", "07:03:00,0"]));

    assert!(day.sessions.is_empty());
    assert_eq!(day.total_minutes, 0);
    assert_eq!(day.first_seen, None);
    assert!(!day.still_connected);
}

#[test]
fn test_single_online_sample() {
    let day = reconstruct(&samples(&["12:00:00,1"]));

    assert_eq!(day.sessions.len(), 1);
    assert_eq!(day.sessions[0].duration_minutes, DEFAULT_GRACE_MINUTES);
    assert_eq!(day.first_seen, day.last_seen);
    assert!(day.still_connected);
}

#[test]
fn test_custom_grace_follows_probe_interval() {
    let r = SessionReconstructor::new(5);
    let day = r.reconstruct(&samples(&["08:00:00,1", "08:05:00,1"]));

    assert_eq!(r.grace_minutes(), 5);
    assert_eq!(day.total_minutes, 10);
}

#[test]
fn test_seconds_are_ignored_in_durations() {
    let day = reconstruct(&samples(&["09:00:59,1", "09:06:00,0"]));
    assert_eq!(day.sessions[0].duration_minutes, 6);
}

#[test]
fn test_reconnect_after_offline_opens_new_session() {
    let day = reconstruct(&samples(&[
        "09:00:00,1",
        "09:03:00,0",
        "09:06:00,1",
        "09:09:00,0",
    ]));

    assert_eq!(day.sessions.len(), 2);
    assert!(day.sessions.iter().all(|s| s.end.is_some()));
    assert!(day.sessions[0].end.unwrap() <= day.sessions[1].start);
    assert_eq!(day.total_minutes, 6);
    assert!(!day.still_connected);
}

#[test]
fn test_total_is_sum_and_last_sample_drives_still_connected() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["09:00:00,1"],
        vec!["09:00:00,0", "09:03:00,1", "09:06:00,1"],
        vec!["09:00:00,1", "09:03:00,0", "09:06:00,1", "12:00:00,1", "12:03:00,0"],
        vec!["23:54:00,1", "23:57:00,1"],
    ];

    for lines in cases {
        let input = samples(&lines);
        let day = reconstruct(&input);

        let sum: i64 = day.sessions.iter().map(|s| s.duration_minutes).sum();
        assert_eq!(day.total_minutes, sum, "{lines:?}");

        let last_online = input.last().unwrap().online;
        assert_eq!(day.still_connected, last_online, "{lines:?}");
        if last_online {
            assert!(day.sessions.last().unwrap().is_open(), "{lines:?}");
        }
        assert!(day.sessions.iter().rev().skip(1).all(|s| !s.is_open()));
    }
}

#[test]
fn test_reconstruct_is_idempotent() {
    let input = samples(&["09:00:00,1", "09:03:00,1", "09:06:00,0", "10:00:00,1"]);
    assert_eq!(reconstruct(&input), reconstruct(&input));
}

#[test]
fn test_day_summary_json_contract() {
    let day = reconstruct(&samples(&["08:00:00,1", "08:03:00,1"]));
    let v = serde_json::to_value(&day).unwrap();

    assert_eq!(v["totalMinutes"], 6);
    assert_eq!(v["firstSeen"], "08:00:00");
    assert_eq!(v["lastSeen"], "08:03:00");
    assert_eq!(v["stillConnected"], true);
    assert_eq!(v["sessions"][0]["start"], "08:00:00");
    assert!(v["sessions"][0]["end"].is_null());
    assert_eq!(v["sessions"][0]["durationMinutes"], 6);
}
