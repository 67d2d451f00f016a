mod common;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::{data_dir, seed_june, setup_home, write_day};
use rcheckin::core::calculator::monthly::MonthlyAggregator;
use rcheckin::core::calculator::sessions::SessionReconstructor;
use rcheckin::core::logic::Core;
use rcheckin::core::scan::ScanLogic;
use rcheckin::errors::AppError;
use rcheckin::models::{RawSample, parse_log};
use rcheckin::probe::Prober;
use rcheckin::store::SampleStore;
use std::collections::{BTreeMap, HashSet};
use std::fs;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_line() {
    let s = RawSample::parse_line(" 09:03:00,1 ").unwrap();
    assert_eq!(s.timestamp, NaiveTime::from_hms_opt(9, 3, 0).unwrap());
    assert!(s.online);
    assert_eq!(s.to_line(), "09:03:00,1");

    assert!(!RawSample::parse_line("23:59:59,0").unwrap().online);

    for bad in ["9:00:00,1", "09:00:00,2", "09:00:00", "25:00:00,1", "garbage", ""] {
        assert!(
            matches!(RawSample::parse_line(bad), Err(AppError::InvalidSample(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_log_skips_malformed_lines() {
    let parsed = parse_log("09:00:00,1\n\nnot a sample\n09:03:00,0\n");

    assert_eq!(parsed.samples.len(), 2);
    assert_eq!(parsed.rejected, vec![(3, "not a sample".to_string())]);
    assert!(parse_log("   \n").samples.is_empty());
}

#[test]
fn test_store_append_and_load() {
    let home = setup_home("store_append_and_load");
    let store = SampleStore::new(data_dir(&home));
    let d = date("2025-06-03");

    assert!(store.load_day("alice", d).unwrap().is_empty());

    let first = RawSample::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap(), true);
    let second = RawSample::new(NaiveTime::from_hms_opt(9, 3, 0).unwrap(), false);
    store.append("alice", d, &first).unwrap();
    store.append("alice", d, &second).unwrap();

    assert_eq!(store.load_day("alice", d).unwrap(), vec![first, second]);
    let raw = fs::read_to_string(store.day_file("alice", d)).unwrap();
    assert_eq!(raw, "09:00:00,1\n09:03:00,0\n");
}

#[test]
fn test_store_lists_people_and_dates() {
    let home = setup_home("store_lists_people_and_dates");
    let data = data_dir(&home);
    write_day(&data, "carol", "2025-06-02", &["09:00:00,1"]);
    write_day(&data, "alice", "2025-06-05", &["09:00:00,1"]);
    write_day(&data, "alice", "2025-06-01", &["09:00:00,1"]);
    write_day(&data, ".hidden", "2025-06-01", &["09:00:00,1"]);
    fs::write(data.join("alice").join("notes.txt"), "x").unwrap();
    fs::write(data.join("stray-file"), "x").unwrap();

    let store = SampleStore::new(&data);
    assert_eq!(store.people().unwrap(), ["alice", "carol"]);
    assert_eq!(
        store.dates("alice").unwrap(),
        [date("2025-06-01"), date("2025-06-05")]
    );
    assert!(matches!(
        store.dates("nobody"),
        Err(AppError::UnknownPerson(_))
    ));
    assert_eq!(store.all_files().unwrap().len(), 3);
}

#[test]
fn test_store_missing_root_has_no_people() {
    let home = setup_home("store_missing_root");
    let store = SampleStore::new(home.join("does-not-exist"));
    assert!(store.people().unwrap().is_empty());
}

#[test]
fn test_store_sorts_out_of_order_file() {
    let home = setup_home("store_sorts_out_of_order");
    let data = data_dir(&home);
    write_day(&data, "alice", "2025-06-03", &["09:06:00,0", "09:00:00,1", "09:03:00,1"]);

    let store = SampleStore::new(&data);
    let loaded = store.load_day("alice", date("2025-06-03")).unwrap();
    let times: Vec<String> = loaded.iter().map(|s| s.to_line()).collect();
    assert_eq!(times, ["09:00:00,1", "09:03:00,1", "09:06:00,0"]);
}

#[test]
fn test_core_builds_month_reports_from_store() {
    let home = setup_home("core_month_reports");
    let data = data_dir(&home);
    seed_june(&data);
    write_day(&data, "alice", "2025-07-01", &["09:00:00,1", "10:00:00,0"]);

    let core = Core::new(
        SampleStore::new(&data),
        SessionReconstructor::default(),
        MonthlyAggregator::default(),
    );

    let summary = core.build_day_summary("alice", date("2025-06-03")).unwrap();
    assert_eq!(summary.total_minutes, 120);

    let june = core.month_days("alice", 2025, 5).unwrap();
    assert_eq!(june.len(), 2);

    let reports = core.monthly_reports(2025, 5, None).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].person, "alice");
    assert_eq!(reports[0].total_minutes, 180);
    assert_eq!(reports[0].avg_minutes_per_day, 90);
    assert_eq!(reports[1].person, "bob");
    assert_eq!(reports[1].total_minutes, 0);
    assert_eq!(reports[1].daily_data.len(), 30);

    let only_bob = core.monthly_reports(2025, 5, Some("bob")).unwrap();
    assert_eq!(only_bob.len(), 1);

    assert!(matches!(
        core.monthly_reports(2025, 5, Some("mallory")),
        Err(AppError::UnknownPerson(_))
    ));
}

struct FakeProber {
    online: HashSet<&'static str>,
}

impl Prober for FakeProber {
    fn is_online(&self, address: &str) -> bool {
        self.online.contains(address)
    }
}

#[test]
fn test_scan_round_writes_one_line_per_person() {
    let home = setup_home("scan_round");
    let store = SampleStore::new(data_dir(&home));

    let mut people = BTreeMap::new();
    people.insert("bob".to_string(), "192.168.1.20".to_string());
    people.insert("alice".to_string(), "192.168.1.10".to_string());

    let prober = FakeProber {
        online: HashSet::from(["192.168.1.10"]),
    };

    let now = NaiveDateTime::parse_from_str("2025-06-03 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    let results = ScanLogic::run_once(&people, &prober, &store, now).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].person, "alice");
    assert!(results[0].online);
    assert_eq!(results[1].person, "bob");
    assert!(!results[1].online);

    let later = NaiveDateTime::parse_from_str("2025-06-03 09:03:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ScanLogic::run_once(&people, &prober, &store, later).unwrap();

    let d = date("2025-06-03");
    assert_eq!(
        fs::read_to_string(store.day_file("alice", d)).unwrap(),
        "09:00:00,1\n09:03:00,1\n"
    );
    assert_eq!(
        fs::read_to_string(store.day_file("bob", d)).unwrap(),
        "09:00:00,0\n09:03:00,0\n"
    );
}
