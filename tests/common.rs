#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rck(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty per-test home directory inside the system temp dir.
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rcheckin_tests");
    path.push(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn data_dir(home: &Path) -> PathBuf {
    home.join("check-ins")
}

/// Write one day log for `person`, one sample line per entry.
pub fn write_day(data: &Path, person: &str, date: &str, lines: &[&str]) {
    let dir = data.join(person);
    fs::create_dir_all(&dir).expect("create person dir");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(dir.join(date), content).expect("write day log");
}

/// June 2025: alice on the 3rd (09:00–11:00) and 10th (10:00–11:00),
/// bob only has offline samples on the 3rd.
pub fn seed_june(data: &Path) {
    write_day(
        data,
        "alice",
        "2025-06-03",
        &["08:57:00,0", "09:00:00,1", "10:00:00,1", "11:00:00,1", "11:00:30,0"],
    );
    write_day(
        data,
        "alice",
        "2025-06-10",
        &["10:00:00,1", "10:30:00,1", "11:00:00,1", "11:00:10,0"],
    );
    write_day(data, "bob", "2025-06-03", &["09:00:00,0", "09:03:00,0"]);
}

pub fn samples(lines: &[&str]) -> Vec<rcheckin::models::RawSample> {
    lines
        .iter()
        .map(|l| rcheckin::models::RawSample::parse_line(l).expect("valid sample line"))
        .collect()
}
