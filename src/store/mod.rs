//! Line-oriented sample storage: one file per person per day,
//! `<root>/<person>/<YYYY-MM-DD>`, one `HH:MM:SS,<0|1>` line per probe.

use crate::errors::{AppError, AppResult};
use crate::models::sample::{RawSample, parse_log};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SampleStore {
    root: PathBuf,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl SampleStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn person_dir(&self, person: &str) -> PathBuf {
        self.root.join(person)
    }

    pub fn day_file(&self, person: &str, date: NaiveDate) -> PathBuf {
        self.person_dir(person)
            .join(date.format("%Y-%m-%d").to_string())
    }

    /// People that have a sample directory, sorted by name.
    /// A missing root simply means nobody has been seen yet.
    pub fn people(&self) -> AppResult<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut people = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !is_hidden(&name) {
                people.push(name);
            }
        }

        people.sort();
        Ok(people)
    }

    pub fn has_person(&self, person: &str) -> bool {
        self.person_dir(person).is_dir()
    }

    /// Dates with a log file for `person`, ascending. Unrelated files are ignored.
    pub fn dates(&self, person: &str) -> AppResult<Vec<NaiveDate>> {
        let dir = self.person_dir(person);
        if !dir.is_dir() {
            return Err(AppError::UnknownPerson(person.to_string()));
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let name = entry?.file_name().to_string_lossy().to_string();
            if is_hidden(&name) {
                continue;
            }
            match NaiveDate::parse_from_str(&name, "%Y-%m-%d") {
                Ok(d) => dates.push(d),
                Err(_) => debug!(person, file = %name, "ignoring non-date file"),
            }
        }

        dates.sort();
        Ok(dates)
    }

    /// Samples recorded for `person` on `date`, in chronological order.
    /// A missing file yields no samples.
    pub fn load_day(&self, person: &str, date: NaiveDate) -> AppResult<Vec<RawSample>> {
        let path = self.day_file(person, date);

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let parsed = parse_log(&content);
        for (line_no, line) in &parsed.rejected {
            warn!(file = %path.display(), line_no, line = %line, "skipping malformed sample");
        }

        let mut samples = parsed.samples;
        if samples.windows(2).any(|w| w[0].timestamp > w[1].timestamp) {
            warn!(file = %path.display(), "samples out of order, sorting");
            samples.sort_by_key(|s| s.timestamp);
        }

        Ok(samples)
    }

    /// Append one sample line, creating the person directory if needed.
    pub fn append(&self, person: &str, date: NaiveDate, sample: &RawSample) -> AppResult<()> {
        fs::create_dir_all(self.person_dir(person))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.day_file(person, date))?;
        writeln!(file, "{}", sample.to_line())?;

        Ok(())
    }

    /// Every sample file under the root as `(relative name, absolute path)`,
    /// e.g. `("alice/2025-06-01", ...)`.
    pub fn all_files(&self) -> AppResult<Vec<(String, PathBuf)>> {
        let mut out = Vec::new();
        for person in self.people()? {
            for date in self.dates(&person)? {
                out.push((
                    format!("{}/{}", person, date.format("%Y-%m-%d")),
                    self.day_file(&person, date),
                ));
            }
        }
        Ok(out)
    }
}
