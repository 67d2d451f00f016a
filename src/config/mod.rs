use crate::core::calculator::calendar::WeekStart;
use crate::core::calculator::sessions::{DEFAULT_GRACE_MINUTES, SessionReconstructor};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Root of the `<person>/<YYYY-MM-DD>` sample files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// person → network address to probe
    #[serde(default)]
    pub people: BTreeMap<String, String>,
    #[serde(default = "default_probe_interval")]
    pub probe_interval_minutes: i64,
    #[serde(default = "default_ping_timeout")]
    pub ping_timeout_secs: u64,
    #[serde(default)]
    pub week_start: WeekStart,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("check-ins")
        .to_string_lossy()
        .to_string()
}
fn default_probe_interval() -> i64 {
    DEFAULT_GRACE_MINUTES
}
fn default_ping_timeout() -> u64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            people: BTreeMap::new(),
            probe_interval_minutes: default_probe_interval(),
            ping_timeout_secs: default_ping_timeout(),
            week_start: WeekStart::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.probe_interval_minutes <= 0 {
            return Err(AppError::Config(format!(
                "probe_interval_minutes must be positive, got {}",
                self.probe_interval_minutes
            )));
        }
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// The grace correction matches the probe cadence.
    pub fn reconstructor(&self) -> SessionReconstructor {
        SessionReconstructor::new(self.probe_interval_minutes)
    }

    /// Initialize configuration file and data directory
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(custom) = custom_data_dir {
            let p = Path::new(&custom);
            config.data_dir = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        fs::create_dir_all(config.data_path())?;

        Ok(config)
    }
}
