use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::errors::{AppError, AppResult};
use crate::probe::PingProber;
use crate::store::SampleStore;
use crate::utils::colors::{GREEN, GREY, RESET};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { once } = cmd {
        let store = SampleStore::new(cfg.data_path());
        let prober = PingProber::new(cfg.ping_timeout_secs);

        if !*once {
            return ScanLogic::run_loop(cfg, &prober, &store);
        }

        if cfg.people.is_empty() {
            return Err(AppError::Config(
                "no people configured: add `people:` entries to the config file".to_string(),
            ));
        }

        let now = Local::now().naive_local();
        for r in ScanLogic::run_once(&cfg.people, &prober, &store, now)? {
            let status = if r.online {
                format!("{GREEN}online{RESET}")
            } else {
                format!("{GREY}offline{RESET}")
            };
            println!("{:<16} {:<16} {}", r.person, r.address, status);
        }
    }
    Ok(())
}
