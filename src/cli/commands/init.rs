use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the sample directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    info("Initializing rCheckin…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", cfg.data_path().display());

    success("rCheckin initialization completed! Add people to the config, then run `rcheckin scan`.");
    Ok(())
}
