use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            edit(editor)?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the config file in `requested`, falling back to the default editor.
fn edit(requested: &Option<String>) -> AppResult<()> {
    let path = Config::config_file();
    let fallback = default_editor();
    let first = requested.clone().unwrap_or_else(|| fallback.clone());

    let launch = |ed: &str| {
        Command::new(ed)
            .arg(&path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    };

    if launch(&first) {
        success(format!("Configuration file edited using '{first}'"));
        return Ok(());
    }

    if first != fallback {
        warning(format!(
            "Editor '{first}' not available, falling back to '{fallback}'"
        ));
        if launch(&fallback) {
            success(format!("Configuration file edited using '{fallback}'"));
            return Ok(());
        }
    }

    Err(AppError::Config(format!(
        "could not open {} with an editor",
        path.display()
    )))
}
