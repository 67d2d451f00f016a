//! Output-file helpers shared by export and backup.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}

/// Ok when `path` is free, `force` is set, or the user agrees to overwrite it.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));

    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Cancelled(format!(
            "'{}' left untouched",
            path.display()
        )))
    }
}
