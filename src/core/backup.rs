use crate::errors::{AppError, AppResult};
use crate::store::SampleStore;
use crate::ui::messages::{success, warning};
use crate::utils::fs::ensure_writable;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Archive every sample file of `store`.
    ///
    /// - plain: copy the `<person>/<date>` tree under `dest`
    /// - `compress`: write a single deflated zip at `dest` (`.zip` appended
    ///   when missing)
    ///
    /// Returns the path actually written.
    pub fn backup(
        store: &SampleStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup path must be absolute: {dest_file}"
            )));
        }

        // 1️⃣ Check the data directory exists
        if !store.root().exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data directory not found: {}", store.root().display()),
            )
            .into());
        }

        let files = store.all_files()?;
        if files.is_empty() {
            warning("No sample files to back up.");
        }

        // 2️⃣ Write archive or tree
        let written = if compress {
            let zip_path = if dest.extension().is_some_and(|e| e == "zip") {
                dest.to_path_buf()
            } else {
                dest.with_extension("zip")
            };
            ensure_writable(&zip_path, force)?;
            write_zip(&files, &zip_path)?;
            zip_path
        } else {
            ensure_writable(dest, force)?;
            copy_tree(&files, dest)?;
            dest.to_path_buf()
        };

        success(format!(
            "Backup created: {} ({} file(s))",
            written.display(),
            files.len()
        ));
        Ok(written)
    }
}

fn copy_tree(files: &[(String, PathBuf)], dest: &Path) -> AppResult<()> {
    for (name, src) in files {
        let target = dest.join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, &target)?;
    }
    Ok(())
}

fn write_zip(files: &[(String, PathBuf)], zip_path: &Path) -> AppResult<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, src) in files {
        zip.start_file(name.as_str(), options)?;
        let mut f = fs::File::open(src)?;
        std::io::copy(&mut f, &mut zip)?;
    }
    zip.finish()?;

    Ok(())
}
