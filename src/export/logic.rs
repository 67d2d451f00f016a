// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::models::PersonMonthlyReport;
use crate::ui::messages::warning;
use crate::utils::fs::ensure_writable;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the monthly reports of `month` (`YYYY-MM`) to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is overwritten only with `force` or after confirmation
    pub fn export(
        reports: &[PersonMonthlyReport],
        month: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if reports.is_empty() {
            warning(format!("No check-in data found for {month}."));
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<ReportExport> = reports
                    .iter()
                    .map(|r| ReportExport::from_report(month, r))
                    .collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Json => export_json(reports, path)?,
        }

        Ok(())
    }
}
