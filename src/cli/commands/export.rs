use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::month_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        person,
        force,
    } = cmd
    {
        let (year, month0) = resolve_month(period)?;
        let reports = Core::from_config(cfg).monthly_reports(year, month0, person.as_deref())?;
        ExportLogic::export(&reports, &month_label(year, month0), *format, file, *force)?;
    }
    Ok(())
}
