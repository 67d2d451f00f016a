use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::PersonMonthlyReport;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, paint_person};
use crate::utils::date::month_name;
use crate::utils::format_duration;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        person,
        json,
    } = cmd
    {
        let (year, month0) = resolve_month(period)?;
        let core = Core::from_config(cfg);
        let reports = core.monthly_reports(year, month0, person.as_deref())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
            return Ok(());
        }

        if reports.is_empty() {
            info(format!(
                "No check-in data found for {} {}.",
                month_name(month0),
                year
            ));
            return Ok(());
        }

        header(format!("Monthly report · {} {}", month_name(month0), year));
        let everyone = core.store().people()?;
        print!("{}", render_reports(&reports, &everyone));
    }
    Ok(())
}

fn render_reports(reports: &[PersonMonthlyReport], everyone: &[String]) -> String {
    let mut table = Table::new(vec![
        Column::new("Person", 8),
        Column::new("Total", 7),
        Column::new("Days", 4),
        Column::new("Avg/day", 7),
        Column::new("Days/wk", 7),
        Column::new("Avg/wk", 7),
        Column::new("Avg in", 6),
        Column::new("Avg out", 7),
    ]);

    for r in reports {
        table.add_row(vec![
            paint_person(&r.person, everyone),
            colorize_optional(&format_duration(r.total_minutes)),
            r.total_days.to_string(),
            colorize_optional(&format_duration(r.avg_minutes_per_day)),
            format!("{:.1}", r.avg_days_per_week),
            colorize_optional(&format_duration(r.avg_minutes_per_week)),
            colorize_optional(r.avg_first_check_in.as_deref().unwrap_or("--:--")),
            colorize_optional(r.avg_last_check_out.as_deref().unwrap_or("--:--")),
        ]);
    }

    table.render()
}
