use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::calendar;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET, paint_person};
use crate::utils::date::month_name;
use crate::utils::format_duration;
use crate::utils::formatting::bold;
use chrono::Datelike;

/// Calendar view of a month: one line per day, one entry per person seen.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, person } = cmd {
        let (year, month0) = resolve_month(period)?;
        let core = Core::from_config(cfg);

        // colors follow the full people list so they stay stable under --person
        let everyone = core.store().people()?;
        let people = core.people(person.as_deref())?;

        let mut days_by_person = Vec::with_capacity(people.len());
        for p in &people {
            days_by_person.push((p, core.month_days(p, year, month0)?));
        }

        println!("{}", bold(&format!("{} {}", month_name(month0), year)));

        for date in calendar::month_dates(year, month0)? {
            if date.day() > 1 && cfg.week_start.offset_of(date.weekday()) == 0 {
                println!();
            }

            let entries: Vec<String> = days_by_person
                .iter()
                .filter_map(|(p, days)| {
                    days.get(&date)
                        .filter(|s| s.total_minutes > 0)
                        .map(|s| {
                            let live = if s.still_connected { " ●" } else { "" };
                            format!(
                                "{} {}{}",
                                paint_person(p, &everyone),
                                format_duration(s.total_minutes),
                                live
                            )
                        })
                })
                .collect();

            let line = if entries.is_empty() {
                format!("{GREY}-{RESET}")
            } else {
                entries.join("  ")
            };

            println!("{} {:02}  {}", date.format("%a"), date.day(), line);
        }
    }
    Ok(())
}
