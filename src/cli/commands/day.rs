use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::DaySummary;
use crate::utils::colors::{GREEN, RESET, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{format_duration, format_time_opt};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        person,
        date: day_arg,
        json,
    } = cmd
    {
        let core = Core::from_config(cfg);

        if !core.store().has_person(person) {
            return Err(AppError::UnknownPerson(person.clone()));
        }

        let d = match day_arg {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let summary = core.build_day_summary(person, d)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_day(person, &d, &summary);
        }
    }
    Ok(())
}

fn print_day(person: &str, d: &NaiveDate, summary: &DaySummary) {
    println!("{}", bold(&format!("=== {} · {} ===", person, d.format("%A %Y-%m-%d"))));

    if summary.sessions.is_empty() {
        println!("No sessions recorded.");
        return;
    }

    let online = if summary.still_connected {
        format!("  {GREEN}● Online{RESET}")
    } else {
        String::new()
    };

    println!("Total time : {}", format_duration(summary.total_minutes));
    println!("First seen : {}", colorize_optional(&format_time_opt(summary.first_seen)));
    println!(
        "Last seen  : {}{}",
        colorize_optional(&format_time_opt(summary.last_seen)),
        online
    );
    println!("Sessions   : {}\n", summary.sessions.len());

    let mut table = Table::new(vec![
        Column::new("#", 2),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Duration", 8),
    ]);

    for (i, s) in summary.sessions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            s.start_str(),
            s.end_str()
                .unwrap_or_else(|| format!("{GREEN}now{RESET}")),
            format_duration(s.duration_minutes),
        ]);
    }

    print!("{}", table.render());
}
