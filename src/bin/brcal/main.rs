mod cli;
mod logging;

use std::process;

use anyhow::Result;
use brcal::{BrazilCalendar, HolidayConfig, WEEKDAY_LABELS};
use clap::Parser;
use serde::Serialize;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        // Calendar errors already embed their cause in the message
        eprintln!("Erro: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => HolidayConfig::load(path)?,
        None => HolidayConfig::default(),
    };
    let calendar = BrazilCalendar::with_config(config);
    let json = cli.json;

    match &cli.command {
        Command::LastDay(args) => {
            let (year, month) = args.parse()?;
            let day = calendar.last_day_of_month(year, month)?;
            emit(json, &day, || day.to_string())
        }
        Command::LastBusinessDay(args) => {
            let (year, month) = args.parse()?;
            let day = calendar.last_business_day_of_month(year, month)?;
            emit(json, &day, || day.to_string())
        }
        Command::Holidays(args) => {
            let holidays = calendar.holidays_in_year_named(args.parse()?)?;
            emit(json, &holidays, || {
                holidays
                    .iter()
                    .map(|h| format!("{}  {}", h.date, h.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::MonthHolidays(args) => {
            let (year, month) = args.parse()?;
            let days = calendar.holiday_days_in_month(year, month)?;
            emit(json, &days, || {
                if days.is_empty() {
                    brcal::HolidayDays::SENTINEL.to_string()
                } else {
                    days.days()
                        .iter()
                        .map(u8::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                }
            })
        }
        Command::Weekday(args) => {
            let (year, month, day) = args.parse()?;
            let label = calendar.weekday_name(year, month, day)?;
            emit(json, &label, || label.to_string())
        }
        Command::IsHoliday(args) => {
            let (year, month, day) = args.parse()?;
            let holiday = calendar.is_holiday(year, month, day)?;
            emit(json, &holiday, || holiday.to_string())
        }
        Command::Calendar(args) => {
            let (year, month) = args.parse()?;
            let rows = calendar.month_calendar(year, month)?;
            emit(json, &rows, || render_grid(&rows))
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn render_grid(rows: &[[u8; brcal::DAYS_IN_WEEK]]) -> String {
    let mut out = WEEKDAY_LABELS
        .iter()
        .map(|l| format!("{:>3}", l.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    for row in rows {
        out.push('\n');
        let line = row
            .iter()
            .map(|&d| if d == 0 { "   ".to_owned() } else { format!("{d:>3}") })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
    }
    out
}
