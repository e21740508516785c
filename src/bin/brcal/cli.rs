use std::path::PathBuf;

use brcal::{Arg, CalendarError, Field};
use clap::{Parser, Subcommand};

/// Brazilian calendar facts.
#[derive(Parser)]
#[command(
    name = "brcal",
    version,
    about = "Month ends, business days, national holidays and weekday names for Brazil"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a holiday TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Last calendar day of the month.
    LastDay(YearMonthArgs),
    /// Last Monday..Friday of the month.
    LastBusinessDay(YearMonthArgs),
    /// Every national holiday of the year.
    Holidays(YearArgs),
    /// Holiday days of the month (0 when there are none).
    MonthHolidays(YearMonthArgs),
    /// Abbreviated weekday name of a date.
    Weekday(DateArgs),
    /// Whether a date is a holiday.
    IsHoliday(DateArgs),
    /// Month grid, Monday first.
    Calendar(YearMonthArgs),
}

/// Arguments are kept as text so non-integers are reported by the validator.
#[derive(clap::Args)]
pub struct YearArgs {
    #[arg(allow_hyphen_values = true)]
    pub year: String,
}

#[derive(clap::Args)]
pub struct YearMonthArgs {
    #[arg(allow_hyphen_values = true)]
    pub year: String,
    #[arg(allow_hyphen_values = true)]
    pub month: String,
}

#[derive(clap::Args)]
pub struct DateArgs {
    #[arg(allow_hyphen_values = true)]
    pub year: String,
    #[arg(allow_hyphen_values = true)]
    pub month: String,
    #[arg(allow_hyphen_values = true)]
    pub day: String,
}

impl YearArgs {
    pub fn parse(&self) -> Result<i32, CalendarError> {
        Ok(Arg::parse(Field::Year, &self.year)?.value())
    }
}

impl YearMonthArgs {
    pub fn parse(&self) -> Result<(i32, i32), CalendarError> {
        let year = Arg::parse(Field::Year, &self.year)?;
        let month = Arg::parse(Field::Month, &self.month)?;
        Ok((year.value(), month.value()))
    }
}

impl DateArgs {
    pub fn parse(&self) -> Result<(i32, i32, i32), CalendarError> {
        let year = Arg::parse(Field::Year, &self.year)?;
        let month = Arg::parse(Field::Month, &self.month)?;
        let day = Arg::parse(Field::Day, &self.day)?;
        Ok((year.value(), month.value(), day.value()))
    }
}
