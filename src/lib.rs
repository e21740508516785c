mod calendar;
mod config;
mod consts;
mod holidays;
mod prelude;
mod types;
pub mod validate;
mod weekday;

pub use calendar::BrazilCalendar;
pub use config::{ConfigError, ExtraHoliday, HolidayConfig};
pub use consts::*;
pub use holidays::{BrazilHolidays, Holiday, HolidayTable, TableError, easter_sunday};
pub use types::{DateError, Day, HolidayDays, Month, days_in_month, is_leap_year};
pub use validate::{Arg, Field};
pub use weekday::{WEEKDAY_LABELS, WeekdayLabel};

pub use chrono::NaiveDate;

use crate::prelude::*;

/// Errors returned by the calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A raw argument is not an integer.
    #[error("O {field} deve ser um nº inteiro (recebido: {value:?})")]
    InvalidArgumentType { field: Field, value: String },

    /// An argument is outside its declared range.
    #[error("O {field} deve estar entre {min} e {max} (recebido: {value})")]
    OutOfRange {
        field: Field,
        value: i32,
        min: u8,
        max: u8,
    },

    /// Arguments were valid but the computation failed.
    #[error("Falha ao {operation}. Erro: {source}")]
    Computation {
        operation: Operation,
        source: ComputeFailure,
    },
}

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    #[display(fmt = "InvalidArgument")]
    InvalidArgument,
    #[display(fmt = "ComputationError")]
    ComputationError,
}

/// The operation a computation failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    #[display(fmt = "obter último dia do mês")]
    LastDayOfMonth,
    #[display(fmt = "obter último dia útil do mês")]
    LastBusinessDayOfMonth,
    #[display(fmt = "montar calendário do mês")]
    MonthCalendar,
    #[display(fmt = "obter lista de feriados")]
    HolidaysInYear,
    #[display(fmt = "obter dias de feriado do mês")]
    HolidayDaysInMonth,
    #[display(fmt = "obter nome do dia da semana")]
    WeekdayName,
    #[display(fmt = "verificar se dia é um feriado")]
    IsHoliday,
}

/// Underlying cause of [`CalendarError::Computation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputeFailure {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Table(#[from] TableError),
}

impl CalendarError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgumentType { .. } | Self::OutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::Computation { .. } => ErrorKind::ComputationError,
        }
    }

    /// The offending argument, for validation errors.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidArgumentType { field, .. } | Self::OutOfRange { field, .. } => {
                Some(*field)
            }
            Self::Computation { .. } => None,
        }
    }

    /// The failing operation, for computation errors.
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Computation { operation, .. } => Some(*operation),
            Self::InvalidArgumentType { .. } | Self::OutOfRange { .. } => None,
        }
    }
}

/// Number of days in the month. See [`BrazilCalendar::last_day_of_month`].
pub fn last_day_of_month(year: i32, month: i32) -> Result<u8, CalendarError> {
    BrazilCalendar::new().last_day_of_month(year, month)
}

/// Last Monday..=Friday of the month.
/// See [`BrazilCalendar::last_business_day_of_month`].
pub fn last_business_day_of_month(year: i32, month: i32) -> Result<u8, CalendarError> {
    BrazilCalendar::new().last_business_day_of_month(year, month)
}

/// Monday-first week rows of the month. See [`BrazilCalendar::month_calendar`].
pub fn month_calendar(year: i32, month: i32) -> Result<Vec<[u8; DAYS_IN_WEEK]>, CalendarError> {
    BrazilCalendar::new().month_calendar(year, month)
}

/// National holiday dates of the year. See [`BrazilCalendar::holidays_in_year`].
pub fn holidays_in_year(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    BrazilCalendar::new().holidays_in_year(year)
}

/// National holidays of the year with their names.
pub fn holidays_in_year_named(year: i32) -> Result<Vec<Holiday>, CalendarError> {
    BrazilCalendar::new().holidays_in_year_named(year)
}

/// Holiday days of the month. See [`BrazilCalendar::holiday_days_in_month`].
pub fn holiday_days_in_month(year: i32, month: i32) -> Result<HolidayDays, CalendarError> {
    BrazilCalendar::new().holiday_days_in_month(year, month)
}

/// Abbreviated weekday name. See [`BrazilCalendar::weekday_name`].
pub fn weekday_name(year: i32, month: i32, day: i32) -> Result<WeekdayLabel, CalendarError> {
    BrazilCalendar::new().weekday_name(year, month, day)
}

/// Whether the date is a national holiday. See [`BrazilCalendar::is_holiday`].
pub fn is_holiday(year: i32, month: i32, day: i32) -> Result<bool, CalendarError> {
    BrazilCalendar::new().is_holiday(year, month, day)
}
