//! Argument validation shared by every calendar operation.
//!
//! Typed callers pass `i32` values and only the range checks apply. Callers
//! holding raw text (command lines, form fields) go through [`Arg::parse`],
//! which reports non-integers as [`CalendarError::InvalidArgumentType`].

use crate::CalendarError;
use crate::prelude::*;
use crate::types::{Day, Month};

/// Which argument a value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "ANO")]
    Year,
    #[display(fmt = "MÊS")]
    Month,
    #[display(fmt = "DIA")]
    Day,
}

/// An integer argument tagged with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arg {
    field: Field,
    value: i32,
}

impl Arg {
    pub const fn year(value: i32) -> Self {
        Self {
            field: Field::Year,
            value,
        }
    }

    pub const fn month(value: i32) -> Self {
        Self {
            field: Field::Month,
            value,
        }
    }

    pub const fn day(value: i32) -> Self {
        Self {
            field: Field::Day,
            value,
        }
    }

    /// Parses raw text into a tagged integer. Surrounding whitespace is
    /// ignored; anything else that is not an `i32` is rejected.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgumentType` if `raw` is not an integer.
    pub fn parse(field: Field, raw: &str) -> Result<Self, CalendarError> {
        raw.trim()
            .parse::<i32>()
            .map(|value| Self { field, value })
            .map_err(|_| CalendarError::InvalidArgumentType {
                field,
                value: raw.to_owned(),
            })
    }

    pub const fn field(self) -> Field {
        self.field
    }

    pub const fn value(self) -> i32 {
        self.value
    }

    /// Applies the static range check for this argument's role.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for a month outside `1..=12` or a
    /// day outside `1..=31`. Years are never range-checked here.
    pub fn check(self) -> Result<Self, CalendarError> {
        match self.field {
            Field::Year => {}
            Field::Month => {
                Month::new(self.value)?;
            }
            Field::Day => {
                Day::new(self.value)?;
            }
        }
        Ok(self)
    }
}

/// Checks every argument in order, stopping at the first failure.
pub fn validate(args: &[Arg]) -> Result<(), CalendarError> {
    args.iter().try_for_each(|arg| arg.check().map(drop))
}

/// Validation for `(year, month)` operations.
pub fn year_month(year: i32, month: i32) -> Result<(i32, Month), CalendarError> {
    Ok((year, Month::new(month)?))
}

/// Validation for `(year, month, day)` operations. The day is checked
/// before the month.
pub fn year_month_day(year: i32, month: i32, day: i32) -> Result<(i32, Month, Day), CalendarError> {
    let day = Day::new(day)?;
    let month = Month::new(month)?;
    Ok((year, month, day))
}
