use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR,
    WORKDAYS_IN_WEEK,
};
use crate::CalendarError;
use crate::validate::Field;
use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Failure to build a concrete calendar date from validated components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported proleptic Gregorian range.
    #[error("ano {0} fora do intervalo suportado ({min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    /// The day does not exist in the given month (e.g. April 31).
    #[error("dia {day} fora do intervalo para {year:04}-{month:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// The last week row of the month has no Monday..=Friday slot.
    #[error("nenhum dia útil na última semana de {year:04}-{month:02}")]
    NoBusinessDay { year: i32, month: u8 },
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it lies in `1..=12`
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for any other value.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|m| (MIN_MONTH..=MAX_MONTH).contains(m))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::OutOfRange {
                field: Field::Month,
                value,
                min: MIN_MONTH,
                max: MAX_MONTH,
            })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i32> for Month {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month in the static range `1..=31`.
///
/// Whether the day exists in a particular month is only known once a
/// concrete date is built with [`civil_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month.
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it lies in `1..=31`
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for any other value.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|d| (MIN_DAY..=MAX_DAY).contains(d))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::OutOfRange {
                field: Field::Day,
                value,
                min: MIN_DAY,
                max: MAX_DAY,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i32> for Day {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holiday days of a single month.
///
/// Serializes as the integer `0` when the month has no holidays and as an
/// array of day numbers otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HolidayDays {
    /// No holiday falls in the month.
    #[default]
    Empty,
    /// Day-of-month of each holiday, in table order. Never empty.
    Days(Vec<u8>),
}

impl HolidayDays {
    /// Integer that stands for "no holidays" in the serialized form.
    pub const SENTINEL: u8 = 0;

    /// Builds the value from a list of days, collapsing an empty list.
    pub fn from_days(days: Vec<u8>) -> Self {
        if days.is_empty() {
            Self::Empty
        } else {
            Self::Days(days)
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn contains(&self, day: u8) -> bool {
        self.days().contains(&day)
    }

    /// The holiday days; an empty slice for [`HolidayDays::Empty`].
    pub fn days(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Days(days) => days,
        }
    }
}

impl From<HolidayDays> for Vec<u8> {
    fn from(value: HolidayDays) -> Self {
        match value {
            HolidayDays::Empty => Self::new(),
            HolidayDays::Days(days) => days,
        }
    }
}

impl Serialize for HolidayDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_u8(Self::SENTINEL),
            Self::Days(days) => days.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for HolidayDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(u8),
            Days(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(Self::SENTINEL) => Ok(Self::Empty),
            Repr::Sentinel(other) => Err(de::Error::custom(format!(
                "expected {} or a list of days, found {other}",
                Self::SENTINEL
            ))),
            Repr::Days(days) => Ok(Self::from_days(days)),
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Longest the month can be in any year (February counts 29).
pub const fn max_days_in_month(month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Builds a concrete date, rejecting years outside `MIN_YEAR..=MAX_YEAR`
/// and days past the end of the month.
pub fn civil_date(year: i32, month: Month, day: Day) -> Result<NaiveDate, DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    NaiveDate::from_ymd_opt(year, u32::from(month.get()), u32::from(day.get())).ok_or(
        DateError::InvalidDate {
            year,
            month: month.get(),
            day: day.get(),
        },
    )
}

/// First and last date of the month (both inclusive).
pub fn month_bounds(year: i32, month: Month) -> Result<(NaiveDate, NaiveDate), DateError> {
    let first = civil_date(year, month, Day::FIRST)?;
    let last_day = days_in_month(year, month);
    let last = first
        .with_day(u32::from(last_day))
        .ok_or(DateError::InvalidDate {
            year,
            month: month.get(),
            day: last_day,
        })?;
    Ok((first, last))
}

/// Monday-first week rows of the month; slots outside the month hold 0.
pub fn month_calendar(year: i32, month: Month) -> Result<Vec<[u8; DAYS_IN_WEEK]>, DateError> {
    let first = civil_date(year, month, Day::FIRST)?;
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut row = [0u8; DAYS_IN_WEEK];
    let mut rows = Vec::with_capacity(6);

    for day in MIN_DAY..=days_in_month(year, month) {
        row[slot] = day;
        slot += 1;
        if slot == DAYS_IN_WEEK {
            rows.push(row);
            row = [0; DAYS_IN_WEEK];
            slot = 0;
        }
    }
    if slot != 0 {
        rows.push(row);
    }
    Ok(rows)
}

/// Largest Monday..=Friday day in the final week row of the month.
pub fn last_business_day(year: i32, month: Month) -> Result<u8, DateError> {
    month_calendar(year, month)?
        .last()
        .and_then(|week| {
            week[..WORKDAYS_IN_WEEK]
                .iter()
                .copied()
                .filter(|&d| d != 0)
                .max()
        })
        .ok_or(DateError::NoBusinessDay {
            year,
            month: month.get(),
        })
}
