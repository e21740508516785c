use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::HolidayConfig;
use crate::consts::{DAYS_IN_MONTH, DAYS_IN_WEEK, DECEMBER};
use crate::holidays::{BrazilHolidays, Holiday, HolidayTable};
use crate::types::{self, DateError, Day, HolidayDays, Month};
use crate::validate;
use crate::weekday::WeekdayLabel;
use crate::{CalendarError, ComputeFailure, Operation};

/// Calendar queries backed by a holiday table.
///
/// Every operation validates its arguments first, then computes. Failures
/// past validation are reported as [`CalendarError::Computation`].
#[derive(Debug, Clone, Default)]
pub struct BrazilCalendar<T = BrazilHolidays> {
    table: T,
}

impl BrazilCalendar {
    /// Calendar over the national holiday table.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: HolidayConfig) -> Self {
        Self {
            table: BrazilHolidays::with_config(config),
        }
    }
}

impl<T: HolidayTable> BrazilCalendar<T> {
    pub const fn with_table(table: T) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Number of days in the month.
    ///
    /// # Errors
    /// `OutOfRange` for a month outside `1..=12`; `Computation` for an
    /// unsupported year.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn last_day_of_month(&self, year: i32, month: i32) -> Result<u8, CalendarError> {
        let (year, month) = validate::year_month(year, month)?;
        let (_, last) =
            types::month_bounds(year, month).map_err(|e| fail(Operation::LastDayOfMonth, e))?;
        let day = day_of(last);
        debug!(day, "last day of month");
        Ok(day)
    }

    /// Last Monday..=Friday of the month. Holidays are not skipped.
    ///
    /// # Errors
    /// Same as [`BrazilCalendar::last_day_of_month`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn last_business_day_of_month(&self, year: i32, month: i32) -> Result<u8, CalendarError> {
        let (year, month) = validate::year_month(year, month)?;
        let day = types::last_business_day(year, month)
            .map_err(|e| fail(Operation::LastBusinessDayOfMonth, e))?;
        debug!(day, "last business day of month");
        Ok(day)
    }

    /// Monday-first week rows of the month, 0 outside the month.
    ///
    /// # Errors
    /// Same as [`BrazilCalendar::last_day_of_month`].
    pub fn month_calendar(
        &self,
        year: i32,
        month: i32,
    ) -> Result<Vec<[u8; DAYS_IN_WEEK]>, CalendarError> {
        let (year, month) = validate::year_month(year, month)?;
        types::month_calendar(year, month).map_err(|e| fail(Operation::MonthCalendar, e))
    }

    /// Holiday dates of the year, in the order the table yields them.
    ///
    /// # Errors
    /// `Computation` for an unsupported year or a failing table.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
        Ok(self
            .holidays_in_year_named(year)?
            .into_iter()
            .map(|h| h.date)
            .collect())
    }

    /// Like [`BrazilCalendar::holidays_in_year`], keeping the names.
    ///
    /// # Errors
    /// Same as [`BrazilCalendar::holidays_in_year`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn holidays_in_year_named(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        self.year_holidays(year)
            .map_err(|e| fail(Operation::HolidaysInYear, e))
            .inspect(|holidays| debug!(count = holidays.len(), "holidays in year"))
    }

    /// Day numbers of the month's holidays, or [`HolidayDays::Empty`].
    ///
    /// # Errors
    /// `OutOfRange` for a month outside `1..=12`; `Computation` for an
    /// unsupported year or a failing table.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn holiday_days_in_month(&self, year: i32, month: i32) -> Result<HolidayDays, CalendarError> {
        let (year, month) = validate::year_month(year, month)?;
        let days = self
            .month_holidays(year, month)
            .map_err(|e| fail(Operation::HolidayDaysInMonth, e))?;
        debug!(?days, "holiday days in month");
        Ok(days)
    }

    /// Abbreviated weekday name of the date.
    ///
    /// # Errors
    /// `OutOfRange` for a day outside `1..=31` or a month outside `1..=12`;
    /// `Computation` when the date does not exist (e.g. April 31).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn weekday_name(&self, year: i32, month: i32, day: i32) -> Result<WeekdayLabel, CalendarError> {
        let (year, month, day) = validate::year_month_day(year, month, day)?;
        let date =
            types::civil_date(year, month, day).map_err(|e| fail(Operation::WeekdayName, e))?;
        let label = WeekdayLabel::from(date.weekday());
        debug!(%label, "weekday name");
        Ok(label)
    }

    /// Whether the date is a holiday.
    ///
    /// # Errors
    /// Same as [`BrazilCalendar::weekday_name`], plus `Computation` for a
    /// failing table.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn is_holiday(&self, year: i32, month: i32, day: i32) -> Result<bool, CalendarError> {
        let (year, month, day) = validate::year_month_day(year, month, day)?;
        let holiday = self
            .date_is_holiday(year, month, day)
            .map_err(|e| fail(Operation::IsHoliday, e))?;
        debug!(holiday, "is holiday");
        Ok(holiday)
    }

    fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>, ComputeFailure> {
        let start = types::civil_date(year, Month::JANUARY, Day::FIRST)?;
        let last = DAYS_IN_MONTH[DECEMBER as usize];
        let end = NaiveDate::from_ymd_opt(year, u32::from(DECEMBER), u32::from(last)).ok_or(
            DateError::InvalidDate {
                year,
                month: DECEMBER,
                day: last,
            },
        )?;
        Ok(self.table.holidays_in_range(start, end)?)
    }

    fn month_holidays(&self, year: i32, month: Month) -> Result<HolidayDays, ComputeFailure> {
        let (start, end) = types::month_bounds(year, month)?;
        let days = self
            .table
            .holidays_in_range(start, end)?
            .into_iter()
            .map(|h| day_of(h.date))
            .collect();
        Ok(HolidayDays::from_days(days))
    }

    fn date_is_holiday(&self, year: i32, month: Month, day: Day) -> Result<bool, ComputeFailure> {
        types::civil_date(year, month, day)?;
        Ok(self.month_holidays(year, month)?.contains(day.get()))
    }
}

fn fail(operation: Operation, cause: impl Into<ComputeFailure>) -> CalendarError {
    let source = cause.into();
    debug!(%operation, error = %source, "calendar computation failed");
    CalendarError::Computation { operation, source }
}

#[allow(clippy::cast_possible_truncation)]
fn day_of(date: NaiveDate) -> u8 {
    // day() is always 1..=31
    date.day() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn cal() -> BrazilCalendar {
        BrazilCalendar::new()
    }

    #[test]
    fn test_last_day_of_month() {
        let cal = cal();
        assert_eq!(cal.last_day_of_month(2021, 2).unwrap(), 28);
        assert_eq!(cal.last_day_of_month(2020, 2).unwrap(), 29);
        assert_eq!(cal.last_day_of_month(2021, 4).unwrap(), 30);
        assert_eq!(cal.last_day_of_month(2021, 12).unwrap(), 31);
    }

    #[test]
    fn test_last_day_of_month_errors() {
        let cal = cal();
        for month in [0, 13, -1] {
            let err = cal.last_day_of_month(2021, month).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "month {month}");
        }

        let err = cal.last_day_of_month(0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ComputationError);
        assert_eq!(
            err,
            CalendarError::Computation {
                operation: Operation::LastDayOfMonth,
                source: ComputeFailure::Date(DateError::YearOutOfRange(0)),
            }
        );
    }

    #[test]
    fn test_last_business_day_of_month() {
        let cal = cal();
        assert_eq!(cal.last_business_day_of_month(2021, 5).unwrap(), 31);
        assert_eq!(cal.last_business_day_of_month(2021, 1).unwrap(), 29);
        assert_eq!(cal.last_business_day_of_month(2021, 7).unwrap(), 30);
        assert!(cal.last_business_day_of_month(2021, 13).is_err());
    }

    #[test]
    fn test_month_calendar() {
        let rows = cal().month_calendar(2021, 2).unwrap();
        assert_eq!(rows.first(), Some(&[1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_holidays_in_year() {
        let cal = cal();
        let holidays = cal.holidays_in_year(2021).unwrap();
        let new_year = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
        assert!(holidays.contains(&new_year));
        assert!(holidays.contains(&christmas));
        assert!(holidays.iter().all(|d| d.year() == 2021));

        let named = cal.holidays_in_year_named(2021).unwrap();
        assert_eq!(named.len(), holidays.len());
        assert_eq!(named[0].name, "Confraternização Universal");
    }

    #[test]
    fn test_holidays_in_year_unsupported_year() {
        let err = cal().holidays_in_year(-1).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Computation {
                operation: Operation::HolidaysInYear,
                ..
            }
        ));
    }

    #[test]
    fn test_holiday_days_in_month() {
        let cal = cal();
        let april = cal.holiday_days_in_month(2021, 4).unwrap();
        assert_eq!(april, HolidayDays::Days(vec![2, 21]));
        assert!(april.contains(21));

        assert_eq!(cal.holiday_days_in_month(2021, 8).unwrap(), HolidayDays::Empty);
        assert_eq!(
            cal.holiday_days_in_month(2021, 6).unwrap(),
            HolidayDays::Days(vec![3])
        );

        let national_only = BrazilCalendar::with_config(HolidayConfig {
            include_optional: false,
            extra: Vec::new(),
        });
        assert_eq!(
            national_only.holiday_days_in_month(2021, 6).unwrap(),
            HolidayDays::Empty
        );
    }

    #[test]
    fn test_weekday_name() {
        let cal = cal();
        assert_eq!(cal.weekday_name(1974, 5, 7).unwrap(), WeekdayLabel::Ter);
        assert_eq!(cal.weekday_name(2021, 5, 31).unwrap(), WeekdayLabel::Seg);
        assert_eq!(cal.weekday_name(2021, 8, 1).unwrap(), WeekdayLabel::Dom);
    }

    #[test]
    fn test_weekday_name_invalid_date() {
        let err = cal().weekday_name(2021, 4, 31).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ComputationError);
        assert_eq!(
            err,
            CalendarError::Computation {
                operation: Operation::WeekdayName,
                source: ComputeFailure::Date(DateError::InvalidDate {
                    year: 2021,
                    month: 4,
                    day: 31
                }),
            }
        );

        let err = cal().weekday_name(2021, 4, 32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_is_holiday() {
        let cal = cal();
        assert!(cal.is_holiday(2021, 4, 21).unwrap());
        assert!(!cal.is_holiday(2021, 4, 22).unwrap());
        assert!(!cal.is_holiday(2021, 8, 10).unwrap());
        assert!(cal.is_holiday(2021, 2, 16).unwrap());
        assert!(cal.is_holiday(2024, 11, 20).unwrap());

        let err = cal.is_holiday(2021, 2, 30).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Computation {
                operation: Operation::IsHoliday,
                ..
            }
        ));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let cal = cal();
        assert_eq!(
            cal.holidays_in_year(2022).unwrap(),
            cal.holidays_in_year(2022).unwrap()
        );
        assert_eq!(
            cal.holiday_days_in_month(2022, 11).unwrap(),
            cal.holiday_days_in_month(2022, 11).unwrap()
        );
        assert_eq!(
            cal.weekday_name(2022, 11, 2).unwrap(),
            cal.weekday_name(2022, 11, 2).unwrap()
        );
    }
}
