//! Holiday tables.
//!
//! [`HolidayTable`] is the seam the calendar queries; [`BrazilHolidays`] is
//! the built-in national table. Fixed dates come straight from the calendar,
//! moveable feasts are offsets from Easter Sunday.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::HolidayConfig;
use crate::consts::{APARECIDA_SINCE, CONSCIENCIA_NEGRA_SINCE};

/// A dated, named holiday.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("intervalo inválido: início ({start}) posterior ao fim ({end})")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("tabela de feriados indisponível: {0}")]
    Unavailable(String),
}

/// Source of holidays for an inclusive date range.
pub trait HolidayTable {
    /// Holidays with `start <= date <= end`.
    ///
    /// # Errors
    /// Implementations return `TableError` when the range cannot be served.
    fn holidays_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Holiday>, TableError>;
}

impl<T: HolidayTable + ?Sized> HolidayTable for &T {
    fn holidays_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Holiday>, TableError> {
        (**self).holidays_in_range(start, end)
    }
}

/// Brazilian national holidays.
///
/// * Confraternização Universal (Jan 1)
/// * Carnaval, Monday and Tuesday (Easter - 48, Easter - 47), optional
/// * Sexta-feira Santa (Easter - 2)
/// * Tiradentes (Apr 21)
/// * Dia do Trabalhador (May 1)
/// * Corpus Christi (Easter + 60), optional
/// * Independência do Brasil (Sep 7)
/// * Nossa Senhora Aparecida (Oct 12), from 1980
/// * Finados (Nov 2)
/// * Proclamação da República (Nov 15)
/// * Dia Nacional de Zumbi e da Consciência Negra (Nov 20), from 2024
/// * Natal (Dec 25)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrazilHolidays {
    config: HolidayConfig,
}

const FIXED: [(u32, u32, &str); 7] = [
    (1, 1, "Confraternização Universal"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalhador"),
    (9, 7, "Independência do Brasil"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

/// Offsets from Easter Sunday, with whether they belong to the optional set.
const MOVEABLE: [(i64, &str, bool); 4] = [
    (-48, "Carnaval", true),
    (-47, "Carnaval", true),
    (-2, "Sexta-feira Santa", false),
    (60, "Corpus Christi", true),
];

impl BrazilHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: HolidayConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Every holiday of `year`, ascending by date. Two observances on the
    /// same date are merged into one entry with both names.
    pub fn for_year(&self, year: i32) -> Vec<Holiday> {
        let mut days: BTreeMap<NaiveDate, String> = BTreeMap::new();
        let mut add = |date: Option<NaiveDate>, name: &str| {
            if let Some(date) = date {
                days.entry(date)
                    .and_modify(|existing| {
                        existing.push_str("; ");
                        existing.push_str(name);
                    })
                    .or_insert_with(|| name.to_owned());
            }
        };

        for (month, day, name) in FIXED {
            add(NaiveDate::from_ymd_opt(year, month, day), name);
        }
        if year >= APARECIDA_SINCE {
            add(NaiveDate::from_ymd_opt(year, 10, 12), "Nossa Senhora Aparecida");
        }
        if year >= CONSCIENCIA_NEGRA_SINCE {
            add(
                NaiveDate::from_ymd_opt(year, 11, 20),
                "Dia Nacional de Zumbi e da Consciência Negra",
            );
        }

        if let Some(easter) = easter_sunday(year) {
            for (offset, name, optional) in MOVEABLE {
                if optional && !self.config.include_optional {
                    continue;
                }
                add(shift(easter, offset), name);
            }
        }

        for extra in self.config.extra.iter().filter(|e| e.observed_in(year)) {
            // February 29 only exists in leap years
            add(
                NaiveDate::from_ymd_opt(year, u32::from(extra.month), u32::from(extra.day)),
                extra.name.as_str(),
            );
        }

        days.into_iter()
            .map(|(date, name)| Holiday { date, name })
            .collect()
    }
}

impl HolidayTable for BrazilHolidays {
    fn holidays_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Holiday>, TableError> {
        if start > end {
            return Err(TableError::InvertedRange { start, end });
        }
        let holidays = (start.year()..=end.year())
            .flat_map(|year| self.for_year(year))
            .filter(|h| (start..=end).contains(&h.date))
            .collect();
        Ok(holidays)
    }
}

fn shift(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}

/// Western (Gregorian) Easter Sunday, by the anonymous Gregorian algorithm.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month.try_into().ok()?, day.try_into().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
        holidays.iter().map(|h| h.date).collect()
    }

    #[test]
    fn test_easter_sunday() {
        let cases = [
            (2000, 4, 23),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
        ];
        for (y, m, d) in cases {
            assert_eq!(easter_sunday(y), Some(date(y, m, d)), "Easter {y}");
        }
    }

    #[test]
    fn test_2021_national_holidays() {
        let table = BrazilHolidays::new();
        let expected = vec![
            date(2021, 1, 1),
            date(2021, 2, 15),
            date(2021, 2, 16),
            date(2021, 4, 2),
            date(2021, 4, 21),
            date(2021, 5, 1),
            date(2021, 6, 3),
            date(2021, 9, 7),
            date(2021, 10, 12),
            date(2021, 11, 2),
            date(2021, 11, 15),
            date(2021, 12, 25),
        ];
        assert_eq!(dates(&table.for_year(2021)), expected);
    }

    #[test]
    fn test_without_optional_set() {
        let table = BrazilHolidays::with_config(HolidayConfig {
            include_optional: false,
            extra: Vec::new(),
        });
        let holidays = table.for_year(2021);
        assert_eq!(holidays.len(), 9);
        assert!(holidays.iter().all(|h| h.name != "Carnaval"));
        assert!(!dates(&holidays).contains(&date(2021, 6, 3)));
        assert!(dates(&holidays).contains(&date(2021, 4, 2)));
    }

    #[test]
    fn test_law_start_years() {
        let table = BrazilHolidays::new();
        assert!(!dates(&table.for_year(1979)).contains(&date(1979, 10, 12)));
        assert!(dates(&table.for_year(1980)).contains(&date(1980, 10, 12)));
        assert!(!dates(&table.for_year(2023)).contains(&date(2023, 11, 20)));
        assert!(dates(&table.for_year(2024)).contains(&date(2024, 11, 20)));
    }

    #[test]
    fn test_same_day_observances_merge() {
        let table = BrazilHolidays::with_config(HolidayConfig {
            include_optional: true,
            extra: vec![ExtraHoliday {
                month: 12,
                day: 25,
                name: "Festa local".to_owned(),
                since: None,
            }],
        });
        let holidays = table.for_year(2021);
        let christmas: Vec<_> = holidays
            .iter()
            .filter(|h| h.date == date(2021, 12, 25))
            .collect();
        assert_eq!(christmas.len(), 1);
        assert_eq!(christmas[0].name, "Natal; Festa local");
    }

    #[test]
    fn test_leap_day_extra_skipped_in_common_years() {
        let table = BrazilHolidays::with_config(HolidayConfig {
            include_optional: true,
            extra: vec![ExtraHoliday {
                month: 2,
                day: 29,
                name: "Bissexto".to_owned(),
                since: None,
            }],
        });
        assert!(dates(&table.for_year(2020)).contains(&date(2020, 2, 29)));
        assert_eq!(table.for_year(2021).len(), 12);
    }

    #[test]
    fn test_range_query() {
        let table = BrazilHolidays::new();
        let april = table
            .holidays_in_range(date(2021, 4, 1), date(2021, 4, 30))
            .unwrap();
        assert_eq!(dates(&april), vec![date(2021, 4, 2), date(2021, 4, 21)]);

        let span = table
            .holidays_in_range(date(2021, 12, 20), date(2022, 1, 5))
            .unwrap();
        assert_eq!(dates(&span), vec![date(2021, 12, 25), date(2022, 1, 1)]);

        let single = table
            .holidays_in_range(date(2021, 4, 21), date(2021, 4, 21))
            .unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].name, "Tiradentes");
    }

    #[test]
    fn test_inverted_range() {
        let table = BrazilHolidays::new();
        let result = table.holidays_in_range(date(2021, 5, 1), date(2021, 4, 1));
        assert_eq!(
            result,
            Err(TableError::InvertedRange {
                start: date(2021, 5, 1),
                end: date(2021, 4, 1)
            })
        );
    }
}
