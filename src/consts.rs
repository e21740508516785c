/// Minimum supported year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum supported year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// First month of the year
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Static upper bound for a day of month, regardless of the month
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a week row of the month calendar
pub const DAYS_IN_WEEK: usize = 7;
/// Monday..=Friday occupy the first five slots of a week row
pub const WORKDAYS_IN_WEEK: usize = 5;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// First year Nossa Senhora Aparecida is a national holiday (Lei 6.802/1980)
pub const APARECIDA_SINCE: i32 = 1980;
/// First year Consciência Negra is a national holiday (Lei 14.759/2023)
pub const CONSCIENCIA_NEGRA_SINCE: i32 = 2024;
