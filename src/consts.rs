/// Earliest supported year (inclusive)
pub const MIN_YEAR: i32 = 1900;

/// Latest supported year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Serial number of 1 January 1900
pub const MIN_SERIAL: i32 = 2;

/// Serial number of 31 December 9999
pub const MAX_SERIAL: i32 = 2_958_465;

/// Days in a non-leap year
pub const DAYS_IN_YEAR: i32 = 365;

/// Days in a week
pub const DAYS_IN_WEEK: i32 = 7;

/// Months in a year
pub const MONTHS_IN_YEAR: i32 = 12;

/// Months in a quarter
pub const MONTHS_IN_QUARTER: u8 = 3;

/// Length of each month in a common year, indexed by month ordinal.
/// February gains its 29th day in `last_day_of_month`.
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed in a non-leap year before the first of each month (index 0 is unused)
pub const DAYS_BEFORE_MONTH: [i32; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;

/// Separator used by the `day-Month-year` display layout
pub const DISPLAY_SEPARATOR: char = '-';
