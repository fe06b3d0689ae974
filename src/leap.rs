//! Leap-year arithmetic for the proleptic Gregorian calendar.
//!
//! These functions accept any year; the rest of the crate only calls them for
//! years in `MIN_YEAR..=MAX_YEAR`.

use crate::Month;
use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of leap years in `1900..=year`.
///
/// 1900 is not a leap year, so the count is 0 up to and including 1903.
/// Truncating division keeps years before 1900 at 0 as well.
pub const fn leap_year_count(year: i32) -> i32 {
    let leap4 = (year - 1896) / LEAP_YEAR_CYCLE;
    let leap100 = (year - 1800) / CENTURY_CYCLE;
    let leap400 = (year - 1600) / GREGORIAN_CYCLE;
    leap4 - leap100 + leap400
}

/// Last day of `month` in `year`, accounting for 29 February.
pub const fn last_day_of_month(month: Month, year: i32) -> u8 {
    match month {
        Month::February if is_leap_year(year) => month.last_day() + 1,
        _ => month.last_day(),
    }
}
