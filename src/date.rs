//! The serial-number date value.
//!
//! A [`SerialDate`] is a single calendar day identified by its serial number,
//! counted so that 1 January 1900 is serial 2 and consecutive days have
//! consecutive serials. The supported range is 1900-01-01 (serial 2) to
//! 9999-12-31 (serial 2 958 465).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_IN_GREGORIAN_CYCLE, DAYS_IN_WEEK, DAYS_IN_YEAR, GREGORIAN_CYCLE, MAX_SERIAL, MAX_YEAR,
    MIN_SERIAL, MIN_YEAR, MONTHS_IN_YEAR,
};
use crate::leap::{is_leap_year, last_day_of_month, leap_year_count};
use crate::{DateError, Month, Weekday, prelude::*};

/// A calendar day with no time-of-day or timezone.
///
/// Equality, ordering and hashing use the serial number only; the optional
/// description is annotation and never affects them.
#[derive(Debug, Clone, Display, Serialize, Deserialize)]
#[display(fmt = "{}-{}-{}", day, month, year)]
#[serde(try_from = "SerialDateRepr", into = "SerialDateRepr")]
pub struct SerialDate {
    serial:      i32,
    day:         u8,
    month:       Month,
    year:        u16,
    description: Option<String>,
}

/// How to move a date onto a target weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayAdjustment {
    /// Latest matching day strictly before the date
    Preceding,
    /// Closest matching day, the date itself included
    Nearest,
    /// Earliest matching day strictly after the date
    Following,
}

/// Persisted form: the serial number plus the optional description.
#[derive(Serialize, Deserialize)]
struct SerialDateRepr {
    serial:      i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SerialDate {
    /// Creates a date from day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the year is outside `MIN_YEAR..=MAX_YEAR`
    /// or the day does not exist in that month.
    pub fn new(day: u8, month: Month, year: u16) -> Result<Self, DateError> {
        let y = i32::from(year);
        if !(MIN_YEAR..=MAX_YEAR).contains(&y) || day == 0 || day > last_day_of_month(month, y) {
            return Err(DateError::InvalidDate {
                day,
                month: month.ordinal(),
                year: y,
            });
        }

        Ok(Self {
            serial: serial_from_triple(day, month, y),
            day,
            month,
            year,
            description: None,
        })
    }

    /// Creates a date from day, month ordinal (1-12) and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for a bad month and `DateError::InvalidDate`
    /// for a bad day or year.
    pub fn from_ymd(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        Self::new(day, Month::from_ordinal(month)?, year)
    }

    /// Creates a date from a serial number the caller knows to be in
    /// `MIN_SERIAL..=MAX_SERIAL`.
    ///
    /// Use [`SerialDate::try_from_serial`] for untrusted input.
    pub fn from_serial(serial: i32) -> Self {
        debug_assert!(
            (MIN_SERIAL..=MAX_SERIAL).contains(&serial),
            "serial {serial} outside supported range"
        );
        let (day, month, year) = triple_from_serial(serial);
        Self {
            serial,
            day,
            month,
            year,
            description: None,
        }
    }

    /// Creates a date from a serial number, checking the supported range.
    ///
    /// # Errors
    /// Returns `DateError::SerialOutOfRange` outside `MIN_SERIAL..=MAX_SERIAL`.
    pub fn try_from_serial(serial: i32) -> Result<Self, DateError> {
        checked_serial(i64::from(serial)).map(Self::from_serial)
    }

    /// Returns the serial number
    #[inline]
    pub const fn serial(&self) -> i32 {
        self.serial
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month ordinal (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.ordinal()
    }

    #[inline]
    pub const fn month_constant(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Returns the weekday ordinal (Sunday = 1 … Saturday = 7)
    pub const fn day_of_week(&self) -> u8 {
        // serial 2 (1 January 1900) is a Monday
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ordinal = ((self.serial + 6).rem_euclid(DAYS_IN_WEEK) + 1) as u8;
        ordinal
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[usize::from(self.day_of_week()) - 1]
    }

    /// Returns `(day, month, year, weekday)`
    pub fn to_triple(&self) -> (u8, Month, u16, Weekday) {
        (self.day, self.month, self.year, self.weekday())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn clear_description(&mut self) {
        self.description = None;
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }
}

// --- arithmetic ---

impl SerialDate {
    /// Moves by `days` calendar days (negative moves backwards).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` with the year the result would fall in if that
    /// year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn plus_days(&self, days: i32) -> Result<Self, DateError> {
        let serial = i64::from(self.serial) + i64::from(days);
        checked_serial(serial)
            .map_err(|_| DateError::year_out_of_range(year_of_serial(serial)))
            .inspect_err(|_| debug!(serial = self.serial, days, "day arithmetic left the supported range"))
            .map(Self::from_serial)
    }

    /// Moves by `months` calendar months, clamping the day to the target month's length.
    ///
    /// 31 May + 1 month is 30 June. Clamping happens on every call, so adding one month
    /// twice can land on an earlier day than adding two months at once.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the resulting year leaves the supported range.
    pub fn plus_months(&self, months: i32) -> Result<Self, DateError> {
        let months_in_year = i64::from(MONTHS_IN_YEAR);
        let total = months_in_year * i64::from(self.year) + i64::from(self.month()) + i64::from(months) - 1;
        let year = checked_year(total.div_euclid(months_in_year))
            .inspect_err(|_| debug!(serial = self.serial, months, "month arithmetic left the supported range"))?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = Month::from_ordinal((total.rem_euclid(months_in_year) + 1) as u8)?;
        self.clamped(month, year)
    }

    /// Moves by `years` calendar years, clamping 29 February to the 28th in non-leap years.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the resulting year leaves the supported range.
    pub fn plus_years(&self, years: i32) -> Result<Self, DateError> {
        let year = checked_year(i64::from(self.year) + i64::from(years))
            .inspect_err(|_| debug!(serial = self.serial, years, "year arithmetic left the supported range"))?;
        self.clamped(self.month, year)
    }

    /// Returns the last day of this date's month
    pub fn end_of_current_month(&self) -> Self {
        let y = i32::from(self.year);
        let last = last_day_of_month(self.month, y);
        Self::from_serial(serial_from_triple(last, self.month, y))
    }

    fn clamped(&self, month: Month, year: u16) -> Result<Self, DateError> {
        let day = self.day.min(last_day_of_month(month, i32::from(year)));
        Self::new(day, month, year)
    }
}

// --- weekday adjustment ---

impl SerialDate {
    /// Latest date strictly before this one that falls on `target`.
    ///
    /// On the same weekday this steps back a full week.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the start of the supported range.
    pub fn previous_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let (base, target) = self.weekday_pair(target);
        let offset = if base > target { target - base } else { -DAYS_IN_WEEK + (target - base) };
        self.plus_days(offset)
    }

    /// Earliest date strictly after this one that falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the end of the supported range.
    pub fn following_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let (base, target) = self.weekday_pair(target);
        let offset = if base >= target { DAYS_IN_WEEK + (target - base) } else { target - base };
        self.plus_days(offset)
    }

    /// Date at most three days away that is meant to fall on `target`.
    ///
    /// The offset is the negated distance between the two weekday ordinals, moved
    /// forward a week when it reaches four days back. When `target` comes no later
    /// than this date's weekday in the Sunday-first week the result is the closest
    /// `target`, and this date itself on the same weekday. When `target` comes
    /// later the direction is lost: from a Friday, the "nearest Saturday" is the
    /// Thursday before.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` at the edges of the supported range.
    pub fn nearest_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let (base, target) = self.weekday_pair(target);
        let mut offset = -(target - base).abs();
        if offset >= 4 {
            offset = DAYS_IN_WEEK - offset;
        }
        if offset <= -4 {
            offset += DAYS_IN_WEEK;
        }
        self.plus_days(offset)
    }

    /// [`previous_day_of_week`](Self::previous_day_of_week) with a weekday ordinal.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for an ordinal outside 1-7.
    pub fn previous_day_of_week_ordinal(&self, target: u8) -> Result<Self, DateError> {
        self.previous_day_of_week(Weekday::from_ordinal(target)?)
    }

    /// [`following_day_of_week`](Self::following_day_of_week) with a weekday ordinal.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for an ordinal outside 1-7.
    pub fn following_day_of_week_ordinal(&self, target: u8) -> Result<Self, DateError> {
        self.following_day_of_week(Weekday::from_ordinal(target)?)
    }

    /// [`nearest_day_of_week`](Self::nearest_day_of_week) with a weekday ordinal.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for an ordinal outside 1-7.
    pub fn nearest_day_of_week_ordinal(&self, target: u8) -> Result<Self, DateError> {
        self.nearest_day_of_week(Weekday::from_ordinal(target)?)
    }

    /// Moves onto `target` in the direction given by `adjustment`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` at the edges of the supported range.
    pub fn adjust_to(&self, target: Weekday, adjustment: WeekdayAdjustment) -> Result<Self, DateError> {
        match adjustment {
            WeekdayAdjustment::Preceding => self.previous_day_of_week(target),
            WeekdayAdjustment::Nearest => self.nearest_day_of_week(target),
            WeekdayAdjustment::Following => self.following_day_of_week(target),
        }
    }

    fn weekday_pair(&self, target: Weekday) -> (i32, i32) {
        (i32::from(self.day_of_week()), i32::from(target.ordinal()))
    }
}

// --- comparison ---

impl SerialDate {
    pub fn is_on(&self, other: &Self) -> bool {
        self.serial == other.serial
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.serial < other.serial
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.serial > other.serial
    }

    pub fn is_on_or_before(&self, other: &Self) -> bool {
        self.serial <= other.serial
    }

    pub fn is_on_or_after(&self, other: &Self) -> bool {
        self.serial >= other.serial
    }

    /// Signed number of days from this date to `other`
    pub const fn days_until(&self, other: &Self) -> i32 {
        other.serial - self.serial
    }
}

impl PartialEq for SerialDate {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for SerialDate {}

impl PartialOrd for SerialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SerialDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serial.cmp(&other.serial)
    }
}

impl Hash for SerialDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

impl TryFrom<i32> for SerialDate {
    type Error = DateError;

    fn try_from(serial: i32) -> Result<Self, Self::Error> {
        Self::try_from_serial(serial)
    }
}

impl From<&SerialDate> for i32 {
    fn from(date: &SerialDate) -> Self {
        date.serial
    }
}

impl TryFrom<SerialDateRepr> for SerialDate {
    type Error = DateError;

    fn try_from(repr: SerialDateRepr) -> Result<Self, Self::Error> {
        let mut date = Self::try_from_serial(repr.serial)?;
        date.description = repr.description;
        Ok(date)
    }
}

impl From<SerialDate> for SerialDateRepr {
    fn from(date: SerialDate) -> Self {
        Self {
            serial:      date.serial,
            description: date.description,
        }
    }
}

// --- serial conversion helpers ---

fn checked_serial(serial: i64) -> Result<i32, DateError> {
    i32::try_from(serial)
        .ok()
        .filter(|s| (MIN_SERIAL..=MAX_SERIAL).contains(s))
        .ok_or(DateError::serial_out_of_range(serial))
}

/// Proleptic Gregorian year of any serial, including those outside the supported range.
///
/// The calendar repeats every 400 years, so the serial is folded into the first
/// cycle after 1 January 1900 and the year shifted back out by whole cycles.
fn year_of_serial(serial: i64) -> i64 {
    let days = serial - i64::from(MIN_SERIAL);
    let cycles = days.div_euclid(DAYS_IN_GREGORIAN_CYCLE);
    #[allow(clippy::cast_possible_truncation)]
    let folded = (i64::from(MIN_SERIAL) + days.rem_euclid(DAYS_IN_GREGORIAN_CYCLE)) as i32;
    let (_, _, year) = triple_from_serial(folded);
    i64::from(year) + cycles * i64::from(GREGORIAN_CYCLE)
}

fn checked_year(year: i64) -> Result<u16, DateError> {
    i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .and_then(|y| u16::try_from(y).ok())
        .ok_or(DateError::year_out_of_range(year))
}

/// Days in `year` before the first of `month`.
fn days_before_month(month: Month, year: i32) -> i32 {
    let leap_day = i32::from(month > Month::February && is_leap_year(year));
    DAYS_BEFORE_MONTH[usize::from(month.ordinal())] + leap_day
}

fn serial_from_triple(day: u8, month: Month, year: i32) -> i32 {
    (year - MIN_YEAR) * DAYS_IN_YEAR + leap_year_count(year - 1) + days_before_month(month, year) + i32::from(day) + 1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn triple_from_serial(serial: i32) -> (u8, Month, u16) {
    let days = serial - MIN_SERIAL;
    // ignoring leap days overestimates the year; subtracting too many of them underestimates it
    let over = MIN_YEAR + days / DAYS_IN_YEAR;
    let mut year = MIN_YEAR + (days - leap_year_count(over)) / DAYS_IN_YEAR;
    while year < over && serial_from_triple(1, Month::January, year + 1) <= serial {
        year += 1;
    }

    let day_of_year = serial - serial_from_triple(1, Month::January, year);
    let month = Month::ALL
        .into_iter()
        .rev()
        .find(|&m| days_before_month(m, year) <= day_of_year)
        .unwrap_or(Month::January);
    let day = day_of_year - days_before_month(month, year) + 1;

    (day as u8, month, year as u16)
}
