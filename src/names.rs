//! Weekday and month names for parsing and display.
//!
//! A [`NameTable`] is immutable once built and is passed explicitly to the
//! operations that need it. The English table is built once per process and
//! shared; other locales are constructed by the caller, directly or through
//! serde from configuration data.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::DISPLAY_SEPARATOR;
use crate::{DateError, Month, SerialDate, Weekday};

const SHORT_NAME_LEN: usize = 3;

static ENGLISH: LazyLock<NameTable> = LazyLock::new(|| {
    let weekdays = Weekday::ALL.map(|w| w.to_string());
    let months = Month::ALL.map(|m| m.to_string());
    NameTable {
        short_weekdays: weekdays.clone().map(abbreviate),
        short_months: months.clone().map(abbreviate),
        weekdays,
        months,
    }
});

fn abbreviate(name: String) -> String {
    name.chars().take(SHORT_NAME_LEN).collect()
}

/// Full and abbreviated names for the seven weekdays (Sunday first) and twelve months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNameTable")]
pub struct NameTable {
    weekdays:       [String; 7],
    short_weekdays: [String; 7],
    months:         [String; 12],
    short_months:   [String; 12],
}

#[derive(Deserialize)]
struct RawNameTable {
    weekdays:       [String; 7],
    short_weekdays: [String; 7],
    months:         [String; 12],
    short_months:   [String; 12],
}

impl TryFrom<RawNameTable> for NameTable {
    type Error = DateError;

    fn try_from(raw: RawNameTable) -> Result<Self, Self::Error> {
        Self::new(raw.weekdays, raw.short_weekdays, raw.months, raw.short_months)
    }
}

impl NameTable {
    /// Builds a table for a custom locale.
    ///
    /// Arrays are in ordinal order: Sunday first for weekdays, January first for months.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNameTable` if any name is blank.
    pub fn new(
        weekdays: [String; 7],
        short_weekdays: [String; 7],
        months: [String; 12],
        short_months: [String; 12],
    ) -> Result<Self, DateError> {
        let groups: [(&str, &[String]); 4] = [
            ("weekday", &weekdays),
            ("short weekday", &short_weekdays),
            ("month", &months),
            ("short month", &short_months),
        ];
        for (kind, names) in groups {
            if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
                return Err(DateError::InvalidNameTable(format!(
                    "{kind} name {} is blank",
                    pos + 1
                )));
            }
        }

        Ok(Self {
            weekdays,
            short_weekdays,
            months,
            short_months,
        })
    }

    /// The shared English table
    pub fn english() -> &'static Self {
        &ENGLISH
    }

    /// Parses a weekday from its full or abbreviated name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if no weekday matches.
    pub fn parse_weekday(&self, s: &str) -> Result<Weekday, DateError> {
        find_name(s, &self.weekdays, &self.short_weekdays)
            .and_then(|i| Weekday::ALL.get(i).copied())
            .ok_or_else(|| unrecognized("weekday", s))
    }

    /// Parses a month from its full or abbreviated name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if no month matches.
    pub fn parse_month(&self, s: &str) -> Result<Month, DateError> {
        find_name(s, &self.months, &self.short_months)
            .and_then(|i| Month::ALL.get(i).copied())
            .ok_or_else(|| unrecognized("month", s))
    }

    pub fn weekday_name(&self, weekday: Weekday, short: bool) -> &str {
        let index = usize::from(weekday.ordinal()) - 1;
        if short { &self.short_weekdays[index] } else { &self.weekdays[index] }
    }

    pub fn month_name(&self, month: Month, short: bool) -> &str {
        let index = usize::from(month.ordinal()) - 1;
        if short { &self.short_months[index] } else { &self.months[index] }
    }

    /// All month names, January first
    pub const fn month_names(&self, short: bool) -> &[String; 12] {
        if short { &self.short_months } else { &self.months }
    }

    /// Formats `date` as `day-Month-year` with this table's full month name, e.g. `9-November-2001`.
    pub fn format(&self, date: &SerialDate) -> String {
        format!(
            "{}{DISPLAY_SEPARATOR}{}{DISPLAY_SEPARATOR}{}",
            date.day_of_month(),
            self.month_name(date.month_constant(), false),
            date.year()
        )
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::english().clone()
    }
}

fn find_name(s: &str, full: &[String], short: &[String]) -> Option<usize> {
    let needle = s.trim().to_lowercase();
    full.iter()
        .zip(short)
        .position(|(f, a)| f.to_lowercase() == needle || a.to_lowercase() == needle)
}

fn unrecognized(kind: &'static str, s: &str) -> DateError {
    trace!(kind, name = s, "unrecognized name");
    DateError::UnrecognizedName {
        kind,
        name: s.to_owned(),
    }
}
