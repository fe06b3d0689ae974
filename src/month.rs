use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_MONTH, MONTHS_IN_QUARTER};
use crate::{DateError, NameTable, prelude::*};

/// Month of the year, numbered 1-12 from January.
///
/// `Display` gives the English full name; locale names come from a [`NameTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Every month in ordinal order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up the month with the given ordinal (January = 1 … December = 12)
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if `n` is outside 1-12.
    pub const fn from_ordinal(n: u8) -> Result<Self, DateError> {
        match n {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(DateError::InvalidOrdinal {
                kind:  "month",
                value: n,
                max:   12,
            }),
        }
    }

    /// Returns the ordinal (January = 1 … December = 12)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the quarter (1-4) the month falls in
    pub const fn quarter(self) -> u8 {
        1 + (self.ordinal() - 1) / MONTHS_IN_QUARTER
    }

    /// Returns the last day of the month in a non-leap year
    pub const fn last_day(self) -> u8 {
        DAYS_IN_MONTH[self.ordinal() as usize]
    }

    /// Parses a full or abbreviated name using `names`
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if nothing matches.
    pub fn parse_name(s: &str, names: &NameTable) -> Result<Self, DateError> {
        names.parse_month(s)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

impl FromStr for Month {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameTable::english().parse_month(s)
    }
}
