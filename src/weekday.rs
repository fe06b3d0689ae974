use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateError, NameTable, prelude::*};

/// Day of the week, numbered 1-7 from Sunday.
///
/// `Display` gives the English full name; locale names come from a [`NameTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Every weekday in ordinal order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up the weekday with the given ordinal (Sunday = 1 … Saturday = 7)
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if `n` is outside 1-7.
    pub const fn from_ordinal(n: u8) -> Result<Self, DateError> {
        match n {
            1 => Ok(Self::Sunday),
            2 => Ok(Self::Monday),
            3 => Ok(Self::Tuesday),
            4 => Ok(Self::Wednesday),
            5 => Ok(Self::Thursday),
            6 => Ok(Self::Friday),
            7 => Ok(Self::Saturday),
            _ => Err(DateError::InvalidOrdinal {
                kind:  "weekday",
                value: n,
                max:   7,
            }),
        }
    }

    /// Returns the ordinal (Sunday = 1 … Saturday = 7)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parses a full or abbreviated name using `names`
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if nothing matches.
    pub fn parse_name(s: &str, names: &NameTable) -> Result<Self, DateError> {
        names.parse_weekday(s)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.ordinal()
    }
}

impl FromStr for Weekday {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameTable::english().parse_weekday(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_roundtrip() {
        for n in 1..=7 {
            let weekday = Weekday::from_ordinal(n).expect("ordinal in 1-7 should be valid");
            assert_eq!(weekday.ordinal(), n);
        }
        assert_eq!(Weekday::Sunday.ordinal(), 1);
        assert_eq!(Weekday::Saturday.ordinal(), 7);
    }

    #[test]
    fn test_from_ordinal_invalid() {
        for n in [0, 8, 255] {
            assert!(
                matches!(
                    Weekday::from_ordinal(n),
                    Err(DateError::InvalidOrdinal { kind: "weekday", value, max: 7 }) if value == n
                ),
                "ordinal {n} should be rejected"
            );
        }
    }

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (i, weekday) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(weekday.ordinal()), i + 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Wednesday".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!(" Wednesday ".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("Wed".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!("wEdNeSdAy".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert!(matches!(
            "Wodensday".parse::<Weekday>(),
            Err(DateError::UnrecognizedName { kind: "weekday", .. })
        ));
    }

    #[test]
    fn test_serde_as_ordinal() {
        let json = serde_json::to_string(&Weekday::Friday).expect("failed to serialize weekday");
        assert_eq!(json, "6");

        let parsed: Weekday = serde_json::from_str(&json).expect("failed to deserialize weekday");
        assert_eq!(parsed, Weekday::Friday);

        assert!(serde_json::from_str::<Weekday>("0").is_err());
    }
}
