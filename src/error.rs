//! Error type shared by every fallible operation in the crate.

/// Error type for ordinal conversion, name lookup, date construction and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Weekday or month ordinal outside its valid range.
    #[error("Invalid {kind} ordinal: {value} (must be 1-{max})")]
    InvalidOrdinal {
        kind: &'static str,
        value: u8,
        max: u8,
    },

    /// String matches no full or abbreviated name in the name table.
    #[error("Unrecognized {kind} name: {name:?}")]
    UnrecognizedName { kind: &'static str, name: String },

    /// Day, month and year do not form a supported calendar date.
    #[error("Invalid date: day {day} of month {month} in year {year}")]
    InvalidDate { day: u8, month: u8, year: i32 },

    /// Arithmetic produced a year outside the supported range.
    #[error("Year {year} is outside the supported range {min}-{max}")]
    OutOfRange { year: i64, min: i32, max: i32 },

    /// Raw serial number outside the supported range.
    #[error("Serial {serial} is outside the supported range {min}-{max}")]
    SerialOutOfRange { serial: i64, min: i32, max: i32 },

    /// Name table rejected at construction.
    #[error("Invalid name table: {0}")]
    InvalidNameTable(String),
}

/// Shorthand `Result` used throughout the crate.
pub type Result<T, E = DateError> = std::result::Result<T, E>;

impl DateError {
    pub(crate) const fn year_out_of_range(year: i64) -> Self {
        Self::OutOfRange {
            year,
            min: crate::MIN_YEAR,
            max: crate::MAX_YEAR,
        }
    }

    pub(crate) const fn serial_out_of_range(serial: i64) -> Self {
        Self::SerialOutOfRange {
            serial,
            min: crate::MIN_SERIAL,
            max: crate::MAX_SERIAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        struct TestCase {
            error:    DateError,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                error:    DateError::InvalidOrdinal {
                    kind:  "weekday",
                    value: 8,
                    max:   7,
                },
                expected: "Invalid weekday ordinal: 8 (must be 1-7)",
            },
            TestCase {
                error:    DateError::UnrecognizedName {
                    kind: "month",
                    name: "Smarch".to_owned(),
                },
                expected: "Unrecognized month name: \"Smarch\"",
            },
            TestCase {
                error:    DateError::InvalidDate {
                    day:   30,
                    month: 2,
                    year:  2004,
                },
                expected: "Invalid date: day 30 of month 2 in year 2004",
            },
            TestCase {
                error:    DateError::year_out_of_range(10_000),
                expected: "Year 10000 is outside the supported range 1900-9999",
            },
            TestCase {
                error:    DateError::serial_out_of_range(1),
                expected: "Serial 1 is outside the supported range 2-2958465",
            },
        ];

        for case in &cases {
            assert_eq!(case.error.to_string(), case.expected);
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
