//! Calendar dates as serial day numbers.
//!
//! A [`SerialDate`] identifies one day of the proleptic Gregorian calendar
//! between 1 January 1900 and 31 December 9999 by a single integer, with
//! 1 January 1900 as serial 2. All arithmetic is exact and independent of
//! time of day, timezone and locale:
//!
//! ```
//! use serial_date::{DateInterval, Month, SerialDate, Weekday};
//!
//! let d = SerialDate::new(31, Month::May, 2004)?;
//! assert_eq!(d.plus_months(1)?.to_string(), "30-June-2004");
//! assert_eq!(d.following_day_of_week(Weekday::Monday)?.day_of_month(), 7);
//!
//! let start = SerialDate::new(30, Month::May, 2004)?;
//! let end = SerialDate::new(30, Month::June, 2004)?;
//! assert!(d.is_in_range_with(&end, &start, DateInterval::IncludeBoth));
//! # Ok::<(), serial_date::DateError>(())
//! ```
//!
//! Weekday and month names are looked up through a [`NameTable`] passed by
//! the caller; [`NameTable::english`] is the built-in table.

mod consts;
mod date;
mod error;
mod leap;
mod month;
mod names;
mod prelude;
mod range;
mod weekday;

pub use consts::*;
pub use date::{SerialDate, WeekdayAdjustment};
pub use error::{DateError, Result};
pub use leap::{is_leap_year, last_day_of_month, leap_year_count};
pub use month::Month;
pub use names::NameTable;
pub use range::DateInterval;
pub use weekday::Weekday;
