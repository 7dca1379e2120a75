//! Utilities for converting between solar (Gregorian) dates and dates of
//! the 260-day Maya Tzolkʼin calendar.
//!
//! A Tzolkʼin date pairs a day number from 1 to 13 with one of 20 day
//! names; both advance by one every day, so the combination repeats every
//! 13 × 20 = 260 days. The solar calendar is treated as proleptic
//! Gregorian across all years.
//!
//! # Examples
//!
//! Converting a Gregorian date:
//!
//! ```
//! use tzolkin_calendar::{Date, Tzolkin};
//!
//! let date = Date::from_gregorian(2014, 5, 23).unwrap();
//!
//! assert_eq!("2 Etzʼnabʼ", Tzolkin::from_date(date).to_string());
//! ```
//!
//! Searching for solar dates with a given Tzolkʼin date:
//!
//! ```
//! use tzolkin_calendar::{Date, Tzolkin};
//!
//! let tzolkin = Tzolkin::new(13, "Chikchan").unwrap();
//! let start = Date::from_gregorian(1970, 1, 1).unwrap();
//!
//! // "next" is strictly after the start, "last" may be the start itself
//! assert_eq!("1970-09-18", tzolkin.next_date(start).iso_gregorian());
//! assert_eq!("1970-01-01", tzolkin.last_date(start).iso_gregorian());
//! ```

pub mod date;
pub mod tzolkin;

pub use date::Date;
pub use tzolkin::{Tzolkin, TzolkinDate, TzolkinError};
