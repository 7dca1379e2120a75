//! Calendar-independant solar date.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// Offset between a Julian day number and chrono's day count from 0001-01-01.
const JDN_FROM_CE: i32 = 1_721_425;

/// A calendar-independant solar date.
///
/// The date is stored as a Julian day number, so day arithmetic is plain
/// integer arithmetic and the Gregorian calendar is treated as proleptic
/// across all years. Supported range begins from January 1, 4713 BC,
/// proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use tzolkin_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use tzolkin_calendar::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i32::try_from(self.jdn).expect("jdn >= 2**31 not supported");
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use tzolkin_calendar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the current date in local civil time.
    ///
    /// The clock is read at every call.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    /// Parses a date string with a strftime-style format string.
    ///
    /// # Example
    ///
    /// ```
    /// use tzolkin_calendar::Date;
    ///
    /// let date = Date::parse_from_str("23.05.2014", "%d.%m.%Y").unwrap();
    /// assert_eq!((2014, 5, 23), date.gregorian());
    /// ```
    pub fn parse_from_str(text: &str, fmt: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(text, fmt).map(Into::into)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        let jdn = u32::try_from(date.num_days_from_ce() + JDN_FROM_CE)
            .expect("dates before January 1, 4713 BC not supported");
        Self::from_jdn(jdn)
    }
}
impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        let jdn = i32::try_from(date.jdn).expect("jdn >= 2**31 not supported");
        NaiveDate::from_num_days_from_ce_opt(jdn - JDN_FROM_CE)
            .expect("date out of range for chrono")
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}
