//! The 260-day Tzolkʼin calendar.
//!
//! [`TzolkinDate`] is the plain value type the arithmetic in [`calculate`]
//! works on; [`Tzolkin`] wraps one with constructors from solar dates and
//! date strings, day-advancing, and search conveniences.

use chrono::{NaiveDate, TimeDelta};
use thiserror::Error;

use crate::date::Date;

pub mod calculate;
pub mod fmt;

pub use calculate::{CYCLE_DAYS, NAME_COUNT, NUMBER_COUNT, TzolkinDate, cycle};

/// Reported when constructing a Tzolkʼin date from invalid components or
/// an unparseable date string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TzolkinError {
    #[error("day number {0} is not in 1..=13")]
    InvalidNumber(u8),
    #[error("day name index {0} is not in 1..=20")]
    InvalidNameIndex(u8),
    #[error("\"{0}\" is not a Tzolkʼin day name")]
    UnknownName(String),
    #[error("cannot parse date: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// A Tzolkʼin date, with conversions from and to solar dates.
///
/// Holds one [`TzolkinDate`] and mutates it only through
/// [`add_days`](Self::add_days) / [`add_duration`](Self::add_duration);
/// everything else delegates to the [`calculate`] functions.
///
/// # Examples
///
/// ```
/// use tzolkin_calendar::{Date, Tzolkin};
///
/// let date = Date::from_gregorian(2014, 5, 23).unwrap();
/// let tzolkin = Tzolkin::from_date(date);
///
/// assert_eq!("2 Etzʼnabʼ", tzolkin.to_string());
/// assert_eq!(2, tzolkin.day_number());
/// assert_eq!("Etzʼnabʼ", tzolkin.day_name());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tzolkin {
    date: TzolkinDate,
}

impl Tzolkin {
    /// Creates a Tzolkʼin date from a day number and a day name.
    ///
    /// The name is matched against the 20 day names, ignoring case and
    /// punctuation (see [`fmt::parse_day_name`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use tzolkin_calendar::Tzolkin;
    ///
    /// let tzolkin = Tzolkin::new(8, "Chuwen").unwrap();
    /// assert_eq!(11, tzolkin.day_name_index());
    ///
    /// assert!(Tzolkin::new(8, "Monday").is_err());
    /// ```
    pub fn new(number: u8, name: &str) -> Result<Self, TzolkinError> {
        let name = Self::name_index(name)?;
        Self::with_name_index(number, name)
    }

    /// Creates a Tzolkʼin date from a day number and a day name index
    /// (1 = Imix, 20 = Ajaw).
    pub fn with_name_index(number: u8, name: u8) -> Result<Self, TzolkinError> {
        Ok(Self {
            date: TzolkinDate::new(number, name)?,
        })
    }

    /// Converts a solar date to its Tzolkʼin date.
    pub fn from_date(date: Date) -> Self {
        Self {
            date: TzolkinDate::from_date(date),
        }
    }

    /// Parses a solar date with a strftime-style format string and converts
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzolkin_calendar::Tzolkin;
    ///
    /// let tzolkin = Tzolkin::from_date_string("23.05.2014", "%d.%m.%Y").unwrap();
    /// assert_eq!("2 Etzʼnabʼ", tzolkin.to_string());
    /// ```
    pub fn from_date_string(text: &str, fmt: &str) -> Result<Self, TzolkinError> {
        Ok(Self::from_date(Date::parse_from_str(text, fmt)?))
    }

    /// Parses a solar date in ISO 8601 format (`YYYY-MM-DD`) and converts
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzolkin_calendar::Tzolkin;
    ///
    /// let tzolkin = Tzolkin::from_iso_format("2014-05-23").unwrap();
    /// assert_eq!("2 Etzʼnabʼ", tzolkin.to_string());
    /// ```
    pub fn from_iso_format(text: &str) -> Result<Self, TzolkinError> {
        let date: NaiveDate = text.parse()?;
        Ok(Self::from_date(date.into()))
    }

    /// Converts the current local date. The clock is read at every call.
    pub fn from_today() -> Self {
        Self::from_date(Date::today())
    }

    /// Returns the held [`TzolkinDate`] value.
    pub fn date(&self) -> TzolkinDate {
        self.date
    }
    /// Returns the day number, from 1 to 13.
    pub fn day_number(&self) -> u8 {
        self.date.number()
    }
    /// Returns the day name as text.
    pub fn day_name(&self) -> &'static str {
        self.date.day_name()
    }
    /// Returns the day name index, from 1 (Imix) to 20 (Ajaw).
    pub fn day_name_index(&self) -> u8 {
        self.date.name()
    }
    /// Returns the position of this date in the cycle, from 1 (1 Imix) to
    /// 260 (13 Ajaw).
    pub fn year_day(&self) -> u16 {
        self.date.day_index()
    }

    /// Shifts this date by `days` within the cycle and returns `self` for
    /// chaining. Negative counts shift backwards.
    ///
    /// This is a pure Tzolkʼin shift; no solar date is involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzolkin_calendar::Tzolkin;
    ///
    /// let mut tzolkin = Tzolkin::new(13, "Chikchan").unwrap();
    /// tzolkin.add_days(2).add_days(-1);
    ///
    /// assert_eq!("1 Kimi", tzolkin.to_string());
    /// ```
    pub fn add_days(&mut self, days: i64) -> &mut Self {
        self.date = self.date.advanced(days);
        self
    }

    /// Shifts this date by the day count of `delta`, like
    /// [`add_days`](Self::add_days).
    pub fn add_duration(&mut self, delta: TimeDelta) -> &mut Self {
        self.add_days(delta.num_days())
    }

    /// Returns the number of days from this date forward to `other`,
    /// from 0 to 259.
    pub fn days_until(&self, other: &Tzolkin) -> u16 {
        self.date.days_until(other.date)
    }

    /// Returns [`days_until`](Self::days_until) as a [`TimeDelta`].
    pub fn duration_until(&self, other: &Tzolkin) -> TimeDelta {
        TimeDelta::days(self.days_until(other) as i64)
    }

    /// Returns the next solar date with this Tzolkʼin date, strictly after
    /// `starting`.
    pub fn next_date(&self, starting: Date) -> Date {
        self.date.next_from(starting)
    }

    /// Returns `count` solar dates with this Tzolkʼin date, searching
    /// forward in time from `starting`.
    pub fn next_dates(&self, starting: Date, count: usize) -> Vec<Date> {
        self.date.search_from(starting, count, true)
    }

    /// Returns the most recent solar date with this Tzolkʼin date, at or
    /// before `starting`.
    pub fn last_date(&self, starting: Date) -> Date {
        self.date.last_from(starting)
    }

    /// Returns `count` solar dates with this Tzolkʼin date, searching
    /// backwards in time from `starting`.
    pub fn last_dates(&self, starting: Date, count: usize) -> Vec<Date> {
        self.date.search_from(starting, count, false)
    }

    /// Returns the index of the day name `name`, from 1 (Imix) to 20
    /// (Ajaw).
    ///
    /// # Examples
    ///
    /// ```
    /// use tzolkin_calendar::Tzolkin;
    ///
    /// assert_eq!(20, Tzolkin::name_index("Ajaw").unwrap());
    /// assert!(Tzolkin::name_index("DOES NOT EXIST").is_err());
    /// ```
    pub fn name_index(name: &str) -> Result<u8, TzolkinError> {
        fmt::parse_day_name(name).ok_or_else(|| TzolkinError::UnknownName(name.to_owned()))
    }

    /// Returns every day of the Tzolkʼin cycle as `"<number> <name>"`
    /// strings, from `"1 Imix"` to `"13 Ajaw"`.
    pub fn calendar() -> Vec<String> {
        calculate::cycle().iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_validates() {
        assert_eq!(
            Err(TzolkinError::InvalidNumber(17)),
            Tzolkin::with_name_index(17, 7)
        );
        assert_eq!(
            Err(TzolkinError::InvalidNameIndex(27)),
            Tzolkin::with_name_index(6, 27)
        );
        assert_eq!(
            Err(TzolkinError::UnknownName("DOES NOT EXIST".into())),
            Tzolkin::new(6, "DOES NOT EXIST")
        );
        // the name is checked before the number
        assert_eq!(
            Err(TzolkinError::UnknownName("nope".into())),
            Tzolkin::new(17, "nope")
        );
    }

    #[test]
    fn constructor_accepts_loose_names() {
        for (name, index) in [("Chuwen", 11), ("chuwen", 11), ("Etznab", 18), ("kib", 16)] {
            let tzolkin = Tzolkin::new(8, name).unwrap();
            assert_eq!(index, tzolkin.day_name_index(), "{name}");
            assert_eq!(8, tzolkin.day_number());
        }
    }

    #[test]
    fn accessors() {
        let tzolkin = Tzolkin::with_name_index(13, 5).unwrap();
        assert_eq!(13, tzolkin.day_number());
        assert_eq!("Chikchan", tzolkin.day_name());
        assert_eq!(5, tzolkin.day_name_index());
        assert_eq!(65, tzolkin.year_day());
        assert_eq!(TzolkinDate::new(13, 5).unwrap(), tzolkin.date());
    }

    #[test]
    fn from_date_strings() {
        let by_fmt = Tzolkin::from_date_string("01.01.1970", "%d.%m.%Y").unwrap();
        let by_iso = Tzolkin::from_iso_format("1970-01-01").unwrap();
        assert_eq!(by_fmt, by_iso);
        assert_eq!("13 Chikchan", by_iso.to_string());

        assert!(Tzolkin::from_date_string("1970-01-01", "%d.%m.%Y").is_err());
        assert!(matches!(
            Tzolkin::from_iso_format("01.01.1970"),
            Err(TzolkinError::Parse(_))
        ));
    }

    #[test]
    fn add_days_rolls_both_components() {
        let mut tzolkin = Tzolkin::with_name_index(13, 5).unwrap();
        tzolkin.add_days(1);
        assert_eq!("1 Kimi", tzolkin.to_string());
        tzolkin.add_days(-1);
        assert_eq!("13 Chikchan", tzolkin.to_string());
        tzolkin.add_days(260);
        assert_eq!("13 Chikchan", tzolkin.to_string());
    }

    #[test]
    fn add_duration_uses_whole_days() {
        let mut tzolkin = Tzolkin::with_name_index(13, 5).unwrap();
        tzolkin.add_duration(TimeDelta::days(2));
        assert_eq!("2 Manikʼ", tzolkin.to_string());
    }

    #[test]
    fn diff_as_count_and_duration() {
        let start = Tzolkin::with_name_index(4, 7).unwrap();
        let end = Tzolkin::with_name_index(3, 19).unwrap();
        assert_eq!(12, start.days_until(&end));
        assert_eq!(TimeDelta::days(12), start.duration_until(&end));
        assert_eq!(0, start.days_until(&start));
    }

    #[test]
    fn search_delegates() {
        let start = Date::from_gregorian(1970, 1, 1).unwrap();
        let tzolkin = Tzolkin::with_name_index(13, 5).unwrap();
        assert_eq!((1970, 9, 18), tzolkin.next_date(start).gregorian());
        assert_eq!(start, tzolkin.last_date(start));
        assert_eq!(3, tzolkin.next_dates(start, 3).len());
        assert_eq!(3, tzolkin.last_dates(start, 3).len());
        assert!(tzolkin.next_dates(start, 0).is_empty());
    }

    #[test]
    fn calendar_lists_the_whole_cycle() {
        let calendar = Tzolkin::calendar();
        assert_eq!(260, calendar.len());
        assert_eq!("1 Imix", calendar[0]);
        assert_eq!("2 Ikʼ", calendar[1]);
        assert_eq!("13 Ajaw", calendar[259]);
    }
}
