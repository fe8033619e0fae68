//! Calendar-independant date, and the date-time input of the pillar
//! calculations.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::Error;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar,
/// and ends at JDN `u32::MAX` (December 13, 11754508, proleptic Gregorian).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date, rejecting
    /// months and days that do not exist.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi::{Date, Error};
    ///
    /// assert!(Date::new(2024, 2, 29).is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidDate { year: 2023, month: 2, day: 29 }),
    ///     Date::new(2023, 2, 29),
    /// );
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month)
            || day < 1
            || day > YearType::from_gregorian(year).days_in_month(month)
        {
            return Err(Error::InvalidDate { year, month, day });
        }
        Self::from_gregorian(year, month, day).ok_or(Error::OutOfRange { year })
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. Months and days are not validated: overflowing
    /// values are carried arithmetically. Use [`Date::new`] for a checked
    /// constructor.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
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
    /// use bazi::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        // |year| < 11_800_000 for every u32 day number
        (year as i32, month as i32, day as i32)
    }
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    pub fn month(&self) -> i32 {
        self.gregorian().1
    }
    pub fn day(&self) -> i32 {
        self.gregorian().2
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the Chinese sexagenary day number of the date, numbered from 1
    /// (甲子) to 60 (癸亥).
    ///
    /// This is the astronomical day count, independant of the reference date
    /// used by [`day_pillar`](crate::chinese::day_pillar); the two agree.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> i32 {
        ((u64::from(self.jdn) + 49) % 60 + 1) as i32
    }
}

/// Moves a date by whole days, saturating at the ends of the supported range.
impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        let jdn = i64::from(self.jdn).saturating_add(rhs);
        Date::from_jdn(jdn.clamp(0, i64::from(u32::MAX)) as u32)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`) of a year of this type.
    pub fn days_in_month(&self, month: i32) -> i32 {
        match month {
            2 => 28 + self.is_leap() as i32,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }
}

/// A wall-clock date and hour, the input of every pillar calculation.
///
/// No time zone is attached: the values supplied by the caller are used
/// as-is. Minutes and seconds do not affect any pillar and are not kept.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DateTime {
    date: Date,
    hour: u32,
}

impl DateTime {
    /// Creates a `DateTime` from Gregorian calendar fields.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi::DateTime;
    ///
    /// let dt = DateTime::new(1990, 5, 17, 8).unwrap();
    /// assert_eq!("1990-05-17 08:00", dt.to_string());
    /// assert!(DateTime::new(1990, 5, 17, 24).is_err());
    /// ```
    pub fn new(year: i32, month: i32, day: i32, hour: u32) -> Result<Self, Error> {
        Self::at(Date::new(year, month, day)?, hour)
    }
    /// Attaches an hour (`0..=23`) to a date.
    pub fn at(date: Date, hour: u32) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::InvalidHour { hour });
        }
        Ok(Self { date, hour })
    }
    /// The first hour of `date`.
    pub fn midnight(date: Date) -> Self {
        Self { date, hour: 0 }
    }

    pub fn date(&self) -> Date {
        self.date
    }
    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn year(&self) -> i32 {
        self.date.year()
    }
    pub fn month(&self) -> i32 {
        self.date.month()
    }
    pub fn day(&self) -> i32 {
        self.date.day()
    }

    /// Whole hours elapsed from `earlier` to `self`, negative if `self` is
    /// before `earlier`.
    pub fn hours_since(&self, earlier: DateTime) -> i64 {
        (self.date - earlier.date) * 24 + i64::from(self.hour) - i64::from(earlier.hour)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.date, self.hour)
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;
    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::at(Date::try_from(dt.date())?, dt.hour())
    }
}

impl TryFrom<NaiveDate> for DateTime {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Ok(Self::midnight(Date::try_from(date)?))
    }
}

impl FromStr for DateTime {
    type Err = Error;

    /// Accepts `YYYY-MM-DD`, optionally followed by `T` or a space and
    /// either a bare hour (`HH`), `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidDateTime { text: s.to_owned() };
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t.trim())),
            None => (s, None),
        };
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())?;
        let hour = match time_part {
            None => 0,
            Some(t) if t.contains(':') => NaiveTime::parse_from_str(t, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
                .map_err(|_| invalid())?
                .hour(),
            Some(t) => t.parse().map_err(|_| invalid())?,
        };
        Self::at(Date::try_from(date)?, hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn checked_new() {
        assert_eq!(
            Date::from_gregorian(2024, 2, 29),
            Date::new(2024, 2, 29).ok()
        );
        for (y, m, d) in [(2023, 2, 29), (2021, 4, 31), (2021, 13, 1), (2021, 0, 1), (2021, 1, 0)] {
            assert_eq!(
                Err(Error::InvalidDate {
                    year: y,
                    month: m,
                    day: d
                }),
                Date::new(y, m, d),
                "{y:04}-{m:02}-{d:02}"
            );
        }
        assert_eq!(
            Err(Error::OutOfRange { year: -5000 }),
            Date::new(-5000, 1, 1)
        );
        assert_eq!(
            Err(Error::OutOfRange { year: 2_000_000_000 }),
            Date::new(2_000_000_000, 1, 1)
        );
        assert_eq!(None, Date::from_gregorian(2_000_000, 1, 1));
        for (y, m, d) in [
            (i32::MAX, 1, 1),
            (i32::MIN, 1, 1),
            (2000, i32::MAX, 1),
            (2000, 1, i32::MIN),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y} {m} {d}");
        }
    }

    #[test]
    fn extreme_day_numbers() {
        for jdn in [0, i32::MAX as u32, i32::MAX as u32 + 1, 3_000_000_000, u32::MAX] {
            let date = Date::from_jdn(jdn);
            let (y, m, d) = date.gregorian();
            assert_eq!(Some(date), Date::from_gregorian(y, m, d), "{jdn}");
            assert!((1..=60).contains(&date.sexagenary()), "{jdn}");
        }
        assert_eq!((11754508, 12, 13), Date::from_jdn(u32::MAX).gregorian());
        assert_eq!(
            i64::from(u32::MAX),
            Date::from_jdn(u32::MAX) - Date::from_jdn(0)
        );
        assert_eq!(Date::from_jdn(u32::MAX), Date::from_jdn(u32::MAX) + 1);
        assert_eq!(Date::from_jdn(0), Date::from_jdn(0) + -1);
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2000, 1, 1).unwrap();
        assert_eq!("2000-03-01", (date + 60).iso_gregorian());
        assert_eq!("1999-12-31", (date + -1).iso_gregorian());
        assert_eq!(60, (date + 60) - date);
        assert_eq!(-1, (date + -1) - date);
    }

    #[test]
    fn year_type() {
        use YearType::*;
        for (std, y) in [(Leap, 2000), (Common, 1900), (Leap, 2024), (Common, 2023)] {
            assert_eq!(std, YearType::from_gregorian(y), "{y}");
        }
        for (std, (year_type, m)) in [
            (29, (Leap, 2)),
            (28, (Common, 2)),
            (30, (Common, 4)),
            (31, (Leap, 12)),
        ] {
            assert_eq!(std, year_type.days_in_month(m), "{year_type:?} {m}");
        }
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }

    #[test]
    fn date_time_hours() {
        let anchor = DateTime::midnight(Date::from_gregorian(2000, 1, 1).unwrap());
        assert_eq!(0, anchor.hours_since(anchor));
        let dt = DateTime::new(2000, 1, 2, 5).unwrap();
        assert_eq!(29, dt.hours_since(anchor));
        let dt = DateTime::new(1999, 12, 31, 23).unwrap();
        assert_eq!(-1, dt.hours_since(anchor));
        assert_eq!(
            Err(Error::InvalidHour { hour: 24 }),
            DateTime::new(2000, 1, 1, 24)
        );
    }

    #[test]
    fn parse_date_time() {
        for (std, text) in [
            ("2000-01-01 00:00", "2000-01-01"),
            ("2000-01-01 07:00", "2000-01-01T07"),
            ("2000-01-01 23:00", "2000-01-01T23:59"),
            ("1984-02-04 13:00", "1984-02-04 13:30:15"),
        ] {
            assert_eq!(std, text.parse::<DateTime>().unwrap().to_string(), "{text}");
        }
        for text in ["", "2000-13-01", "2000-01-01T", "2000-01-01T25", "yesterday"] {
            assert!(text.parse::<DateTime>().is_err(), "{text:?}");
        }
    }

    #[test]
    fn from_chrono() {
        let naive = NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_hms_opt(8, 45, 0)
            .unwrap();
        assert_eq!(
            DateTime::new(1990, 5, 17, 8).unwrap(),
            DateTime::try_from(naive).unwrap()
        );
        let naive = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        assert_eq!(
            DateTime::new(1990, 5, 17, 0).unwrap(),
            DateTime::try_from(naive).unwrap()
        );
    }
}
