//! Calendar date type and duration helpers for invoice scheduling.
//!
//! This module provides:
//! - `Date`: Type-safe calendar date wrapper around chrono::NaiveDate,
//!   tied to the fixed dd/MM/yyyy wire format
//! - `Weekday`: Day-of-week enum with canonical upper-case names
//! - Whole-month and whole-week duration counts
//!
//! # Examples
//!
//! ```
//! use billing_core::types::time::{whole_months_between, Date};
//!
//! let start = Date::parse("25/01/2021").unwrap();
//! let end = Date::parse("25/12/2021").unwrap();
//!
//! assert_eq!(whole_months_between(start, end), 11);
//! ```

use chrono::{Datelike, Duration, Months, NaiveDate};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::error::DateError;

/// Fixed textual date format: day/month/4-digit-year.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// All invoice scheduling works on plain calendar dates, with no
/// time-of-day or timezone component. Parsing and formatting use the
/// fixed dd/MM/yyyy wire format.
///
/// # Examples
///
/// ```
/// use billing_core::types::time::Date;
///
/// let date = Date::parse("23/12/2021").unwrap();
/// assert_eq!(date.year(), 2021);
/// assert_eq!(date.month(), 12);
/// assert_eq!(date.day(), 23);
/// assert_eq!(date.to_string(), "23/12/2021");
///
/// // Days between dates
/// let start = Date::from_ymd(2021, 1, 1).unwrap();
/// let end = Date::from_ymd(2021, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` for impossible component
    /// combinations such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from the fixed dd/MM/yyyy format.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let date = Date::parse("05/01/2021").unwrap();
    /// assert_eq!(date.day(), 5);
    ///
    /// assert!(Date::parse("2021-01-05").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|_| DateError::InvalidFormat {
                input: s.to_string(),
            })
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// Returns the earliest date on or after `self` falling on `day`.
    ///
    /// The search is inclusive: a date already on the requested weekday
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::{Date, Weekday};
    ///
    /// // Friday 24/12/2021 rolls forward to Saturday 25/12/2021.
    /// let friday = Date::parse("24/12/2021").unwrap();
    /// let saturday = friday.closest_weekday(Weekday::Saturday);
    /// assert_eq!(saturday.to_string(), "25/12/2021");
    ///
    /// assert_eq!(saturday.closest_weekday(Weekday::Saturday), saturday);
    /// ```
    pub fn closest_weekday(self, day: Weekday) -> Date {
        let mut date = self;
        while date.weekday() != day {
            date = date + 1;
        }
        date
    }

    /// Returns the date in this month with the requested day-of-month,
    /// or the last day of the month when that day does not exist.
    ///
    /// This is the month-length-overflow clamp: requesting day 31 in
    /// February yields the 28th, or the 29th in a leap year.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::time::Date;
    ///
    /// let feb = Date::parse("20/02/2021").unwrap();
    /// assert_eq!(feb.with_day_or_last_of_month(31).to_string(), "28/02/2021");
    ///
    /// let leap_feb = Date::parse("01/02/2024").unwrap();
    /// assert_eq!(leap_feb.with_day_or_last_of_month(31).to_string(), "29/02/2024");
    ///
    /// let mar = Date::parse("01/03/2021").unwrap();
    /// assert_eq!(mar.with_day_or_last_of_month(14).to_string(), "14/03/2021");
    /// ```
    pub fn with_day_or_last_of_month(self, day: u32) -> Date {
        let clamped = day.clamp(1, last_day_of_month(self.year(), self.month()));
        NaiveDate::from_ymd_opt(self.year(), self.month(), clamped)
            .map(Date)
            .unwrap_or(self)
    }

    /// Adds whole calendar months, clamping to the end of the target
    /// month when the source day does not exist there.
    ///
    /// Returns `None` only when the result would fall outside the
    /// representable date range.
    pub fn plus_months(self, months: u32) -> Option<Date> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }
}

impl Add<i64> for Date {
    type Output = Date;

    /// Returns the date `days` calendar days after `self`.
    fn add(self, days: i64) -> Date {
        Date(self.0 + Duration::days(days))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// Positive when `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from the fixed dd/MM/yyyy format.
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as dd/MM/yyyy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Returns the number of days in the given month.
fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}

/// Counts the whole calendar months between two dates.
///
/// A month counts only once the end day-of-month reaches the start
/// day-of-month; partial months truncate toward zero. The count is
/// order-dependent and negative when `end` is before `start`.
///
/// Months are packed into 32-day slots so a single truncating integer
/// division yields the whole-month count.
///
/// # Examples
///
/// ```
/// use billing_core::types::time::{whole_months_between, Date};
///
/// let months = |s: &str, e: &str| {
///     whole_months_between(Date::parse(s).unwrap(), Date::parse(e).unwrap())
/// };
///
/// assert_eq!(months("23/11/2021", "23/12/2021"), 1);
/// assert_eq!(months("25/01/2021", "25/12/2021"), 11);
/// // 28/02 is short of the 31st, so January's month is incomplete.
/// assert_eq!(months("31/01/2021", "28/02/2021"), 0);
/// ```
pub fn whole_months_between(start: Date, end: Date) -> i64 {
    let packed = |d: Date| {
        (i64::from(d.year()) * 12 + i64::from(d.month()) - 1) * 32 + i64::from(d.day())
    };
    (packed(end) - packed(start)) / 32
}

/// Counts the whole weeks between two dates, truncated toward zero.
///
/// # Examples
///
/// ```
/// use billing_core::types::time::{whole_weeks_between, Date};
///
/// let start = Date::parse("07/11/2021").unwrap();
/// let end = Date::parse("21/11/2021").unwrap();
/// assert_eq!(whole_weeks_between(start, end), 2);
/// ```
pub fn whole_weeks_between(start: Date, end: Date) -> i64 {
    (end - start) / 7
}

/// Day of week with canonical upper-case wire names (MONDAY..SUNDAY).
///
/// # Examples
///
/// ```
/// use billing_core::types::time::Weekday;
///
/// let day: Weekday = "TUESDAY".parse().unwrap();
/// assert_eq!(day, Weekday::Tuesday);
/// assert_eq!(day.name(), "TUESDAY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Parses a weekday from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MONDAY" => Ok(Weekday::Monday),
            "TUESDAY" => Ok(Weekday::Tuesday),
            "WEDNESDAY" => Ok(Weekday::Wednesday),
            "THURSDAY" => Ok(Weekday::Thursday),
            "FRIDAY" => Ok(Weekday::Friday),
            "SATURDAY" => Ok(Weekday::Saturday),
            "SUNDAY" => Ok(Weekday::Sunday),
            _ => Err(format!("Unknown weekday: {}", s)),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_date_impl {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Date::parse(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(feature = "serde")]
mod serde_weekday_impl {
    use super::Weekday;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Weekday {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Weekday {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Weekday::from_str(&s).map_err(de::Error::custom)
        }
    }
}
