//! Gregorian month arithmetic and the validated `YearMonth` period.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, unless also divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// Computed as "day 0 of the next month": the day before the first of the
/// following month, which yields 28, 29, 30 or 31 with leap years handled
/// by the date arithmetic itself.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`CalendarError::YearOutOfRange`] if the year cannot be represented.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let (next_year, next_month) = if month == 12 {
        let next = year
            .checked_add(1)
            .ok_or(CalendarError::YearOutOfRange { year })?;
        (next, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::YearOutOfRange { year })
}

/// A validated calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
    days: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside 1..=12 or the year
    /// cannot be represented.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let days = days_in_month(year, month)?;
        Ok(Self { year, month, days })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        // Every month has a 28th; count the later days that exist.
        let days = (29..=31)
            .take_while(|&day| date.with_day(day).is_some())
            .last()
            .unwrap_or(28);
        Self {
            year: date.year(),
            month: date.month(),
            days,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the number of days in this month.
    pub fn days(self) -> u32 {
        self.days
    }

    /// Iterates every date of the month in ascending order.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        (1..=self.days).filter_map(move |day| NaiveDate::from_ymd_opt(self.year, self.month, day))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `M/YYYY` or `MM/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidPeriod {
            input: s.to_string(),
        };
        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&month.len()) || year.len() != 4 {
            return Err(invalid());
        }
        if !all_digits(month) || !all_digits(year) {
            return Err(invalid());
        }
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}
