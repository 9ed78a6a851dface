//! Business calendar: weekends plus a region's public holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::trace;

use crate::holiday::HolidaySet;
use crate::region::Region;

/// A business calendar seeded with one region's holidays for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: HolidaySet,
}

impl BusinessCalendar {
    /// Builds the calendar of `region` for `year`.
    pub fn new(region: Region, year: i32) -> Self {
        let holidays = HolidaySet::new(region, year);
        trace!(
            region = region.code(),
            year,
            n_holidays = holidays.len(),
            "business calendar built"
        );
        Self { holidays }
    }

    /// Builds the calendar for a raw region code, falling back to the
    /// default region for unknown codes.
    pub fn for_code(code: &str, year: i32) -> Self {
        Self::new(Region::from_code(code), year)
    }

    /// Returns the region of this calendar.
    pub fn region(&self) -> Region {
        self.holidays.region()
    }

    /// Returns the holidays the calendar was seeded with.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns `true` for Saturdays and Sundays.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns `true` if `date` is a public holiday in this region.
    ///
    /// Dates outside the seeded year are checked against that year's rules.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        if date.year() == self.holidays.year() {
            self.holidays.contains(date)
        } else {
            HolidaySet::new(self.region(), date.year()).contains(date)
        }
    }

    /// Returns `true` if `date` is neither a weekend day nor a holiday.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }
}
