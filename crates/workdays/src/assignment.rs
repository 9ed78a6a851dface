//! Result of distributing a month's business days across customers.

use chrono::NaiveDate;
use reisekosten_calendar::YearMonth;

/// Per-customer business days for one month.
///
/// Index `i` of [`days`](Self::days) belongs to customer `i` of the input
/// list. Each list is in chronological order and no date appears twice
/// across all lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdayAssignment {
    period: YearMonth,
    days: Vec<Vec<NaiveDate>>,
    total_days: usize,
    first_day: Option<NaiveDate>,
    last_day: Option<NaiveDate>,
}

impl WorkdayAssignment {
    pub(crate) fn new(period: YearMonth, days: Vec<Vec<NaiveDate>>) -> Self {
        let total_days = days.iter().map(Vec::len).sum();
        let first_day = days.iter().filter_map(|d| d.first()).min().copied();
        let last_day = days.iter().filter_map(|d| d.last()).max().copied();
        Self {
            period,
            days,
            total_days,
            first_day,
            last_day,
        }
    }

    /// Returns the month that was distributed.
    pub fn period(&self) -> YearMonth {
        self.period
    }

    /// Returns the per-customer date lists.
    pub fn days(&self) -> &[Vec<NaiveDate>] {
        &self.days
    }

    /// Returns the dates assigned to customer `index` (empty if out of range).
    pub fn days_for(&self, index: usize) -> &[NaiveDate] {
        self.days.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of customers the month was distributed over.
    pub fn n_customers(&self) -> usize {
        self.days.len()
    }

    /// Returns the number of assigned business days across all customers.
    pub fn total_days(&self) -> usize {
        self.total_days
    }

    /// Returns the earliest assigned date.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.first_day
    }

    /// Returns the latest assigned date.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.last_day
    }

    /// Returns all assigned dates in chronological order.
    pub fn all_days(&self) -> Vec<NaiveDate> {
        let mut all: Vec<NaiveDate> = self.days.iter().flatten().copied().collect();
        all.sort();
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn summary_fields() {
        let period = YearMonth::new(2026, 2).unwrap();
        let a = WorkdayAssignment::new(period, vec![vec![date(2), date(4)], vec![date(3)]]);
        assert_eq!(a.total_days(), 3);
        assert_eq!(a.first_day(), Some(date(2)));
        assert_eq!(a.last_day(), Some(date(4)));
        assert_eq!(a.days_for(1), &[date(3)]);
        assert!(a.days_for(5).is_empty());
        assert_eq!(a.all_days(), vec![date(2), date(3), date(4)]);
    }

    #[test]
    fn empty_month() {
        let period = YearMonth::new(2026, 2).unwrap();
        let a = WorkdayAssignment::new(period, vec![Vec::new()]);
        assert_eq!(a.total_days(), 0);
        assert_eq!(a.first_day(), None);
        assert_eq!(a.last_day(), None);
    }
}
