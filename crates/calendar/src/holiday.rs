//! Per-region, per-year holiday sets.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::region::Region;
use crate::rules::{self, HolidayRule};

/// The public holidays of one region in one year.
///
/// Immutable once built; lookups are by exact date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    region: Region,
    year: i32,
    days: BTreeMap<NaiveDate, &'static str>,
}

impl HolidaySet {
    /// Builds the holiday set of `region` for `year`.
    pub fn new(region: Region, year: i32) -> Self {
        let days = rules::NATIONWIDE
            .iter()
            .chain(rules::regional(region))
            .filter_map(|rule: &HolidayRule| rule.date_in(year).map(|d| (d, rule.name)))
            .collect();
        Self { region, year, days }
    }

    /// Returns the region this set was built for.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the year this set was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns `true` if `date` is a holiday in this set.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Returns the holiday name for `date`, if any.
    pub fn name(&self, date: NaiveDate) -> Option<&'static str> {
        self.days.get(&date).copied()
    }

    /// Iterates `(date, name)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &'static str)> + '_ {
        self.days.iter().map(|(&d, &n)| (d, n))
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bw_2026_has_twelve_holidays() {
        let set = HolidaySet::new(Region::BW, 2026);
        assert_eq!(set.len(), 12);
        assert_eq!(set.name(date(2026, 1, 6)), Some("Heilige Drei Könige"));
        assert_eq!(set.name(date(2026, 12, 26)), Some("2. Weihnachtstag"));
    }

    #[test]
    fn berlin_2026_has_ten_holidays() {
        let set = HolidaySet::new(Region::BE, 2026);
        assert_eq!(set.len(), 10);
        assert!(set.contains(date(2026, 3, 8)));
        assert!(!set.contains(date(2026, 1, 6)));
    }

    #[test]
    fn reformation_2017_everywhere() {
        for region in Region::ALL {
            let set = HolidaySet::new(region, 2017);
            assert!(set.contains(date(2017, 10, 31)), "{region} missing 31.10.2017");
        }
        assert!(!HolidaySet::new(Region::BW, 2016).contains(date(2016, 10, 31)));
    }

    #[test]
    fn iter_is_chronological() {
        let set = HolidaySet::new(Region::BY, 2026);
        let dates: Vec<_> = set.iter().map(|(d, _)| d).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(set.region(), Region::BY);
        assert_eq!(set.year(), 2026);
    }
}
