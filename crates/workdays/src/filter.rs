//! Business-day filter: calendar workdays minus the optional year-end closure.

use chrono::{Datelike, NaiveDate};
use reisekosten_calendar::BusinessCalendar;

/// Run policy for the workday filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    holiday_period_exclusion: bool,
}

impl Policy {
    /// Creates a policy.
    ///
    /// * `holiday_period_exclusion` - If `true`, December 24 and 27..=31 are
    ///   never business days.
    pub fn new(holiday_period_exclusion: bool) -> Self {
        Self {
            holiday_period_exclusion,
        }
    }

    /// Returns whether the year-end closure is applied.
    pub fn holiday_period_exclusion(self) -> bool {
        self.holiday_period_exclusion
    }
}

impl Default for Policy {
    /// Year-end closure enabled.
    fn default() -> Self {
        Self::new(true)
    }
}

/// Returns `true` if `date` falls in the fixed year-end office closure
/// (December 24 and December 27 through 31).
///
/// Independent of any region; only the day of month matters.
pub fn in_closure_window(date: NaiveDate) -> bool {
    date.month() == 12 && (date.day() == 24 || (27..=31).contains(&date.day()))
}

/// Returns `true` if `date` counts as a billable business day on `calendar`.
pub fn is_business_day(calendar: &BusinessCalendar, date: NaiveDate, policy: Policy) -> bool {
    if !calendar.is_workday(date) {
        return false;
    }
    !(policy.holiday_period_exclusion() && in_closure_window(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reisekosten_calendar::Region;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_policy_excludes_holiday_period() {
        assert!(Policy::default().holiday_period_exclusion());
    }

    #[test]
    fn closure_window_days() {
        assert!(in_closure_window(date(2026, 12, 24)));
        for day in 27..=31 {
            assert!(in_closure_window(date(2026, 12, day)));
        }
        assert!(!in_closure_window(date(2026, 12, 23)));
        assert!(!in_closure_window(date(2026, 12, 25)));
        assert!(!in_closure_window(date(2026, 12, 26)));
        assert!(!in_closure_window(date(2026, 1, 27)));
    }

    #[test]
    fn business_day_cases() {
        let cal = BusinessCalendar::new(Region::BW, 2026);
        let on = Policy::new(true);
        let off = Policy::new(false);
        let cal_2025 = BusinessCalendar::new(Region::BW, 2025);

        let cases = [
            ("regular weekday", &cal, date(2026, 2, 10), on, true),
            ("Saturday", &cal, date(2026, 2, 14), on, false),
            ("Sunday", &cal, date(2026, 2, 15), on, false),
            ("New Year's Day", &cal, date(2026, 1, 1), on, false),
            ("Christmas Eve, closure", &cal, date(2026, 12, 24), on, false),
            ("Christmas Eve, no closure", &cal_2025, date(2025, 12, 24), off, true),
            ("Dec 28, closure", &cal, date(2026, 12, 28), on, false),
            ("Dec 28, no closure", &cal, date(2026, 12, 28), off, true),
            ("Dec 31, closure", &cal_2025, date(2025, 12, 31), on, false),
            ("Dec 31, no closure", &cal_2025, date(2025, 12, 31), off, true),
            ("Dec 26 is a holiday", &cal, date(2026, 12, 26), on, false),
            ("regular December day", &cal, date(2026, 12, 1), on, true),
        ];

        for (name, calendar, day, policy, expected) in cases {
            assert_eq!(
                is_business_day(calendar, day, policy),
                expected,
                "{name}: {day} with {policy:?}"
            );
        }
    }
}
