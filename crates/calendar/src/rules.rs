//! Static holiday rule tables per region.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::region::Region;

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// Same month and day every year.
    Fixed { month: u32, day: u32 },
    /// Offset in days from Easter Sunday.
    Easter { offset: i64 },
    /// Wednesday before November 23 (Buß- und Bettag).
    WednesdayBeforeNov23,
}

/// A named holiday with its date anchor and the years it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HolidayRule {
    pub(crate) name: &'static str,
    anchor: Anchor,
    first_year: i32,
    last_year: i32,
}

impl HolidayRule {
    const fn new(name: &'static str, anchor: Anchor) -> Self {
        Self {
            name,
            anchor,
            first_year: i32::MIN,
            last_year: i32::MAX,
        }
    }

    const fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self::new(name, Anchor::Fixed { month, day })
    }

    const fn easter(name: &'static str, offset: i64) -> Self {
        Self::new(name, Anchor::Easter { offset })
    }

    const fn since(self, year: i32) -> Self {
        Self {
            first_year: year,
            ..self
        }
    }

    const fn only(self, year: i32) -> Self {
        Self {
            first_year: year,
            last_year: year,
            ..self
        }
    }

    /// Returns the date of this holiday in `year`, or `None` if it is not
    /// observed that year.
    pub(crate) fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if year < self.first_year || year > self.last_year {
            return None;
        }
        match self.anchor {
            Anchor::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Anchor::Easter { offset } => {
                easter_sunday(year)?.checked_add_signed(TimeDelta::days(offset))
            }
            Anchor::WednesdayBeforeNov23 => {
                let nov22 = NaiveDate::from_ymd_opt(year, 11, 22)?;
                // Wednesday is day 2 counted from Monday.
                let back = (nov22.weekday().num_days_from_monday() + 5) % 7;
                nov22.checked_sub_signed(TimeDelta::days(i64::from(back)))
            }
        }
    }
}

/// Easter Sunday of `year` (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

const NEUJAHR: HolidayRule = HolidayRule::fixed("Neujahr", 1, 1);
const HEILIGE_DREI_KOENIGE: HolidayRule = HolidayRule::fixed("Heilige Drei Könige", 1, 6);
const FRAUENTAG: HolidayRule = HolidayRule::fixed("Internationaler Frauentag", 3, 8);
const KARFREITAG: HolidayRule = HolidayRule::easter("Karfreitag", -2);
const OSTERSONNTAG: HolidayRule = HolidayRule::easter("Ostersonntag", 0);
const OSTERMONTAG: HolidayRule = HolidayRule::easter("Ostermontag", 1);
const TAG_DER_ARBEIT: HolidayRule = HolidayRule::fixed("Tag der Arbeit", 5, 1);
const TAG_DER_BEFREIUNG: HolidayRule = HolidayRule::fixed("Tag der Befreiung", 5, 8);
const HIMMELFAHRT: HolidayRule = HolidayRule::easter("Christi Himmelfahrt", 39);
const PFINGSTSONNTAG: HolidayRule = HolidayRule::easter("Pfingstsonntag", 49);
const PFINGSTMONTAG: HolidayRule = HolidayRule::easter("Pfingstmontag", 50);
const FRONLEICHNAM: HolidayRule = HolidayRule::easter("Fronleichnam", 60);
const MARIAE_HIMMELFAHRT: HolidayRule = HolidayRule::fixed("Mariä Himmelfahrt", 8, 15);
const WELTKINDERTAG: HolidayRule = HolidayRule::fixed("Weltkindertag", 9, 20);
const DEUTSCHE_EINHEIT: HolidayRule = HolidayRule::fixed("Tag der Deutschen Einheit", 10, 3);
const REFORMATIONSTAG: HolidayRule = HolidayRule::fixed("Reformationstag", 10, 31);
const ALLERHEILIGEN: HolidayRule = HolidayRule::fixed("Allerheiligen", 11, 1);
const BUSS_UND_BETTAG: HolidayRule =
    HolidayRule::new("Buß- und Bettag", Anchor::WednesdayBeforeNov23);
const ERSTER_WEIHNACHTSTAG: HolidayRule = HolidayRule::fixed("1. Weihnachtstag", 12, 25);
const ZWEITER_WEIHNACHTSTAG: HolidayRule = HolidayRule::fixed("2. Weihnachtstag", 12, 26);

/// Holidays observed in every state.
pub(crate) const NATIONWIDE: &[HolidayRule] = &[
    NEUJAHR,
    KARFREITAG,
    OSTERMONTAG,
    TAG_DER_ARBEIT,
    HIMMELFAHRT,
    PFINGSTMONTAG,
    DEUTSCHE_EINHEIT,
    // 500th anniversary of the Reformation.
    REFORMATIONSTAG.only(2017),
    ERSTER_WEIHNACHTSTAG,
    ZWEITER_WEIHNACHTSTAG,
];

const BW: &[HolidayRule] = &[HEILIGE_DREI_KOENIGE, FRONLEICHNAM, ALLERHEILIGEN];
const BY: &[HolidayRule] = &[
    HEILIGE_DREI_KOENIGE,
    FRONLEICHNAM,
    MARIAE_HIMMELFAHRT,
    ALLERHEILIGEN,
];
const BE: &[HolidayRule] = &[
    FRAUENTAG.since(2019),
    TAG_DER_BEFREIUNG.only(2020),
    TAG_DER_BEFREIUNG.only(2025),
];
const BB: &[HolidayRule] = &[OSTERSONNTAG, PFINGSTSONNTAG, REFORMATIONSTAG];
const HB: &[HolidayRule] = &[REFORMATIONSTAG.since(2018)];
const HH: &[HolidayRule] = &[REFORMATIONSTAG.since(2018)];
const HE: &[HolidayRule] = &[FRONLEICHNAM];
const MV: &[HolidayRule] = &[FRAUENTAG.since(2023), REFORMATIONSTAG];
const NI: &[HolidayRule] = &[REFORMATIONSTAG.since(2018)];
const NW: &[HolidayRule] = &[FRONLEICHNAM, ALLERHEILIGEN];
const RP: &[HolidayRule] = &[FRONLEICHNAM, ALLERHEILIGEN];
const SL: &[HolidayRule] = &[FRONLEICHNAM, MARIAE_HIMMELFAHRT, ALLERHEILIGEN];
const SN: &[HolidayRule] = &[REFORMATIONSTAG, BUSS_UND_BETTAG];
const ST: &[HolidayRule] = &[HEILIGE_DREI_KOENIGE, REFORMATIONSTAG];
const SH: &[HolidayRule] = &[REFORMATIONSTAG.since(2018)];
const TH: &[HolidayRule] = &[WELTKINDERTAG.since(2019), REFORMATIONSTAG];

/// Returns the state-specific rules on top of [`NATIONWIDE`].
pub(crate) fn regional(region: Region) -> &'static [HolidayRule] {
    match region {
        Region::BW => BW,
        Region::BY => BY,
        Region::BE => BE,
        Region::BB => BB,
        Region::HB => HB,
        Region::HH => HH,
        Region::HE => HE,
        Region::MV => MV,
        Region::NI => NI,
        Region::NW => NW,
        Region::RP => RP,
        Region::SL => SL,
        Region::SN => SN,
        Region::ST => ST,
        Region::SH => SH,
        Region::TH => TH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_years() {
        assert_eq!(easter_sunday(2000), Some(date(2000, 4, 23)));
        assert_eq!(easter_sunday(2019), Some(date(2019, 4, 21)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn easter_offsets() {
        assert_eq!(KARFREITAG.date_in(2026), Some(date(2026, 4, 3)));
        assert_eq!(HIMMELFAHRT.date_in(2026), Some(date(2026, 5, 14)));
        assert_eq!(PFINGSTMONTAG.date_in(2026), Some(date(2026, 5, 25)));
        assert_eq!(FRONLEICHNAM.date_in(2026), Some(date(2026, 6, 4)));
    }

    #[test]
    fn repentance_day_is_wednesday_between_16_and_22() {
        assert_eq!(BUSS_UND_BETTAG.date_in(2023), Some(date(2023, 11, 22)));
        assert_eq!(BUSS_UND_BETTAG.date_in(2024), Some(date(2024, 11, 20)));
        assert_eq!(BUSS_UND_BETTAG.date_in(2026), Some(date(2026, 11, 18)));
    }

    #[test]
    fn year_limits() {
        assert_eq!(REFORMATIONSTAG.since(2018).date_in(2017), None);
        assert_eq!(
            REFORMATIONSTAG.since(2018).date_in(2018),
            Some(date(2018, 10, 31))
        );
        assert_eq!(TAG_DER_BEFREIUNG.only(2020).date_in(2021), None);
    }

    #[test]
    fn regional_tables() {
        assert_eq!(regional(Region::BW).len(), 3);
        assert!(regional(Region::SN).contains(&BUSS_UND_BETTAG));
        assert!(!regional(Region::BE).contains(&FRONLEICHNAM));
    }
}
