use chrono::NaiveDate;
use reisekosten_calendar::{BusinessCalendar, HolidaySet, Region};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn nationwide_holidays_in_every_region() {
    let nationwide = [
        date(2026, 1, 1),
        date(2026, 4, 3),
        date(2026, 4, 6),
        date(2026, 5, 1),
        date(2026, 5, 14),
        date(2026, 5, 25),
        date(2026, 10, 3),
        date(2026, 12, 25),
        date(2026, 12, 26),
    ];
    for region in Region::ALL {
        let set = HolidaySet::new(region, 2026);
        for day in nationwide {
            assert!(set.contains(day), "{region} missing {day}");
        }
    }
}

#[test]
fn epiphany_only_in_bw_by_st() {
    let epiphany = date(2026, 1, 6);
    for region in Region::ALL {
        let expected = matches!(region, Region::BW | Region::BY | Region::ST);
        assert_eq!(
            HolidaySet::new(region, 2026).contains(epiphany),
            expected,
            "Epiphany in {region}"
        );
    }
}

#[test]
fn corpus_christi_regions() {
    let corpus_christi = date(2026, 6, 4);
    let observing = [
        Region::BW,
        Region::BY,
        Region::HE,
        Region::NW,
        Region::RP,
        Region::SL,
    ];
    for region in Region::ALL {
        assert_eq!(
            HolidaySet::new(region, 2026).contains(corpus_christi),
            observing.contains(&region),
            "Fronleichnam in {region}"
        );
    }
}

#[test]
fn reformation_day_introduced_2018_in_the_north() {
    for region in [Region::HB, Region::HH, Region::NI, Region::SH] {
        assert!(HolidaySet::new(region, 2018).contains(date(2018, 10, 31)));
        assert!(!HolidaySet::new(region, 2016).contains(date(2016, 10, 31)));
    }
}

#[test]
fn regional_holiday_differs_between_calendars() {
    // Tuesday 6 January 2026: holiday in BW, ordinary workday in Berlin.
    let day = date(2026, 1, 6);
    assert!(!BusinessCalendar::new(Region::BW, 2026).is_workday(day));
    assert!(BusinessCalendar::new(Region::BE, 2026).is_workday(day));
}

#[test]
fn saxony_repentance_day() {
    let day = date(2026, 11, 18);
    assert!(!BusinessCalendar::new(Region::SN, 2026).is_workday(day));
    assert!(BusinessCalendar::new(Region::BY, 2026).is_workday(day));
}

#[test]
fn unknown_region_behaves_like_bw() {
    let fallback = BusinessCalendar::for_code("XX", 2026);
    let bw = BusinessCalendar::new(Region::BW, 2026);
    assert_eq!(fallback, bw);
}
