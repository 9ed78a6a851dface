//! # reisekosten-calendar
//!
//! Gregorian month arithmetic and public-holiday calendars for the 16
//! German federal states.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["region code"] -->|"Region::from_code()"| B["Region"]
//!     B -->|"HolidaySet::new(year)"| C["HolidaySet"]
//!     C --> D["BusinessCalendar"]
//!     D -->|".is_workday(date)"| E["bool"]
//!     F["(year, month)"] -->|"YearMonth::new()"| G["YearMonth"]
//!     G -->|".dates()"| H["NaiveDate iterator"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use reisekosten_calendar::{BusinessCalendar, Region, YearMonth, days_in_month};
//!
//! // Unknown codes never fail; they resolve to Baden-Württemberg.
//! assert_eq!(Region::from_code("XX"), Region::BW);
//!
//! let cal = BusinessCalendar::new(Region::BY, 2026);
//! let friday = NaiveDate::from_ymd_opt(2026, 8, 14).unwrap();
//! assert!(cal.is_workday(friday));
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! let feb: YearMonth = "2/2026".parse().unwrap();
//! assert_eq!(feb.days(), 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `region` | Federal state codes and the default-region fallback |
//! | `rules` | Static holiday rule tables and Easter computation |
//! | `holiday` | Holiday set for one region and year |
//! | `business` | Weekend/holiday/workday queries |
//! | `month` | Leap years, days in month, `YearMonth` |
//! | `error` | Error types |

mod business;
mod error;
mod holiday;
mod month;
mod region;
mod rules;

pub use business::BusinessCalendar;
pub use error::CalendarError;
pub use holiday::HolidaySet;
pub use month::{YearMonth, days_in_month, is_leap_year};
pub use region::Region;
pub use rules::easter_sunday;
