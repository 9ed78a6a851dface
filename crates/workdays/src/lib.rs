//! Workday distribution engine for monthly travel expense reports.
//!
//! Given a target month, an ordered customer list (each with its own
//! regional holiday calendar) and a [`Policy`], this crate enumerates the
//! month's business days, assigns them round-robin to the customers and
//! computes the resulting mileage and meal-allowance totals.
//!
//! # Pipeline
//!
//! 1. **Calendars** - one [`BusinessCalendar`](reisekosten_calendar::BusinessCalendar)
//!    per customer region
//! 2. **Filter** - [`is_business_day`]: workday and, with the policy, not in
//!    the Dec 24 / Dec 27-31 closure
//! 3. **Distribute** - [`distribute`]: rotating cursor, advances on acceptance
//! 4. **Aggregate** - [`aggregate`]: per-customer mileage, totals

mod assignment;
mod costs;
mod customer;
mod distribute;
mod error;
mod filter;

pub use assignment::WorkdayAssignment;
pub use costs::{CostSummary, KM_RATE_PER_KM, MEAL_ALLOWANCE_PER_DAY, Rates, aggregate};
pub use customer::Customer;
pub use distribute::{customer_calendars, distribute};
pub use error::WorkdayError;
pub use filter::{Policy, in_closure_window, is_business_day};
