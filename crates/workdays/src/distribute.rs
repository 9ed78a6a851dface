//! Round-robin distribution of a month's business days.

use reisekosten_calendar::{BusinessCalendar, YearMonth};
use tracing::{debug, trace};

use crate::assignment::WorkdayAssignment;
use crate::customer::Customer;
use crate::error::WorkdayError;
use crate::filter::{Policy, is_business_day};

/// Builds one business calendar per customer from its region.
pub fn customer_calendars(customers: &[Customer], year: i32) -> Vec<BusinessCalendar> {
    customers
        .iter()
        .map(|c| BusinessCalendar::new(c.region(), year))
        .collect()
}

/// Distributes the business days of `period` across `customers`.
///
/// Days are visited in ascending order with a cursor starting at the first
/// customer. Each day is tested against the cursor customer's own calendar
/// only: if it qualifies it is assigned to that customer and the cursor
/// advances (wrapping), otherwise the day is dropped for everyone and the
/// cursor stays. Customers with diverging regional holidays can therefore
/// end up with uneven totals.
///
/// # Errors
///
/// Returns [`WorkdayError::NoCustomers`] if `customers` is empty.
#[tracing::instrument(skip(customers), fields(n_customers = customers.len()))]
pub fn distribute(
    period: YearMonth,
    customers: &[Customer],
    policy: Policy,
) -> Result<WorkdayAssignment, WorkdayError> {
    if customers.is_empty() {
        return Err(WorkdayError::NoCustomers);
    }

    let calendars = customer_calendars(customers, period.year());
    let mut days = vec![Vec::new(); customers.len()];
    let mut cursor = 0;

    for date in period.dates() {
        if is_business_day(&calendars[cursor], date, policy) {
            days[cursor].push(date);
            cursor = (cursor + 1) % customers.len();
        } else {
            trace!(%date, customer = customers[cursor].id(), "not a business day, skipped");
        }
    }

    let assignment = WorkdayAssignment::new(period, days);
    debug!(total_days = assignment.total_days(), "workdays distributed");
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reisekosten_calendar::Region;

    fn customer(id: &str, region: Region) -> Customer {
        Customer::new(id, format!("Customer {id}"), 10).with_region(region)
    }

    #[test]
    fn empty_customer_list_rejected() {
        let period = YearMonth::new(2026, 2).unwrap();
        assert_eq!(
            distribute(period, &[], Policy::default()).unwrap_err(),
            WorkdayError::NoCustomers
        );
    }

    #[test]
    fn alternates_between_two_customers() {
        let period = YearMonth::new(2026, 2).unwrap();
        let customers = [customer("1", Region::BW), customer("2", Region::BW)];
        let a = distribute(period, &customers, Policy::default()).unwrap();

        let feb = |d| NaiveDate::from_ymd_opt(2026, 2, d).unwrap();
        assert_eq!(&a.days_for(0)[..3], &[feb(2), feb(4), feb(6)]);
        assert_eq!(&a.days_for(1)[..3], &[feb(3), feb(5), feb(9)]);
    }

    #[test]
    fn calendars_follow_customer_regions() {
        let customers = [customer("1", Region::SN), customer("2", Region::HE)];
        let calendars = customer_calendars(&customers, 2026);
        assert_eq!(calendars[0].region(), Region::SN);
        assert_eq!(calendars[1].region(), Region::HE);
    }
}
