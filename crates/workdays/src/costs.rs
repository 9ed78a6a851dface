//! Mileage and meal-allowance totals.

use crate::assignment::WorkdayAssignment;
use crate::customer::Customer;
use crate::error::WorkdayError;

/// Mileage reimbursement per kilometre (EUR).
pub const KM_RATE_PER_KM: f64 = 0.30;

/// Flat meal allowance for an absence of more than 8 hours (EUR per day).
pub const MEAL_ALLOWANCE_PER_DAY: f64 = 14.0;

/// Reimbursement rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    km: f64,
    meal_allowance: f64,
}

impl Rates {
    /// Creates a rate set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkdayError::InvalidRate`] for negative or non-finite rates.
    pub fn new(km: f64, meal_allowance: f64) -> Result<Self, WorkdayError> {
        for (name, value) in [("km", km), ("meal_allowance", meal_allowance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(WorkdayError::InvalidRate { name, value });
            }
        }
        Ok(Self { km, meal_allowance })
    }

    /// EUR per kilometre.
    pub fn km(self) -> f64 {
        self.km
    }

    /// EUR per business day.
    pub fn meal_allowance(self) -> f64 {
        self.meal_allowance
    }

    /// Mileage cost of a single day at `distance_km` (one way).
    pub fn mileage_per_day(self, distance_km: u32) -> f64 {
        f64::from(distance_km) * self.km
    }
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            km: KM_RATE_PER_KM,
            meal_allowance: MEAL_ALLOWANCE_PER_DAY,
        }
    }
}

/// Cost totals for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    per_customer_mileage: Vec<f64>,
    total_mileage: f64,
    total_meal_allowance: f64,
}

impl CostSummary {
    /// Mileage cost per customer, in input order.
    pub fn per_customer_mileage(&self) -> &[f64] {
        &self.per_customer_mileage
    }

    /// Sum of all customers' mileage costs.
    pub fn total_mileage(&self) -> f64 {
        self.total_mileage
    }

    /// Meal allowance over all assigned days.
    pub fn total_meal_allowance(&self) -> f64 {
        self.total_meal_allowance
    }
}

/// Computes mileage and meal-allowance totals for an assignment.
///
/// Per customer: `assigned days * one-way distance * km rate`. The meal
/// allowance is `flat daily rate * total assigned days`, independent of the
/// customer.
pub fn aggregate(
    customers: &[Customer],
    assignment: &WorkdayAssignment,
    rates: Rates,
) -> CostSummary {
    let per_customer_mileage: Vec<f64> = customers
        .iter()
        .enumerate()
        .map(|(i, c)| {
            assignment.days_for(i).len() as f64 * rates.mileage_per_day(c.distance_km())
        })
        .collect();
    let total_mileage = per_customer_mileage.iter().sum();
    let total_meal_allowance = assignment.total_days() as f64 * rates.meal_allowance();

    CostSummary {
        per_customer_mileage,
        total_mileage,
        total_meal_allowance,
    }
}
