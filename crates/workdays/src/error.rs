//! Error types for the reisekosten-workdays crate.

/// Error type for all fallible operations in the reisekosten-workdays crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkdayError {
    /// Returned when distribution is requested for an empty customer list.
    #[error("no customers configured")]
    NoCustomers,

    /// Returned when a reimbursement rate is negative or not finite.
    #[error("invalid rate for {name}: {value} (must be finite and >= 0)")]
    InvalidRate {
        /// Name of the rate.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
