//! Error types for the reisekosten-calendar crate.

/// Error type for all fallible operations in the reisekosten-calendar crate.
///
/// Region lookups never fail (unknown codes resolve to the default
/// region), so the only failures are malformed month or period values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The unrepresentable year.
        year: i32,
    },

    /// Returned when a period string is not of the form `M/YYYY` or `MM/YYYY`.
    #[error("invalid period {input:?}: expected M/YYYY or MM/YYYY")]
    InvalidPeriod {
        /// The rejected input.
        input: String,
    },
}
