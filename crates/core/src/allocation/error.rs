//! Allocation error types.

use thiserror::Error;

/// Errors raised when an edit cannot be applied.
///
/// Reconciliation itself never fails; these only report edits that address
/// something the state does not contain, or exceed a configured bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// No year with this number exists.
    #[error("Year {0} does not exist")]
    UnknownYear(usize),

    /// The year exists but has no quarter with this label.
    #[error("Quarter {label} does not exist in year {year}")]
    UnknownQuarter {
        /// Year number.
        year: usize,
        /// Requested quarter label.
        label: String,
    },

    /// Requested year count exceeds the configured maximum.
    #[error("Year count {requested} exceeds the maximum of {max}")]
    TooManyYears {
        /// Requested number of years.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },
}
