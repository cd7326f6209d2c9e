//! Session error types.

use thiserror::Error;

use super::ports::CollaboratorError;
use crate::allocation::ValidationError;

/// Reasons a commit did not persist anything.
///
/// Either way the session keeps its state so the user can correct and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The allocation does not reconcile; the persister was never called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persister rejected the budget. Its message is passed through verbatim.
    #[error(transparent)]
    Persistence(CollaboratorError),
}
