//! Budget editing sessions and the collaborators they depend on.
//!
//! A session owns one [`AllocationState`](crate::allocation::AllocationState) for a
//! project. It is seeded from a [`DefaultBudgetProvider`] and a [`ProjectCostSource`],
//! edited through [`BudgetSession::apply`], and committed to a [`BudgetPersister`]
//! once it reconciles.

pub mod error;
pub mod ports;
pub mod service;
pub mod summary;

pub use error::CommitError;
pub use ports::{
    BudgetPersister, CollaboratorError, DefaultBudgetProvider, DefaultPercentages,
    ProjectCostSource, Receipt,
};
pub use service::BudgetSession;
pub use summary::{BudgetSummary, QuarterDistribution, YearDistribution};
