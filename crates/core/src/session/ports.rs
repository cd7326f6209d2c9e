//! Collaborator interfaces consumed by budget sessions.
//!
//! Implementations live outside this crate (see `mbudget-db`); the session only
//! depends on these traits.

use async_trait::async_trait;
use mbudget_shared::types::{BudgetId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::summary::BudgetSummary;

/// Default category percentages applied when a session opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultPercentages {
    /// Marketing, as a percentage of the project cost.
    pub marketing_percent: Decimal,
    /// CP, as a percentage of the marketing amount.
    pub cp_percent: Decimal,
    /// Other, as a percentage of the marketing amount.
    pub other_percent: Decimal,
}

/// Proof that a budget was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Identifier of the stored budget.
    pub budget_id: BudgetId,
}

/// Failure reported by a collaborator.
///
/// The message is meant for the user and is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The collaborator refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The collaborator could not be reached or failed internally.
    #[error("{0}")]
    Unavailable(String),
}

/// Supplies the default category percentages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefaultBudgetProvider: Send + Sync {
    /// Fetches the current defaults.
    async fn get_defaults(&self) -> Result<DefaultPercentages, CollaboratorError>;
}

/// Supplies a project's cost.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectCostSource: Send + Sync {
    /// Fetches the cost of the given project.
    async fn project_cost(&self, project_id: ProjectId) -> Result<Decimal, CollaboratorError>;
}

/// Persists a reconciled budget.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BudgetPersister: Send + Sync {
    /// Stores the budget for a project.
    async fn save(
        &self,
        project_id: ProjectId,
        summary: &BudgetSummary,
    ) -> Result<Receipt, CollaboratorError>;
}
