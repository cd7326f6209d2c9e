//! Budget session lifecycle: open, edit, commit.

use mbudget_shared::config::SessionConfig;
use mbudget_shared::types::{ProjectId, coerce_count};
use tracing::{error, info, warn};

use super::error::CommitError;
use super::ports::{BudgetPersister, DefaultBudgetProvider, ProjectCostSource, Receipt};
use super::summary::BudgetSummary;
use crate::allocation::{
    AllocationError, AllocationState, BudgetEdit, BudgetOverview, EditOutcome,
    ReconciliationEngine, validate_for_commit,
};

/// One user's editing session over a project's budget.
///
/// Edits are applied one at a time; the session is the only writer of its state.
#[derive(Debug, Clone)]
pub struct BudgetSession {
    project_id: ProjectId,
    config: SessionConfig,
    state: AllocationState,
}

impl BudgetSession {
    /// Creates a session with zeroed figures and the configured number of years.
    #[must_use]
    pub fn new(project_id: ProjectId, config: SessionConfig) -> Self {
        Self {
            project_id,
            config,
            state: AllocationState::with_year_count(config.initial_year_count),
        }
    }

    /// Opens a session, seeding it with default percentages and the project cost.
    ///
    /// Both lookups run concurrently. A failed lookup is logged and leaves its
    /// figures at zero; the session opens either way.
    pub async fn open(
        project_id: ProjectId,
        config: SessionConfig,
        defaults: &dyn DefaultBudgetProvider,
        costs: &dyn ProjectCostSource,
    ) -> Self {
        let mut session = Self::new(project_id, config);

        let (defaults, cost) = tokio::join!(defaults.get_defaults(), costs.project_cost(project_id));

        match defaults {
            Ok(defaults) => ReconciliationEngine::set_default_percentages(
                &mut session.state,
                defaults.marketing_percent,
                defaults.cp_percent,
                defaults.other_percent,
            ),
            Err(e) => error!(%project_id, error = %e, "Failed to fetch default budget"),
        }

        match cost {
            Ok(cost) => ReconciliationEngine::set_project_cost(&mut session.state, cost),
            Err(e) => error!(%project_id, error = %e, "Failed to fetch project cost"),
        }

        info!(
            %project_id,
            project_cost = %session.state.project_cost,
            planned_budget = %session.state.planned_budget(),
            "Budget session opened"
        );
        session
    }

    /// The project this session budgets.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Current allocation state.
    #[must_use]
    pub const fn state(&self) -> &AllocationState {
        &self.state
    }

    /// Derived planned, used and remaining budget.
    #[must_use]
    pub fn overview(&self) -> BudgetOverview {
        self.state.overview()
    }

    /// Structured summary of the current state.
    #[must_use]
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from(&self.state)
    }

    /// Applies one edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit addresses a missing year or quarter, or asks for
    /// more years than the configured maximum. The state is unchanged in that case.
    pub fn apply(&mut self, edit: &BudgetEdit) -> Result<EditOutcome, AllocationError> {
        if let BudgetEdit::YearCount { value } = edit {
            let requested = coerce_count(value);
            if requested > self.config.max_year_count {
                return Err(AllocationError::TooManyYears {
                    requested,
                    max: self.config.max_year_count,
                });
            }
        }

        ReconciliationEngine::apply(&mut self.state, edit)
    }

    /// Validates the allocation and hands it to the persister.
    ///
    /// On success the years are reset to the configured initial count. On any
    /// failure the state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `CommitError::Validation` if the budget does not reconcile (the
    /// persister is not called), or `CommitError::Persistence` if the persister
    /// rejects it.
    pub async fn commit(
        &mut self,
        persister: &dyn BudgetPersister,
    ) -> Result<Receipt, CommitError> {
        if let Err(e) = validate_for_commit(&self.state) {
            warn!(project_id = %self.project_id, error = %e, "Budget commit blocked");
            return Err(CommitError::Validation(e));
        }

        let summary = self.summary();
        match persister.save(self.project_id, &summary).await {
            Ok(receipt) => {
                info!(
                    project_id = %self.project_id,
                    budget_id = %receipt.budget_id,
                    years = summary.years.len(),
                    "Budget saved"
                );
                self.reset();
                Ok(receipt)
            }
            Err(e) => {
                error!(project_id = %self.project_id, error = %e, "Failed to save budget");
                Err(CommitError::Persistence(e))
            }
        }
    }

    /// Discards all year data and starts over with the configured initial year count.
    pub fn reset(&mut self) {
        self.state.set_year_count(self.config.initial_year_count);
    }
}
