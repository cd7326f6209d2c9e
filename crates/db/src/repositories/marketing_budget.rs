//! Marketing budget repository: stores reconciled budgets with their year rows.

use async_trait::async_trait;
use mbudget_core::session::{
    BudgetPersister, BudgetSummary, CollaboratorError, Receipt, YearDistribution,
};
use mbudget_shared::types::{BudgetId, ProjectId};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, error};
use uuid::Uuid;

use super::collaborator_error;
use crate::entities::{marketing_budget_years, marketing_budgets};

/// Error types for marketing budget storage.
#[derive(Debug, thiserror::Error)]
pub enum BudgetRepoError {
    /// A year number or count does not fit its integer column.
    #[error("Year value {0} is out of range")]
    YearOutOfRange(usize),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BudgetRepoError> for CollaboratorError {
    fn from(err: BudgetRepoError) -> Self {
        match err {
            BudgetRepoError::YearOutOfRange(_) => Self::Rejected(err.to_string()),
            BudgetRepoError::Database(e) => collaborator_error(&e),
        }
    }
}

/// A stored budget header with its years in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedBudget {
    /// Budget header row.
    pub budget: marketing_budgets::Model,
    /// Year rows ordered by year number.
    pub years: Vec<marketing_budget_years::Model>,
}

/// Repository for saved marketing budgets.
#[derive(Debug, Clone)]
pub struct MarketingBudgetRepository {
    db: DatabaseConnection,
}

impl MarketingBudgetRepository {
    /// Creates a new marketing budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the budget header and one row per year in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `BudgetRepoError::YearOutOfRange` if a year number does not fit its column,
    /// or `BudgetRepoError::Database` if any insert fails. Nothing is stored in either case.
    pub async fn insert(
        &self,
        project_id: Uuid,
        summary: &BudgetSummary,
    ) -> Result<marketing_budgets::Model, BudgetRepoError> {
        let txn = self.db.begin().await?;

        let budget = marketing_budgets::ActiveModel {
            id: Set(Uuid::now_v7()),
            project_id: Set(project_id),
            marketing_percent: Set(summary.marketing.percent),
            marketing_amount: Set(summary.marketing.amount),
            cp_percent: Set(summary.cp.percent),
            cp_amount: Set(summary.cp.amount),
            other_percent: Set(summary.other.percent),
            other_amount: Set(summary.other.amount),
            planned_budget: Set(summary.planned_budget),
            year_count: Set(to_i32(summary.years.len())?),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        for year in &summary.years {
            Self::insert_year(&txn, budget.id, year).await?;
        }

        txn.commit().await?;
        Ok(budget)
    }

    async fn insert_year(
        txn: &DatabaseTransaction,
        budget_id: Uuid,
        year: &YearDistribution,
    ) -> Result<marketing_budget_years::Model, BudgetRepoError> {
        let quarter = |index: usize| year.quarters.get(index).map_or(Decimal::ZERO, |q| q.amount);

        marketing_budget_years::ActiveModel {
            id: Set(Uuid::now_v7()),
            budget_id: Set(budget_id),
            year_number: Set(to_i32(year.year)?),
            percent: Set(year.percent),
            total_budget: Set(year.total_budget),
            lead_target: Set(year.lead_target),
            q1: Set(quarter(0)),
            q2: Set(quarter(1)),
            q3: Set(quarter(2)),
            q4: Set(quarter(3)),
            manually_edited: Set(year.manually_edited),
        }
        .insert(txn)
        .await
        .map_err(BudgetRepoError::from)
    }

    /// Finds a saved budget with its years.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<SavedBudget>, DbErr> {
        let Some(budget) = marketing_budgets::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let years = marketing_budget_years::Entity::find()
            .filter(marketing_budget_years::Column::BudgetId.eq(budget.id))
            .order_by_asc(marketing_budget_years::Column::YearNumber)
            .all(&self.db)
            .await?;

        Ok(Some(SavedBudget { budget, years }))
    }

    /// Lists the budgets saved for a project, newest first, without their years.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<marketing_budgets::Model>, DbErr> {
        marketing_budgets::Entity::find()
            .filter(marketing_budgets::Column::ProjectId.eq(project_id))
            .order_by_desc(marketing_budgets::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}

fn to_i32(value: usize) -> Result<i32, BudgetRepoError> {
    i32::try_from(value).map_err(|_| BudgetRepoError::YearOutOfRange(value))
}

#[async_trait]
impl BudgetPersister for MarketingBudgetRepository {
    async fn save(
        &self,
        project_id: ProjectId,
        summary: &BudgetSummary,
    ) -> Result<Receipt, CollaboratorError> {
        match self.insert(project_id.into_inner(), summary).await {
            Ok(budget) => {
                debug!(%project_id, budget_id = %budget.id, "Marketing budget stored");
                Ok(Receipt {
                    budget_id: BudgetId::from(budget.id),
                })
            }
            Err(e) => {
                error!(%project_id, error = %e, "Failed to store marketing budget");
                Err(e.into())
            }
        }
    }
}
