//! Default budget percentage repository.

use async_trait::async_trait;
use mbudget_core::session::{CollaboratorError, DefaultBudgetProvider, DefaultPercentages};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use super::collaborator_error;
use crate::entities::budget_defaults;

/// Repository for the default category percentages.
#[derive(Debug, Clone)]
pub struct BudgetDefaultsRepository {
    db: DatabaseConnection,
}

impl BudgetDefaultsRepository {
    /// Creates a new budget defaults repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the newest active defaults row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active(&self) -> Result<Option<budget_defaults::Model>, DbErr> {
        budget_defaults::Entity::find()
            .filter(budget_defaults::Column::IsActive.eq(true))
            .order_by_desc(budget_defaults::Column::CreatedAt)
            .one(&self.db)
            .await
    }

    /// Replaces the active defaults: older rows are deactivated and a new row inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update or insert fails.
    pub async fn replace_active(
        &self,
        defaults: DefaultPercentages,
    ) -> Result<budget_defaults::Model, DbErr> {
        let txn = self.db.begin().await?;

        budget_defaults::Entity::update_many()
            .col_expr(budget_defaults::Column::IsActive, Expr::value(false))
            .filter(budget_defaults::Column::IsActive.eq(true))
            .exec(&txn)
            .await?;

        let inserted = budget_defaults::ActiveModel {
            id: Set(Uuid::now_v7()),
            marketing_percent: Set(defaults.marketing_percent),
            cp_percent: Set(defaults.cp_percent),
            other_percent: Set(defaults.other_percent),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(inserted)
    }
}

impl From<budget_defaults::Model> for DefaultPercentages {
    fn from(model: budget_defaults::Model) -> Self {
        Self {
            marketing_percent: model.marketing_percent,
            cp_percent: model.cp_percent,
            other_percent: model.other_percent,
        }
    }
}

#[async_trait]
impl DefaultBudgetProvider for BudgetDefaultsRepository {
    async fn get_defaults(&self) -> Result<DefaultPercentages, CollaboratorError> {
        match self.find_active().await {
            Ok(Some(model)) => Ok(model.into()),
            Ok(None) => Err(CollaboratorError::NotFound(
                "No default budget percentages configured".to_string(),
            )),
            Err(e) => {
                error!(error = %e, "Default budget lookup failed");
                Err(collaborator_error(&e))
            }
        }
    }
}
