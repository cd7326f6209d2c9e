//! Project repository for database operations.

use async_trait::async_trait;
use mbudget_core::session::{CollaboratorError, ProjectCostSource};
use mbudget_shared::types::{ProjectId, round_money};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use tracing::error;
use uuid::Uuid;

use super::collaborator_error;
use crate::entities::projects;

/// Project repository; the source of project costs for budget sessions.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: DatabaseConnection,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<projects::Model>, DbErr> {
        projects::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists all projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<projects::Model>, DbErr> {
        projects::Entity::find()
            .order_by_desc(projects::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Creates a project. Negative costs are stored as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, name: &str, project_cost: Decimal) -> Result<projects::Model, DbErr> {
        let now = chrono::Utc::now().into();

        projects::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
            project_cost: Set(round_money(project_cost.max(Decimal::ZERO))),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
    }
}

#[async_trait]
impl ProjectCostSource for ProjectRepository {
    async fn project_cost(&self, project_id: ProjectId) -> Result<Decimal, CollaboratorError> {
        match self.find_by_id(project_id.into_inner()).await {
            Ok(Some(project)) => Ok(project.project_cost),
            Ok(None) => Err(CollaboratorError::NotFound(format!(
                "Project {project_id} not found"
            ))),
            Err(e) => {
                error!(%project_id, error = %e, "Project cost lookup failed");
                Err(collaborator_error(&e))
            }
        }
    }
}
