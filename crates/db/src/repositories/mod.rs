//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each repository also implements one of the budget session collaborator traits.

pub mod budget_defaults;
pub mod marketing_budget;
pub mod project;

pub use budget_defaults::BudgetDefaultsRepository;
pub use marketing_budget::{BudgetRepoError, MarketingBudgetRepository, SavedBudget};
pub use project::ProjectRepository;

use mbudget_core::session::CollaboratorError;
use sea_orm::{DbErr, SqlErr};

/// Translates a database error into a message a budget editor can act on.
pub(crate) fn collaborator_error(err: &DbErr) -> CollaboratorError {
    match err {
        DbErr::RecordNotFound(message) => CollaboratorError::NotFound(message.clone()),
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            CollaboratorError::Unavailable("Database is unavailable, please try again".to_string())
        }
        _ => match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                CollaboratorError::NotFound("Project does not exist".to_string())
            }
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CollaboratorError::Rejected("Budget contains duplicate years".to_string())
            }
            _ => CollaboratorError::Unavailable(format!("Database error: {err}")),
        },
    }
}
