//! `SeaORM` entity definitions.

pub mod prelude;

pub mod budget_defaults;
pub mod marketing_budget_years;
pub mod marketing_budgets;
pub mod projects;
