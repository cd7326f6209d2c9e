//! Entity re-exports.

pub use super::budget_defaults::Entity as BudgetDefaults;
pub use super::marketing_budget_years::Entity as MarketingBudgetYears;
pub use super::marketing_budgets::Entity as MarketingBudgets;
pub use super::projects::Entity as Projects;
