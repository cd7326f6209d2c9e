//! Budget allocation hierarchy and its reconciliation rules.
//!
//! A project's cost flows down a fixed hierarchy:
//!
//! ```text
//! project cost
//!   └─ marketing (% of project cost)
//!        ├─ CP     (% of marketing amount)
//!        ├─ Other  (% of marketing amount)
//!        └─ planned budget = marketing - CP - Other
//!             └─ year N (% of planned budget)
//!                  └─ Q1..Q4 (even split of the year total)
//! ```
//!
//! Every edit goes through [`ReconciliationEngine`], which states exactly which
//! sibling fields it recomputes. [`validate_for_commit`] is the only hard gate
//! before a budget may be persisted.

pub mod edit;
pub mod error;
pub mod reconcile;
pub mod types;
pub mod validation;


pub use edit::{BudgetEdit, EditOutcome};
pub use error::AllocationError;
pub use reconcile::ReconciliationEngine;
pub use types::{
    AllocationState, BudgetCategory, BudgetOverview, CategoryAllocation, QUARTERS_PER_YEAR,
    QuarterRecord, YearRecord,
};
pub use validation::{QuarterMismatch, ValidationError, quarter_mismatch, validate_for_commit};
