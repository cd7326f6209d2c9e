//! Edit commands addressed at individual fields of the hierarchy.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::BudgetCategory;
use super::validation::QuarterMismatch;

/// A single field edit, carrying the raw value as typed by the user.
///
/// Values are coerced leniently: anything that does not read as a number counts as zero.
///
/// ```
/// use mbudget_core::allocation::{BudgetCategory, BudgetEdit};
///
/// let edit: BudgetEdit =
///     serde_json::from_str(r#"{"field":"category_percent","category":"cp","value":"12.5"}"#)
///         .unwrap();
/// assert!(matches!(edit, BudgetEdit::CategoryPercent { category: BudgetCategory::Cp, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum BudgetEdit {
    /// New project cost.
    ProjectCost {
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New percentage for a category; its amount follows.
    CategoryPercent {
        /// Edited category.
        category: BudgetCategory,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New amount for a category; its percentage follows.
    CategoryAmount {
        /// Edited category.
        category: BudgetCategory,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New number of years. Discards all year data.
    YearCount {
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New total for a year; percentage and quarters follow.
    YearTotal {
        /// 1-based year number.
        year: usize,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New percentage for a year; total and quarters follow.
    YearPercent {
        /// 1-based year number.
        year: usize,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New amount for one quarter.
    QuarterAmount {
        /// 1-based year number.
        year: usize,
        /// Quarter label, e.g. `Y1Q3`.
        quarter: String,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
    /// New lead generation target for a year.
    LeadTarget {
        /// 1-based year number.
        year: usize,
        /// Raw value.
        #[serde(default)]
        value: Value,
    },
}

/// Result of applying an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The edit was applied and nothing needs the user's attention.
    Applied,
    /// The edit was applied, but a year's quarters no longer match its total.
    Advisory(QuarterMismatch),
}

impl EditOutcome {
    /// Returns the advisory raised by the edit, if any.
    #[must_use]
    pub const fn advisory(&self) -> Option<&QuarterMismatch> {
        match self {
            Self::Applied => None,
            Self::Advisory(mismatch) => Some(mismatch),
        }
    }
}
