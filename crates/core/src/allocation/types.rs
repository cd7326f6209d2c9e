//! Allocation data types.

use mbudget_shared::types::{clamp_money, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of quarters every year is split into.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Budget category above the yearly split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Marketing share of the project cost.
    Marketing,
    /// Channel-partner share of the marketing amount.
    Cp,
    /// Other expenses, as a share of the marketing amount.
    Other,
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marketing => write!(f, "marketing"),
            Self::Cp => write!(f, "cp"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A percentage of some parent amount, and the amount it resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    /// Percentage of the parent amount.
    pub percent: Decimal,
    /// Resolved amount, rounded to cents.
    pub amount: Decimal,
}

/// One quarter of a year's budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterRecord {
    /// Display label, `Y{year}Q{n}`.
    pub label: String,
    /// Amount allotted to the quarter.
    pub amount: Decimal,
}

impl QuarterRecord {
    /// Creates a zero-amount quarter for the given 1-based year and quarter.
    #[must_use]
    pub fn zeroed(year: usize, quarter: usize) -> Self {
        Self {
            label: format!("Y{year}Q{quarter}"),
            amount: Decimal::ZERO,
        }
    }
}

/// One year of the planned budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    /// 1-based year number, matching the position in the sequence.
    pub year: usize,
    /// Percentage of the planned budget.
    pub percent: Decimal,
    /// Budget allotted to the year.
    pub total_budget: Decimal,
    /// Lead generation target for the year.
    pub lead_target: Decimal,
    /// The four quarters of the year.
    pub quarters: [QuarterRecord; QUARTERS_PER_YEAR],
    /// Set once a quarter is edited by hand, cleared by an even redistribution.
    pub manually_edited: bool,
    /// Set while a quarter mismatch advisory is outstanding for this year.
    pub warning_active: bool,
}

impl YearRecord {
    /// Creates a fresh year with every figure at zero.
    #[must_use]
    pub fn zeroed(year: usize) -> Self {
        Self {
            year,
            percent: Decimal::ZERO,
            total_budget: Decimal::ZERO,
            lead_target: Decimal::ZERO,
            quarters: std::array::from_fn(|i| QuarterRecord::zeroed(year, i + 1)),
            manually_edited: false,
            warning_active: false,
        }
    }

    /// Sum of the four quarter amounts.
    #[must_use]
    pub fn quarter_sum(&self) -> Decimal {
        self.quarters
            .iter()
            .map(|q| q.amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Finds a quarter by its label.
    pub fn quarter_mut(&mut self, label: &str) -> Option<&mut QuarterRecord> {
        self.quarters.iter_mut().find(|q| q.label == label)
    }
}

/// Derived budget figures, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// Project cost at the top of the hierarchy.
    pub project_cost: Decimal,
    /// Marketing amount minus CP and Other amounts.
    pub planned_budget: Decimal,
    /// Sum of all year totals.
    pub used_budget: Decimal,
    /// Planned minus used, floored at zero.
    pub remaining_budget: Decimal,
}

/// The whole allocation hierarchy for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationState {
    /// Project cost, supplied from outside.
    pub project_cost: Decimal,
    /// Marketing share of the project cost.
    pub marketing: CategoryAllocation,
    /// CP share of the marketing amount.
    pub cp: CategoryAllocation,
    /// Other share of the marketing amount.
    pub other: CategoryAllocation,
    /// Yearly split of the planned budget.
    pub years: Vec<YearRecord>,
}

impl AllocationState {
    /// Creates an empty state with `year_count` zeroed years.
    #[must_use]
    pub fn with_year_count(year_count: usize) -> Self {
        let mut state = Self::default();
        state.set_year_count(year_count);
        state
    }

    /// Replaces the years with `count` fresh zeroed years.
    ///
    /// Destructive: all existing year data is discarded, even when the count shrinks
    /// or stays the same.
    pub fn set_year_count(&mut self, count: usize) {
        self.years = (1..=count).map(YearRecord::zeroed).collect();
    }

    /// Number of planned years.
    #[must_use]
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Returns the allocation for a category.
    #[must_use]
    pub const fn category(&self, category: BudgetCategory) -> &CategoryAllocation {
        match category {
            BudgetCategory::Marketing => &self.marketing,
            BudgetCategory::Cp => &self.cp,
            BudgetCategory::Other => &self.other,
        }
    }

    /// Returns the allocation for a category, mutably.
    pub const fn category_mut(&mut self, category: BudgetCategory) -> &mut CategoryAllocation {
        match category {
            BudgetCategory::Marketing => &mut self.marketing,
            BudgetCategory::Cp => &mut self.cp,
            BudgetCategory::Other => &mut self.other,
        }
    }

    /// Looks up a year by its 1-based number.
    #[must_use]
    pub fn year(&self, year: usize) -> Option<&YearRecord> {
        self.years.iter().find(|y| y.year == year)
    }

    /// Looks up a year by its 1-based number, mutably.
    pub fn year_mut(&mut self, year: usize) -> Option<&mut YearRecord> {
        self.years.iter_mut().find(|y| y.year == year)
    }

    /// The pool available for yearly distribution, clamped to
    /// [`MONEY_LIMIT`](mbudget_shared::types::MONEY_LIMIT).
    #[must_use]
    pub fn planned_budget(&self) -> Decimal {
        clamp_money(round_money(
            self.marketing
                .amount
                .saturating_sub(self.cp.amount)
                .saturating_sub(self.other.amount),
        ))
    }

    /// Sum of all year totals.
    #[must_use]
    pub fn used_budget(&self) -> Decimal {
        self.years
            .iter()
            .map(|y| y.total_budget)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Planned budget not yet assigned to any year, never negative.
    #[must_use]
    pub fn remaining_budget(&self) -> Decimal {
        round_money(self.planned_budget().saturating_sub(self.used_budget())).max(Decimal::ZERO)
    }

    /// Snapshot of every derived figure.
    #[must_use]
    pub fn overview(&self) -> BudgetOverview {
        BudgetOverview {
            project_cost: self.project_cost,
            planned_budget: self.planned_budget(),
            used_budget: self.used_budget(),
            remaining_budget: self.remaining_budget(),
        }
    }
}
