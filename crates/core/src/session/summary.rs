//! Structured budget summary handed to the persister.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationState, CategoryAllocation, QuarterRecord, YearRecord};

/// Everything a persister needs to store a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Marketing percentage and amount.
    pub marketing: CategoryAllocation,
    /// CP percentage and amount.
    pub cp: CategoryAllocation,
    /// Other percentage and amount.
    pub other: CategoryAllocation,
    /// Marketing minus CP and Other.
    pub planned_budget: Decimal,
    /// Years in order, each with its quarters.
    pub years: Vec<YearDistribution>,
}

/// One year of a budget summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDistribution {
    /// 1-based year number.
    pub year: usize,
    /// Percentage of the planned budget.
    pub percent: Decimal,
    /// Budget allotted to the year.
    pub total_budget: Decimal,
    /// Lead generation target.
    pub lead_target: Decimal,
    /// Whether the quarters were edited by hand.
    pub manually_edited: bool,
    /// Quarters in order.
    pub quarters: Vec<QuarterDistribution>,
}

/// One quarter of a budget summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterDistribution {
    /// Label, `Y{year}Q{n}`.
    pub label: String,
    /// Quarter amount.
    pub amount: Decimal,
}

impl From<&QuarterRecord> for QuarterDistribution {
    fn from(quarter: &QuarterRecord) -> Self {
        Self {
            label: quarter.label.clone(),
            amount: quarter.amount,
        }
    }
}

impl From<&YearRecord> for YearDistribution {
    fn from(record: &YearRecord) -> Self {
        Self {
            year: record.year,
            percent: record.percent,
            total_budget: record.total_budget,
            lead_target: record.lead_target,
            manually_edited: record.manually_edited,
            quarters: record.quarters.iter().map(QuarterDistribution::from).collect(),
        }
    }
}

impl From<&AllocationState> for BudgetSummary {
    fn from(state: &AllocationState) -> Self {
        Self {
            marketing: state.marketing,
            cp: state.cp,
            other: state.other,
            planned_budget: state.planned_budget(),
            years: state.years.iter().map(YearDistribution::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::ReconciliationEngine;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_carries_every_year_and_quarter() {
        let mut state = AllocationState::with_year_count(2);
        ReconciliationEngine::set_default_percentages(&mut state, dec!(10), dec!(10), dec!(5));
        ReconciliationEngine::set_project_cost(&mut state, dec!(100000));
        ReconciliationEngine::set_year_total(&mut state, 2, dec!(800)).unwrap();
        ReconciliationEngine::set_lead_target(&mut state, 2, dec!(40)).unwrap();

        let summary = BudgetSummary::from(&state);

        assert_eq!(summary.marketing.amount, dec!(10000));
        assert_eq!(summary.cp.percent, dec!(10));
        assert_eq!(summary.other.amount, dec!(500));
        assert_eq!(summary.planned_budget, dec!(8500));
        assert_eq!(summary.years.len(), 2);

        let year_two = &summary.years[1];
        assert_eq!(year_two.year, 2);
        assert_eq!(year_two.total_budget, dec!(800));
        assert_eq!(year_two.lead_target, dec!(40));
        let labels: Vec<&str> = year_two.quarters.iter().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, ["Y2Q1", "Y2Q2", "Y2Q3", "Y2Q4"]);
        assert!(year_two.quarters.iter().all(|q| q.amount == dec!(200)));
    }

    #[test]
    fn test_summary_serializes_years_as_ordered_array() {
        let state = AllocationState::with_year_count(3);
        let value = serde_json::to_value(BudgetSummary::from(&state)).unwrap();

        let years = value["years"].as_array().unwrap();
        assert_eq!(years.len(), 3);
        assert_eq!(years[2]["year"], 3);
        assert_eq!(years[2]["quarters"][3]["label"], "Y3Q4");
    }
}
