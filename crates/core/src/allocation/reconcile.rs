//! Reconciliation of dependent fields after an edit.
//!
//! Each setter recomputes a fixed set of sibling fields and nothing else:
//!
//! | Edit                  | Recomputes                                              |
//! |-----------------------|---------------------------------------------------------|
//! | project cost          | marketing, CP and Other amounts (percentages kept)      |
//! | marketing percent     | marketing amount, then CP and Other amounts             |
//! | marketing amount      | marketing percent, then CP and Other amounts            |
//! | CP / Other percent    | that category's amount                                  |
//! | CP / Other amount     | that category's percent                                 |
//! | year total            | year percent, even quarter split                        |
//! | year percent          | year total, even quarter split                          |
//! | quarter amount        | manual-edit flag, mismatch advisory                     |
//! | lead target           | nothing                                                 |
//!
//! Years are never rebalanced when the planned budget moves; their totals and
//! percentages stay as last entered until the user edits them.

use mbudget_shared::types::{coerce_count, coerce_json, percent_from, percent_of, round_money};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::edit::{BudgetEdit, EditOutcome};
use super::error::AllocationError;
use super::types::{AllocationState, BudgetCategory, QUARTERS_PER_YEAR, YearRecord};
use super::validation::quarter_mismatch;

/// Applies edits to an [`AllocationState`] and keeps dependent fields consistent.
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    /// Applies a raw edit, coercing its value first.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit addresses a year or quarter that does not exist.
    /// The state is left untouched in that case.
    pub fn apply(
        state: &mut AllocationState,
        edit: &BudgetEdit,
    ) -> Result<EditOutcome, AllocationError> {
        match edit {
            BudgetEdit::ProjectCost { value } => {
                Self::set_project_cost(state, coerce_json(value));
                Ok(EditOutcome::Applied)
            }
            BudgetEdit::CategoryPercent { category, value } => {
                Self::set_category_percent(state, *category, coerce_json(value));
                Ok(EditOutcome::Applied)
            }
            BudgetEdit::CategoryAmount { category, value } => {
                Self::set_category_amount(state, *category, coerce_json(value));
                Ok(EditOutcome::Applied)
            }
            BudgetEdit::YearCount { value } => {
                state.set_year_count(coerce_count(value));
                Ok(EditOutcome::Applied)
            }
            BudgetEdit::YearTotal { year, value } => {
                Self::set_year_total(state, *year, coerce_json(value))
            }
            BudgetEdit::YearPercent { year, value } => {
                Self::set_year_percent(state, *year, coerce_json(value))
            }
            BudgetEdit::QuarterAmount {
                year,
                quarter,
                value,
            } => Self::set_quarter_amount(state, *year, quarter, coerce_json(value)),
            BudgetEdit::LeadTarget { year, value } => {
                Self::set_lead_target(state, *year, coerce_json(value))
            }
        }
    }

    /// Sets the project cost and re-derives every category amount from its percentage.
    ///
    /// Negative costs are treated as zero.
    pub fn set_project_cost(state: &mut AllocationState, cost: Decimal) {
        state.project_cost = round_money(cost.max(Decimal::ZERO));
        state.marketing.amount = percent_of(state.project_cost, state.marketing.percent);
        Self::derive_sub_category_amounts(state);
        Self::log_planned(state);
    }

    /// Sets all three category percentages and re-derives their amounts.
    pub fn set_default_percentages(
        state: &mut AllocationState,
        marketing: Decimal,
        cp: Decimal,
        other: Decimal,
    ) {
        state.marketing.percent = round_money(marketing);
        state.cp.percent = round_money(cp);
        state.other.percent = round_money(other);
        state.marketing.amount = percent_of(state.project_cost, state.marketing.percent);
        Self::derive_sub_category_amounts(state);
        Self::log_planned(state);
    }

    /// Sets a category percentage; its amount is recomputed from the parent.
    ///
    /// Editing marketing also moves the CP and Other amounts, since their parent changed.
    pub fn set_category_percent(
        state: &mut AllocationState,
        category: BudgetCategory,
        percent: Decimal,
    ) {
        let percent = round_money(percent);
        let parent = Self::parent_amount(state, category);
        let allocation = state.category_mut(category);
        allocation.percent = percent;
        allocation.amount = percent_of(parent, percent);

        if category == BudgetCategory::Marketing {
            Self::derive_sub_category_amounts(state);
        }
        Self::log_planned(state);
    }

    /// Sets a category amount; its percentage is recomputed against the parent.
    ///
    /// A zero parent yields a zero percentage. Editing marketing also moves the
    /// CP and Other amounts.
    pub fn set_category_amount(
        state: &mut AllocationState,
        category: BudgetCategory,
        amount: Decimal,
    ) {
        let parent = Self::parent_amount(state, category);
        let allocation = state.category_mut(category);
        allocation.amount = round_money(amount);
        allocation.percent = percent_from(amount, parent);

        if parent.is_zero() {
            debug!(%category, "percentage of a zero parent set to zero");
        }
        if category == BudgetCategory::Marketing {
            Self::derive_sub_category_amounts(state);
        }
        Self::log_planned(state);
    }

    /// Sets a year's total, recomputes its percentage of the planned budget, and splits
    /// it evenly across the quarters.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::UnknownYear` if the year does not exist.
    pub fn set_year_total(
        state: &mut AllocationState,
        year: usize,
        total: Decimal,
    ) -> Result<EditOutcome, AllocationError> {
        let planned = state.planned_budget();
        let record = state
            .year_mut(year)
            .ok_or(AllocationError::UnknownYear(year))?;

        record.total_budget = round_money(total);
        record.percent = if planned > Decimal::ZERO {
            percent_from(total, planned)
        } else {
            Decimal::ZERO
        };
        Self::split_evenly(record, total);

        Ok(EditOutcome::Applied)
    }

    /// Sets a year's percentage of the planned budget, recomputes its total, and splits
    /// the total evenly across the quarters.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::UnknownYear` if the year does not exist.
    pub fn set_year_percent(
        state: &mut AllocationState,
        year: usize,
        percent: Decimal,
    ) -> Result<EditOutcome, AllocationError> {
        let planned = state.planned_budget();
        let record = state
            .year_mut(year)
            .ok_or(AllocationError::UnknownYear(year))?;

        let percent = round_money(percent);
        let total = percent_of(planned, percent);
        record.percent = percent;
        record.total_budget = total;
        Self::split_evenly(record, total);

        Ok(EditOutcome::Applied)
    }

    /// Sets one quarter's amount and marks the year as manually edited.
    ///
    /// When the quarters stop matching the year total, an advisory is returned once;
    /// further edits stay quiet until the quarters match again or the year is
    /// redistributed.
    ///
    /// # Errors
    ///
    /// Returns an error if the year or the quarter label does not exist.
    pub fn set_quarter_amount(
        state: &mut AllocationState,
        year: usize,
        label: &str,
        amount: Decimal,
    ) -> Result<EditOutcome, AllocationError> {
        let record = state
            .year_mut(year)
            .ok_or(AllocationError::UnknownYear(year))?;
        let quarter = record
            .quarter_mut(label)
            .ok_or_else(|| AllocationError::UnknownQuarter {
                year,
                label: label.to_string(),
            })?;

        quarter.amount = round_money(amount);
        record.manually_edited = true;

        let mismatch = quarter_mismatch(record);
        let already_warned = record.warning_active;
        record.warning_active = mismatch.is_some();

        match mismatch {
            Some(mismatch) if !already_warned => {
                warn!(
                    year,
                    expected = %mismatch.expected,
                    actual = %mismatch.actual,
                    "quarter amounts no longer match the year total"
                );
                Ok(EditOutcome::Advisory(mismatch))
            }
            _ => Ok(EditOutcome::Applied),
        }
    }

    /// Sets a year's lead generation target. Nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::UnknownYear` if the year does not exist.
    pub fn set_lead_target(
        state: &mut AllocationState,
        year: usize,
        target: Decimal,
    ) -> Result<EditOutcome, AllocationError> {
        let record = state
            .year_mut(year)
            .ok_or(AllocationError::UnknownYear(year))?;
        record.lead_target = target;
        Ok(EditOutcome::Applied)
    }

    /// The amount a category's percentage refers to.
    const fn parent_amount(state: &AllocationState, category: BudgetCategory) -> Decimal {
        match category {
            BudgetCategory::Marketing => state.project_cost,
            BudgetCategory::Cp | BudgetCategory::Other => state.marketing.amount,
        }
    }

    fn derive_sub_category_amounts(state: &mut AllocationState) {
        let marketing = state.marketing.amount;
        state.cp.amount = percent_of(marketing, state.cp.percent);
        state.other.amount = percent_of(marketing, state.other.percent);
    }

    /// Each quarter gets a quarter of `total`, rounded to cents.
    ///
    /// Rounding can leave the quarters a few cents off the total; commit validation
    /// catches that.
    fn split_evenly(record: &mut YearRecord, total: Decimal) {
        let per_quarter = round_money(total / Decimal::from(QUARTERS_PER_YEAR));
        for quarter in &mut record.quarters {
            quarter.amount = per_quarter;
        }
        record.manually_edited = false;
        record.warning_active = false;
    }

    fn log_planned(state: &AllocationState) {
        debug!(
            marketing = %state.marketing.amount,
            cp = %state.cp.amount,
            other = %state.other.amount,
            planned = %state.planned_budget(),
            "category amounts reconciled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::validate_for_commit;
    use mbudget_shared::types::MONEY_LIMIT;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    /// Project cost 100 000 with 10% marketing, 10% CP and 5% Other.
    fn seeded_state(years: usize) -> AllocationState {
        let mut state = AllocationState::with_year_count(years);
        ReconciliationEngine::set_default_percentages(&mut state, dec!(10), dec!(10), dec!(5));
        ReconciliationEngine::set_project_cost(&mut state, dec!(100000));
        state
    }

    #[test]
    fn test_project_cost_derives_category_amounts() {
        let state = seeded_state(1);
        assert_eq!(state.marketing.amount, dec!(10000));
        assert_eq!(state.cp.amount, dec!(1000));
        assert_eq!(state.other.amount, dec!(500));
        assert_eq!(state.planned_budget(), dec!(8500));
    }

    #[test]
    fn test_project_cost_keeps_percentages() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_project_cost(&mut state, dec!(50000));
        assert_eq!(state.marketing.percent, dec!(10));
        assert_eq!(state.marketing.amount, dec!(5000));
        assert_eq!(state.cp.amount, dec!(500));
        assert_eq!(state.other.amount, dec!(250));
    }

    #[test]
    fn test_negative_project_cost_is_zero() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_project_cost(&mut state, dec!(-10));
        assert_eq!(state.project_cost, Decimal::ZERO);
        assert_eq!(state.marketing.amount, Decimal::ZERO);
    }

    #[test]
    fn test_marketing_percent_moves_sub_categories() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_category_percent(
            &mut state,
            BudgetCategory::Marketing,
            dec!(20),
        );
        assert_eq!(state.marketing.amount, dec!(20000));
        assert_eq!(state.cp.amount, dec!(2000));
        assert_eq!(state.other.amount, dec!(1000));
        assert_eq!(state.cp.percent, dec!(10));
    }

    #[test]
    fn test_marketing_amount_recomputes_percent() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_category_amount(
            &mut state,
            BudgetCategory::Marketing,
            dec!(12345.678),
        );
        assert_eq!(state.marketing.amount, dec!(12345.68));
        assert_eq!(state.marketing.percent, dec!(12.35));
        assert_eq!(state.cp.amount, dec!(1234.57));
    }

    #[test]
    fn test_cp_percent_is_relative_to_marketing() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_category_percent(&mut state, BudgetCategory::Cp, dec!(25));
        assert_eq!(state.cp.amount, dec!(2500));
        assert_eq!(state.marketing.amount, dec!(10000));
    }

    #[test]
    fn test_other_amount_recomputes_percent() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_category_amount(&mut state, BudgetCategory::Other, dec!(750));
        assert_eq!(state.other.percent, dec!(7.50));
        assert_eq!(state.planned_budget(), dec!(8250));
    }

    #[test]
    fn test_amount_against_zero_parent_gives_zero_percent() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_category_amount(
            &mut state,
            BudgetCategory::Marketing,
            dec!(500),
        );
        assert_eq!(state.marketing.amount, dec!(500));
        assert_eq!(state.marketing.percent, Decimal::ZERO);

        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_category_amount(&mut state, BudgetCategory::Cp, dec!(50));
        assert_eq!(state.cp.amount, dec!(50));
        assert_eq!(state.cp.percent, Decimal::ZERO);
    }

    #[test]
    fn test_category_edits_do_not_rebalance_years() {
        let mut state = seeded_state(2);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(4000)).unwrap();
        let before = state.years.clone();

        ReconciliationEngine::set_category_percent(
            &mut state,
            BudgetCategory::Marketing,
            dec!(50),
        );

        assert_eq!(state.years, before);
        assert_eq!(state.planned_budget(), dec!(42500));
    }

    #[test]
    fn test_year_total_splits_evenly() {
        let mut state = seeded_state(2);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();

        let year = state.year(1).unwrap();
        assert_eq!(year.total_budget, dec!(400));
        assert!(year.quarters.iter().all(|q| q.amount == dec!(100)));
        assert_eq!(year.percent, dec!(4.71));
        assert!(!year.manually_edited);
        assert_eq!(state.year(2).unwrap().total_budget, Decimal::ZERO);
    }

    #[test]
    fn test_year_total_without_planned_budget_has_zero_percent() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();
        let year = state.year(1).unwrap();
        assert_eq!(year.percent, Decimal::ZERO);
        assert_eq!(year.total_budget, dec!(400));
    }

    #[test]
    fn test_year_total_rounding_can_leave_quarters_short() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(100.01)).unwrap();
        let year = state.year(1).unwrap();
        assert!(year.quarters.iter().all(|q| q.amount == dec!(25.00)));
        assert_eq!(year.quarter_sum(), dec!(100.00));
    }

    #[test]
    fn test_year_percent_recomputes_total() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_percent(&mut state, 1, dec!(50)).unwrap();
        let year = state.year(1).unwrap();
        assert_eq!(year.percent, dec!(50));
        assert_eq!(year.total_budget, dec!(4250));
        assert!(year.quarters.iter().all(|q| q.amount == dec!(1062.50)));
    }

    #[test]
    fn test_category_percent_amount_follows_rounded_percent() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_project_cost(&mut state, dec!(1000000));
        ReconciliationEngine::set_category_percent(
            &mut state,
            BudgetCategory::Marketing,
            dec!(10.005),
        );
        assert_eq!(state.marketing.percent, dec!(10.01));
        assert_eq!(state.marketing.amount, dec!(100100.00));

        // Re-deriving from the stored percentage must land on the same amount.
        ReconciliationEngine::set_project_cost(&mut state, dec!(1000000));
        assert_eq!(state.marketing.amount, dec!(100100.00));
    }

    #[test]
    fn test_year_percent_total_follows_rounded_percent() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_category_amount(
            &mut state,
            BudgetCategory::Marketing,
            dec!(1000000),
        );
        assert_eq!(state.planned_budget(), dec!(1000000));

        ReconciliationEngine::set_year_percent(&mut state, 1, dec!(33.335)).unwrap();
        let year = state.year(1).unwrap();
        assert_eq!(year.percent, dec!(33.34));
        assert_eq!(year.total_budget, dec!(333400.00));
        assert_eq!(year.total_budget, percent_of(state.planned_budget(), year.percent));
    }

    #[test]
    fn test_unknown_year_is_rejected() {
        let mut state = seeded_state(1);
        let before = state.clone();
        assert_eq!(
            ReconciliationEngine::set_year_total(&mut state, 2, dec!(10)),
            Err(AllocationError::UnknownYear(2))
        );
        assert_eq!(
            ReconciliationEngine::set_lead_target(&mut state, 0, dec!(10)),
            Err(AllocationError::UnknownYear(0))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_quarter_is_rejected() {
        let mut state = seeded_state(1);
        assert_eq!(
            ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y2Q1", dec!(10)),
            Err(AllocationError::UnknownQuarter {
                year: 1,
                label: "Y2Q1".to_string(),
            })
        );
    }

    #[test]
    fn test_quarter_mismatch_warns_once_per_episode() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();

        let first = ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q1", dec!(110));
        let advisory = first.unwrap();
        assert_eq!(advisory.advisory().map(|m| m.actual), Some(dec!(410)));
        assert!(state.year(1).unwrap().manually_edited);
        assert!(state.year(1).unwrap().warning_active);

        let second = ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q2", dec!(120));
        assert_eq!(second, Ok(EditOutcome::Applied));

        // Fixing the sum ends the episode; breaking it again warns again.
        ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q1", dec!(100)).unwrap();
        ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q2", dec!(100)).unwrap();
        assert!(!state.year(1).unwrap().warning_active);

        let third = ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q4", dec!(90));
        assert!(matches!(third, Ok(EditOutcome::Advisory(_))));
    }

    #[test]
    fn test_quarter_edit_on_zero_total_never_warns() {
        let mut state = seeded_state(1);
        let outcome = ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q3", dec!(50));
        assert_eq!(outcome, Ok(EditOutcome::Applied));
        assert!(state.year(1).unwrap().manually_edited);
        assert!(!state.year(1).unwrap().warning_active);
    }

    #[test]
    fn test_redistribution_clears_manual_flags() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();
        ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q1", dec!(150)).unwrap();

        ReconciliationEngine::set_year_percent(&mut state, 1, dec!(10)).unwrap();

        let year = state.year(1).unwrap();
        assert!(!year.manually_edited);
        assert!(!year.warning_active);
        assert_eq!(year.quarter_sum(), year.total_budget);
    }

    #[test]
    fn test_lead_target_changes_nothing_else() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();
        let before = state.year(1).unwrap().clone();

        ReconciliationEngine::set_lead_target(&mut state, 1, dec!(250)).unwrap();

        let after = state.year(1).unwrap();
        assert_eq!(after.lead_target, dec!(250));
        assert_eq!(after.total_budget, before.total_budget);
        assert_eq!(after.quarters, before.quarters);
    }

    #[test]
    fn test_apply_coerces_raw_values() {
        let mut state = seeded_state(1);

        ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::CategoryPercent {
                category: BudgetCategory::Cp,
                value: json!("not a number"),
            },
        )
        .unwrap();
        assert_eq!(state.cp.percent, Decimal::ZERO);
        assert_eq!(state.cp.amount, Decimal::ZERO);

        ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::YearCount {
                value: json!("3"),
            },
        )
        .unwrap();
        assert_eq!(state.year_count(), 3);

        let outcome = ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::YearTotal {
                year: 3,
                value: json!(" 900 "),
            },
        );
        assert_eq!(outcome, Ok(EditOutcome::Applied));
        assert_eq!(state.year(3).unwrap().total_budget, dec!(900));
    }

    #[rstest]
    #[case(json!(2), 2)]
    #[case(json!("4"), 4)]
    #[case(json!(2.9), 2)]
    #[case(json!(-3), 0)]
    #[case(json!("three"), 0)]
    #[case(Value::Null, 0)]
    fn test_apply_year_count_values(#[case] value: Value, #[case] expected: usize) {
        let mut state = seeded_state(1);

        ReconciliationEngine::apply(&mut state, &BudgetEdit::YearCount { value }).unwrap();

        assert_eq!(state.year_count(), expected);
    }

    #[test]
    fn test_apply_quarter_edit_reports_advisory() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();

        let outcome = ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::QuarterAmount {
                year: 1,
                quarter: "Y1Q2".to_string(),
                value: json!(110),
            },
        )
        .unwrap();

        assert_eq!(
            outcome.advisory().cloned(),
            Some(crate::allocation::QuarterMismatch {
                year: 1,
                expected: dec!(400),
                actual: dec!(410),
            })
        );
    }

    #[test]
    fn test_oversized_quarter_edits_are_clamped() {
        let mut state = seeded_state(1);
        ReconciliationEngine::set_year_total(&mut state, 1, dec!(400)).unwrap();

        for label in ["Y1Q1", "Y1Q2"] {
            ReconciliationEngine::apply(
                &mut state,
                &BudgetEdit::QuarterAmount {
                    year: 1,
                    quarter: label.to_string(),
                    value: json!("79228162514264337593543950335"),
                },
            )
            .unwrap();
        }

        let year = state.year(1).unwrap();
        assert_eq!(year.quarters[0].amount, MONEY_LIMIT);
        assert_eq!(year.quarters[1].amount, MONEY_LIMIT);
        assert_eq!(year.quarter_sum(), dec!(200000000000000199.98));
        assert!(validate_for_commit(&state).is_err());
    }

    #[test]
    fn test_opposite_extreme_categories_keep_overview_computable() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::CategoryAmount {
                category: BudgetCategory::Marketing,
                value: json!("79228162514264337593543950335"),
            },
        )
        .unwrap();
        ReconciliationEngine::apply(
            &mut state,
            &BudgetEdit::CategoryAmount {
                category: BudgetCategory::Cp,
                value: json!("-79228162514264337593543950335"),
            },
        )
        .unwrap();

        let overview = state.overview();
        assert_eq!(state.marketing.amount, MONEY_LIMIT);
        assert_eq!(state.cp.amount, -MONEY_LIMIT);
        assert_eq!(overview.planned_budget, MONEY_LIMIT);
        assert_eq!(overview.remaining_budget, MONEY_LIMIT);
    }

    #[test]
    fn test_unbounded_engine_input_saturates() {
        let mut state = AllocationState::with_year_count(1);
        ReconciliationEngine::set_category_amount(
            &mut state,
            BudgetCategory::Marketing,
            Decimal::MAX,
        );
        ReconciliationEngine::set_category_amount(&mut state, BudgetCategory::Cp, Decimal::MIN);
        ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q1", Decimal::MAX).unwrap();
        ReconciliationEngine::set_quarter_amount(&mut state, 1, "Y1Q2", Decimal::MAX).unwrap();

        assert_eq!(state.planned_budget(), MONEY_LIMIT);
        assert_eq!(state.year(1).unwrap().quarter_sum(), Decimal::MAX);
    }
}
