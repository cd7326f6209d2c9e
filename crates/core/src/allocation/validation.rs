//! Reconciliation checks for allocation states.
//!
//! [`validate_for_commit`] is the hard gate run before persistence. [`quarter_mismatch`]
//! is the advisory check run after quarter edits; it never blocks anything.

use mbudget_shared::types::{money_eq, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{AllocationState, YearRecord};

/// Commit-blocking reconciliation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Year totals do not add up to the planned budget.
    #[error(
        "Sum of all year totals ({actual:.2}) must exactly equal the Planned Budget ({expected:.2})."
    )]
    PlannedBudgetMismatch {
        /// Planned budget.
        expected: Decimal,
        /// Sum of the year totals.
        actual: Decimal,
    },

    /// A year's quarters do not add up to its total.
    #[error(
        "Sum of quarters for Year {year} ({actual:.2}) must equal that year's planned budget ({expected:.2})."
    )]
    YearQuarterMismatch {
        /// Year number.
        year: usize,
        /// The year's total budget.
        expected: Decimal,
        /// Sum of the year's quarters.
        actual: Decimal,
    },
}

/// Advisory raised when a year's quarters stop matching its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterMismatch {
    /// Year number.
    pub year: usize,
    /// The year's total budget.
    pub expected: Decimal,
    /// Sum of the year's quarters.
    pub actual: Decimal,
}

impl std::fmt::Display for QuarterMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sum of quarters ({:.2}) does not match the planned budget ({:.2}) for Year {}.",
            self.actual, self.expected, self.year
        )
    }
}

/// Checks whether a year's quarters disagree with its total.
///
/// Years without a positive total are never reported.
#[must_use]
pub fn quarter_mismatch(record: &YearRecord) -> Option<QuarterMismatch> {
    let sum = record.quarter_sum();
    if record.total_budget > Decimal::ZERO && !money_eq(sum, record.total_budget) {
        Some(QuarterMismatch {
            year: record.year,
            expected: round_money(record.total_budget),
            actual: round_money(sum),
        })
    } else {
        None
    }
}

/// Validates that an allocation reconciles to the cent.
///
/// Checks, in order:
/// 1. The year totals sum to the planned budget.
/// 2. Each year's quarters sum to that year's total. The first failing year is reported
///    and later years are not examined.
///
/// # Errors
///
/// Returns the first reconciliation failure found.
pub fn validate_for_commit(state: &AllocationState) -> Result<(), ValidationError> {
    let planned = state.planned_budget();
    let total_year_amount = state.used_budget();

    if !money_eq(total_year_amount, planned) {
        return Err(ValidationError::PlannedBudgetMismatch {
            expected: planned,
            actual: round_money(total_year_amount),
        });
    }

    for record in &state.years {
        let quarter_sum = record.quarter_sum();
        if !money_eq(quarter_sum, record.total_budget) {
            return Err(ValidationError::YearQuarterMismatch {
                year: record.year,
                expected: round_money(record.total_budget),
                actual: round_money(quarter_sum),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::types::CategoryAllocation;
    use rust_decimal_macros::dec;

    fn allocation(amount: Decimal) -> CategoryAllocation {
        CategoryAllocation {
            percent: Decimal::ZERO,
            amount,
        }
    }

    fn set_year(state: &mut AllocationState, year: usize, total: Decimal, quarters: [Decimal; 4]) {
        let record = state.year_mut(year).unwrap();
        record.total_budget = total;
        for (quarter, amount) in record.quarters.iter_mut().zip(quarters) {
            quarter.amount = amount;
        }
    }

    /// marketing 1000, cp 100, other 50 => planned 850, split 400 + 450.
    fn reconciled_state() -> AllocationState {
        let mut state = AllocationState {
            marketing: allocation(dec!(1000)),
            cp: allocation(dec!(100)),
            other: allocation(dec!(50)),
            ..AllocationState::default()
        };
        state.set_year_count(2);
        set_year(&mut state, 1, dec!(400), [dec!(100); 4]);
        set_year(
            &mut state,
            2,
            dec!(450),
            [dec!(112.50), dec!(112.50), dec!(112.50), dec!(112.50)],
        );
        state
    }

    #[test]
    fn test_reconciled_state_passes() {
        assert_eq!(validate_for_commit(&reconciled_state()), Ok(()));
    }

    #[test]
    fn test_year_totals_must_match_planned_budget() {
        let mut state = reconciled_state();
        set_year(&mut state, 2, dec!(451), [dec!(112.75); 4]);

        assert_eq!(
            validate_for_commit(&state),
            Err(ValidationError::PlannedBudgetMismatch {
                expected: dec!(850),
                actual: dec!(851),
            })
        );
    }

    #[test]
    fn test_quarter_mismatch_reports_first_year_only() {
        let mut state = reconciled_state();
        set_year(
            &mut state,
            1,
            dec!(400),
            [dec!(100), dec!(100), dec!(100), dec!(151)],
        );
        // Year 2 is broken as well, but validation stops at year 1.
        set_year(&mut state, 2, dec!(450), [dec!(1); 4]);

        assert_eq!(
            validate_for_commit(&state),
            Err(ValidationError::YearQuarterMismatch {
                year: 1,
                expected: dec!(400),
                actual: dec!(451),
            })
        );
    }

    #[test]
    fn test_quarter_mismatch_in_later_year() {
        let mut state = reconciled_state();
        set_year(
            &mut state,
            2,
            dec!(450),
            [dec!(112.50), dec!(112.50), dec!(112.50), dec!(113.50)],
        );

        assert!(matches!(
            validate_for_commit(&state),
            Err(ValidationError::YearQuarterMismatch { year: 2, .. })
        ));
    }

    #[test]
    fn test_sub_cent_differences_are_ignored() {
        let mut state = reconciled_state();
        set_year(
            &mut state,
            1,
            dec!(400),
            [dec!(100.001), dec!(100), dec!(100), dec!(99.999)],
        );
        assert_eq!(validate_for_commit(&state), Ok(()));
    }

    #[test]
    fn test_no_years_requires_zero_planned_budget() {
        let mut state = reconciled_state();
        state.set_year_count(0);
        assert!(matches!(
            validate_for_commit(&state),
            Err(ValidationError::PlannedBudgetMismatch { .. })
        ));

        assert_eq!(validate_for_commit(&AllocationState::default()), Ok(()));
    }

    #[test]
    fn test_quarter_mismatch_advisory() {
        let mut record = YearRecord::zeroed(1);
        assert_eq!(quarter_mismatch(&record), None);

        record.total_budget = dec!(400);
        record.quarters[0].amount = dec!(410);
        let advisory = quarter_mismatch(&record).unwrap();
        assert_eq!(advisory.year, 1);
        assert_eq!(advisory.expected, dec!(400));
        assert_eq!(advisory.actual, dec!(410));
        assert_eq!(
            advisory.to_string(),
            "Sum of quarters (410.00) does not match the planned budget (400.00) for Year 1."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::PlannedBudgetMismatch {
            expected: dec!(850),
            actual: dec!(800),
        };
        assert_eq!(
            err.to_string(),
            "Sum of all year totals (800.00) must exactly equal the Planned Budget (850.00)."
        );

        let err = ValidationError::YearQuarterMismatch {
            year: 2,
            expected: dec!(450),
            actual: dec!(451),
        };
        assert_eq!(
            err.to_string(),
            "Sum of quarters for Year 2 (451.00) must equal that year's planned budget (450.00)."
        );
    }
}
