//! Money arithmetic with fixed two-decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every helper here takes and returns `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every monetary and percentage field.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude any monetary or percentage field may hold.
///
/// `99 999 999 999 999 999.99` is the range of a `NUMERIC(19, 2)` column, so every
/// clamped value can be stored as-is.
pub const MONEY_LIMIT: Decimal =
    Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, MONEY_SCALE);

/// Clamps a value into `-MONEY_LIMIT..=MONEY_LIMIT`.
#[must_use]
pub fn clamp_money(value: Decimal) -> Decimal {
    value.clamp(-MONEY_LIMIT, MONEY_LIMIT)
}

/// Rounds a value to cents, halves away from zero.
///
/// This matches what a fixed-point display (`12.345` -> `12.35`) shows to the user,
/// so stored values never disagree with rendered ones.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `percent` percent of `parent`, rounded to cents and clamped to [`MONEY_LIMIT`].
#[must_use]
pub fn percent_of(parent: Decimal, percent: Decimal) -> Decimal {
    clamp_money(round_money(
        parent.saturating_mul(percent) / Decimal::ONE_HUNDRED,
    ))
}

/// Computes which percentage of `parent` the given `amount` represents.
///
/// A zero parent has no defined ratio; the result is `0` instead of NaN or infinity.
/// Ratios too large to represent are clamped to [`MONEY_LIMIT`].
#[must_use]
pub fn percent_from(amount: Decimal, parent: Decimal) -> Decimal {
    if parent.is_zero() {
        return Decimal::ZERO;
    }

    let percent = amount.checked_div(parent).map_or_else(
        || {
            if amount.is_sign_negative() == parent.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        },
        |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED),
    );
    clamp_money(round_money(percent))
}

/// Compares two values to the cent.
#[must_use]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    round_money(a) == round_money(b)
}
