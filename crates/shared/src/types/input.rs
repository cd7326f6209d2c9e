//! Lenient coercion of raw form input into numbers.
//!
//! Form fields may arrive empty, half-typed, or as free text. None of that is an error:
//! anything that does not read as a number becomes zero so the form stays renderable.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use super::money::{MONEY_LIMIT, clamp_money};

/// Parses a raw text field, falling back to zero.
///
/// Accepts plain decimals (`"12.50"`, `"-3"`) and scientific notation (`"1e3"`).
/// Surrounding whitespace is ignored. Values beyond [`MONEY_LIMIT`] in either direction
/// are clamped to it.
#[must_use]
pub fn coerce_decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|_| {
            tracing::debug!(input = %trimmed, "non-numeric input coerced to zero");
            Decimal::ZERO
        });

    if value.abs() > MONEY_LIMIT {
        tracing::debug!(input = %trimmed, limit = %MONEY_LIMIT, "out-of-range input clamped");
    }
    clamp_money(value)
}

/// Coerces a JSON form value: numbers and numeric strings parse, everything else is zero.
#[must_use]
pub fn coerce_json(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => coerce_decimal(&number.to_string()),
        Value::String(text) => coerce_decimal(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Decimal::ZERO,
    }
}

/// Coerces a JSON form value into a non-negative count.
///
/// Fractions are truncated toward zero and negatives become zero.
#[must_use]
pub fn coerce_count(value: &Value) -> usize {
    let number = coerce_json(value).trunc();
    if number <= Decimal::ZERO {
        return 0;
    }
    number.to_usize().unwrap_or(usize::MAX)
}
