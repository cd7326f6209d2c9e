//! Common types used across the application.

pub mod id;
pub mod input;
pub mod money;

pub use id::*;
pub use input::{coerce_count, coerce_decimal, coerce_json};
pub use money::{
    MONEY_LIMIT, MONEY_SCALE, clamp_money, money_eq, percent_from, percent_of, round_money,
};
