//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// The number of decimal places reported for rounded breakdown fields.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to two decimal places, ties to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::round_money;
///
/// assert_eq!(round_money(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_money(dec!(123.456)), dec!(123.46));
/// assert_eq!(round_money(dec!(0.345)), dec!(0.34));
/// assert_eq!(round_money(dec!(0.355)), dec!(0.36));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
