//! Salary string parsing.
//!
//! This module turns human-friendly salary strings such as `"50K"`,
//! `"1.5M"` or `"12,000"` into decimal amounts.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SuffixMultiplier;

/// Message returned when the input is empty or only whitespace.
pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty.";

/// Message returned when the numeric part is not a number.
pub const INVALID_CHARACTERS_MESSAGE: &str = "Input contains invalid characters.";

/// Message returned when the amount does not fit the decimal range.
pub const INPUT_TOO_LARGE_MESSAGE: &str = "Input is too large.";

/// Parses a salary string into an amount.
///
/// Spaces and commas are removed first. If the last remaining character is
/// a magnitude suffix (`K`, `L`, `M` or `B`, any case) it is stripped and
/// the rest is scaled by the suffix multiplier. The numeric part may carry
/// a sign, a decimal point and an exponent (`1e3`).
///
/// Negative amounts are returned as-is; rejecting them is the calculator's
/// job.
///
/// # Errors
///
/// Returns `InvalidInput` if:
/// - the input is empty after trimming
/// - the numeric part is empty or not a number
/// - the number, or the number scaled by its suffix, does not fit the
///   decimal range
///
/// Exponents that push the value below the smallest representable
/// fraction round towards zero, as long fractions do.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::parser::parse_salary_input;
///
/// assert_eq!(parse_salary_input("50K").unwrap(), dec!(50000));
/// assert_eq!(parse_salary_input("1.5m").unwrap(), dec!(1500000));
/// assert_eq!(parse_salary_input("12,000").unwrap(), dec!(12000));
/// assert!(parse_salary_input("abc").is_err());
/// ```
pub fn parse_salary_input(input: &str) -> EngineResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_input(EMPTY_INPUT_MESSAGE));
    }

    let cleaned: String = trimmed.chars().filter(|c| !matches!(c, ' ' | ',')).collect();
    let (number, suffix) = split_suffix(&cleaned);
    let value = parse_number(number)?;

    match suffix {
        Some(suffix) => value
            .checked_mul(suffix.multiplier())
            .ok_or_else(|| EngineError::invalid_input(INPUT_TOO_LARGE_MESSAGE)),
        None => Ok(value),
    }
}

/// Splits a trailing magnitude suffix off the cleaned input.
fn split_suffix(cleaned: &str) -> (&str, Option<SuffixMultiplier>) {
    let suffix = cleaned.chars().next_back().and_then(SuffixMultiplier::from_char);

    match suffix {
        // Suffix letters are ASCII, so the last byte is the whole character.
        Some(suffix) => (&cleaned[..cleaned.len() - 1], Some(suffix)),
        None => (cleaned, None),
    }
}

fn parse_number(text: &str) -> EngineResult<Decimal> {
    let numeral =
        Numeral::split(text).ok_or_else(|| EngineError::invalid_input(INVALID_CHARACTERS_MESSAGE))?;
    let too_large = || EngineError::invalid_input(INPUT_TOO_LARGE_MESSAGE);

    // A well-formed mantissa only fails to parse when it has too many
    // integer digits. Extra fraction digits are rounded away.
    let mantissa = Decimal::from_str(&numeral.mantissa()).map_err(|_| too_large())?;

    match numeral.exponent() {
        Some(exponent) if exponent >= 0 => {
            let mut value = mantissa;
            for _ in 0..exponent {
                if value.is_zero() {
                    break;
                }
                value = value.checked_mul(Decimal::TEN).ok_or_else(too_large)?;
            }
            Ok(value.normalize())
        }
        Some(exponent) => {
            let mut value = mantissa;
            for _ in 0..exponent.unsigned_abs() {
                if value.is_zero() {
                    break;
                }
                value = value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO);
            }
            Ok(value)
        }
        None => Ok(mantissa),
    }
}

/// A number that is well formed: an optional sign, digits with at most one
/// decimal point, then an optional `e`/`E` exponent with its own sign.
struct Numeral<'a> {
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> Numeral<'a> {
    fn split(text: &'a str) -> Option<Self> {
        let (mantissa, exponent) = match text.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (text, None),
        };

        let negative = mantissa.starts_with('-');
        let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(whole) || !all_digits(fraction) {
            return None;
        }
        if let Some(exponent) = exponent {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
        }

        Some(Numeral {
            negative,
            whole,
            fraction,
            exponent,
        })
    }

    /// The mantissa in the plain form `Decimal::from_str` accepts.
    fn mantissa(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let whole = if self.whole.is_empty() { "0" } else { self.whole };
        if self.fraction.is_empty() {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{}", sign, whole, self.fraction)
        }
    }

    /// The exponent, saturated when it has more digits than an `i64` holds.
    fn exponent(&self) -> Option<i64> {
        self.exponent.map(|text| {
            text.parse::<i64>()
                .unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX })
        })
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
