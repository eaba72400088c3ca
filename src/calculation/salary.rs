//! Salary breakdown calculation.
//!
//! This module combines the contribution and progressive tax calculations
//! into a single [`SalaryBreakdown`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryBreakdown;

use super::contributions::calculate_contributions;
use super::progressive_tax::calculate_tax;
use super::rounding::round_money;

/// Message returned when the gross salary is negative.
pub const NEGATIVE_GROSS_MESSAGE: &str = "Gross salary must be a positive number.";

/// Message returned when the breakdown does not fit the decimal range.
pub const GROSS_TOO_LARGE_MESSAGE: &str = "Gross salary is too large to calculate.";

/// Calculates the full salary breakdown for a gross salary.
///
/// Zero is accepted and yields an all-zero breakdown.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary in the base currency unit
///
/// # Returns
///
/// Returns a [`SalaryBreakdown`] on success, or `InvalidInput` if:
/// - `gross_salary` is negative
/// - the total benefit would exceed the representable decimal range
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::calculate_salary;
///
/// let breakdown = calculate_salary(dec!(350000)).unwrap();
/// assert_eq!(breakdown.tax, dec!(45000.00));
/// assert_eq!(breakdown.take_home_salary, dec!(277000.00));
/// assert_eq!(breakdown.total_benefit, dec!(402500.00));
///
/// assert!(calculate_salary(dec!(-5)).is_err());
/// ```
pub fn calculate_salary(gross_salary: Decimal) -> EngineResult<SalaryBreakdown> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(NEGATIVE_GROSS_MESSAGE));
    }

    let contributions = calculate_contributions(gross_salary);
    let tax = calculate_tax(gross_salary).total;

    let take_home_salary = gross_salary - contributions.employee_epf - tax;
    let total_benefit = gross_salary
        .checked_add(contributions.employer_total())
        .ok_or_else(|| EngineError::invalid_input(GROSS_TOO_LARGE_MESSAGE))?;

    Ok(SalaryBreakdown {
        gross_salary,
        employer_epf: contributions.employer_epf,
        employee_epf: contributions.employee_epf,
        employer_etf: contributions.employer_etf,
        tax: round_money(tax),
        take_home_salary: round_money(take_home_salary),
        total_benefit: round_money(total_benefit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakdownField;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_salary_at_first_boundary_has_no_tax() {
        let breakdown = calculate_salary(dec!(100000)).unwrap();

        assert_eq!(breakdown.gross_salary, dec!(100000));
        assert_eq!(breakdown.employer_epf, dec!(12000));
        assert_eq!(breakdown.employee_epf, dec!(8000));
        assert_eq!(breakdown.employer_etf, dec!(3000));
        assert_eq!(breakdown.tax, dec!(0.00));
        assert_eq!(breakdown.take_home_salary, dec!(92000.00));
        assert_eq!(breakdown.total_benefit, dec!(115000.00));
    }

    #[test]
    fn test_salary_at_top_bounded_slab() {
        let breakdown = calculate_salary(dec!(350000)).unwrap();

        assert_eq!(breakdown.tax, dec!(45000.00));
        assert_eq!(breakdown.take_home_salary, dec!(277000.00));
        assert_eq!(breakdown.total_benefit, dec!(402500.00));
    }

    #[test]
    fn test_salary_in_open_band() {
        let breakdown = calculate_salary(dec!(1500000)).unwrap();

        // 45,000 + 36% of 1,150,000
        assert_eq!(breakdown.tax, dec!(459000.00));
        assert_eq!(breakdown.take_home_salary, dec!(921000.00));
        assert_eq!(breakdown.total_benefit, dec!(1725000.00));
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let breakdown = calculate_salary(Decimal::ZERO).unwrap();

        for (field, value) in breakdown.iter() {
            assert_eq!(value, Decimal::ZERO, "{}", field);
        }
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = calculate_salary(dec!(-5)).unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Gross salary must be a positive number.");
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let mut negative_zero = Decimal::ZERO;
        negative_zero.set_sign_negative(true);
        assert!(calculate_salary(negative_zero).is_ok());
    }

    #[test]
    fn test_rounded_fields_and_unrounded_fields() {
        let breakdown = calculate_salary(dec!(123456.789)).unwrap();

        // Contributions keep full precision.
        assert_eq!(breakdown.gross_salary, dec!(123456.789));
        assert_eq!(breakdown.employer_epf, dec!(14814.81468));
        assert_eq!(breakdown.employee_epf, dec!(9876.54312));
        assert_eq!(breakdown.employer_etf, dec!(3703.70367));

        // tax = 6% of 23,456.789 = 1407.40734
        assert_eq!(breakdown.tax, dec!(1407.41));
        // 123456.789 - 9876.54312 - 1407.40734 = 112172.83854
        assert_eq!(breakdown.take_home_salary, dec!(112172.84));
        // 123456.789 * 1.15 = 141975.30735
        assert_eq!(breakdown.total_benefit, dec!(141975.31));
    }

    #[test]
    fn test_take_home_uses_unrounded_tax() {
        // tax = 0.0006, take-home = 100000.01 - 8000.0008 - 0.0006
        let breakdown = calculate_salary(dec!(100000.01)).unwrap();

        assert_eq!(breakdown.tax, dec!(0.00));
        assert_eq!(breakdown.take_home_salary, dec!(92000.01));
    }

    #[test]
    fn test_total_benefit_rounds_ties_to_even() {
        // 0.3 + 0.036 + 0.009 = 0.345
        let breakdown = calculate_salary(dec!(0.3)).unwrap();

        assert_eq!(breakdown.total_benefit, dec!(0.34));
    }

    #[test]
    fn test_get_matches_struct_fields() {
        let breakdown = calculate_salary(dec!(250000)).unwrap();

        assert_eq!(breakdown.get(BreakdownField::Tax), breakdown.tax);
        assert_eq!(
            breakdown.get(BreakdownField::TakeHomeSalary),
            breakdown.take_home_salary
        );
    }

    #[test]
    fn test_total_benefit_adds_employer_contributions() {
        let breakdown = calculate_salary(dec!(80000)).unwrap();

        assert_eq!(
            breakdown.total_benefit,
            round_money(dec!(80000) + calculate_contributions(dec!(80000)).employer_total())
        );
        assert_eq!(breakdown.total_benefit, dec!(92000.00));
    }

    #[test]
    fn test_overflowing_total_benefit_is_invalid_input() {
        let err = calculate_salary(Decimal::MAX).unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), GROSS_TOO_LARGE_MESSAGE);
    }
}
