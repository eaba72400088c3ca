//! Progressive income tax calculation.
//!
//! This module applies the fixed [`TAX_SLABS`] schedule to an income. Each
//! slab's rate applies only to the slice of income inside that slab, so
//! crossing a boundary never raises the tax on income below it.

use rust_decimal::Decimal;

use crate::models::{SlabCharge, TAX_SLABS, TaxComputation, TaxSlab};

use super::contributions::percent_of;

/// Calculates progressive tax on an income using the fixed schedule.
///
/// The returned total is unrounded.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::calculate_tax;
///
/// let computation = calculate_tax(dec!(350000));
/// assert_eq!(computation.total, dec!(45000));
/// assert_eq!(computation.charges.len(), 6);
/// ```
pub fn calculate_tax(taxable_income: Decimal) -> TaxComputation {
    calculate_tax_with_schedule(taxable_income, &TAX_SLABS)
}

/// Calculates progressive tax on an income using an arbitrary schedule.
///
/// The schedule is expected to satisfy [`TaxSlab::validate_schedule`].
/// Income above the last bounded slab is untaxed when no unbounded slab
/// closes the schedule.
pub fn calculate_tax_with_schedule(taxable_income: Decimal, slabs: &[TaxSlab]) -> TaxComputation {
    let mut total = Decimal::ZERO;
    let mut charges = Vec::new();
    let mut lower_bound = Decimal::ZERO;

    for slab in slabs {
        if taxable_income > lower_bound {
            let band_top = match slab.upper_bound {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            let taxable_amount = band_top - lower_bound;
            let tax = percent_of(taxable_amount, slab.rate_percent);
            total += tax;

            charges.push(SlabCharge {
                lower_bound,
                upper_bound: slab.upper_bound,
                rate_percent: slab.rate_percent,
                taxable_amount,
                tax,
            });
        }

        match slab.upper_bound {
            Some(upper) => lower_bound = upper,
            None => break,
        }
    }

    TaxComputation {
        taxable_income,
        total,
        charges,
    }
}
