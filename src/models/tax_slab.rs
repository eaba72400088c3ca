//! Tax slab models for the Salary Engine.
//!
//! A tax schedule is an ordered list of [`TaxSlab`]s. Each slab taxes only
//! the slice of income between the previous slab's upper bound and its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One band of a progressive tax schedule.
///
/// The lower bound of a slab is the upper bound of the slab before it (zero
/// for the first slab). An `upper_bound` of `None` means the band is
/// unbounded and must be the last slab in its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// The income at which this band ends, or `None` for no limit.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate for income inside this band, in percent.
    pub rate_percent: Decimal,
}

impl TaxSlab {
    /// Creates a slab ending at a whole-unit `upper_bound`.
    pub const fn bounded(upper_bound: u32, rate_percent: u32) -> Self {
        Self {
            upper_bound: Some(Decimal::from_parts(upper_bound, 0, 0, false, 0)),
            rate_percent: Decimal::from_parts(rate_percent, 0, 0, false, 0),
        }
    }

    /// Creates the open-ended top slab.
    pub const fn unbounded(rate_percent: u32) -> Self {
        Self {
            upper_bound: None,
            rate_percent: Decimal::from_parts(rate_percent, 0, 0, false, 0),
        }
    }

    /// Checks that a schedule is well formed.
    ///
    /// A schedule is valid when it is non-empty, its upper bounds are
    /// strictly increasing and positive, only the last slab is unbounded,
    /// and every rate lies in `[0, 100]`.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{TAX_SLABS, TaxSlab};
    ///
    /// assert!(TaxSlab::validate_schedule(&TAX_SLABS).is_ok());
    /// ```
    pub fn validate_schedule(slabs: &[TaxSlab]) -> EngineResult<()> {
        if slabs.is_empty() {
            return Err(EngineError::invalid_input("Tax schedule must not be empty."));
        }

        let mut previous = Decimal::ZERO;

        for (index, slab) in slabs.iter().enumerate() {
            let position = index + 1;

            if slab.rate_percent < Decimal::ZERO || slab.rate_percent > Decimal::ONE_HUNDRED {
                return Err(EngineError::invalid_input(format!(
                    "Tax slab {} has rate {}% outside [0, 100].",
                    position, slab.rate_percent
                )));
            }

            match slab.upper_bound {
                None if position < slabs.len() => {
                    return Err(EngineError::invalid_input(format!(
                        "Tax slab {} is unbounded but is not the last slab.",
                        position
                    )));
                }
                None => {}
                Some(upper) => {
                    if upper <= previous {
                        return Err(EngineError::invalid_input(format!(
                            "Tax slab {} upper bound {} does not exceed {}.",
                            position, upper, previous
                        )));
                    }
                    previous = upper;
                }
            }
        }

        Ok(())
    }
}

/// The fixed progressive tax schedule.
///
/// | Band                | Rate |
/// |---------------------|------|
/// | 0 – 100,000         | 0%   |
/// | 100,000 – 150,000   | 6%   |
/// | 150,000 – 200,000   | 12%  |
/// | 200,000 – 250,000   | 18%  |
/// | 250,000 – 300,000   | 24%  |
/// | 300,000 – 350,000   | 30%  |
/// | above 350,000       | 36%  |
pub const TAX_SLABS: [TaxSlab; 7] = [
    TaxSlab::bounded(100_000, 0),
    TaxSlab::bounded(150_000, 6),
    TaxSlab::bounded(200_000, 12),
    TaxSlab::bounded(250_000, 18),
    TaxSlab::bounded(300_000, 24),
    TaxSlab::bounded(350_000, 30),
    TaxSlab::unbounded(36),
];

/// The tax charged by a single slab during a tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabCharge {
    /// Where the band starts.
    pub lower_bound: Decimal,
    /// Where the band ends, or `None` for the open-ended top band.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate, in percent.
    pub rate_percent: Decimal,
    /// The slice of income that fell inside this band.
    pub taxable_amount: Decimal,
    /// `taxable_amount * rate_percent / 100`, unrounded.
    pub tax: Decimal,
}

/// The outcome of a progressive tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// The income the tax was calculated on.
    pub taxable_income: Decimal,
    /// The total tax, unrounded.
    pub total: Decimal,
    /// One entry for each slab the income reached, in schedule order.
    pub charges: Vec<SlabCharge>,
}

impl TaxComputation {
    /// Returns the highest marginal rate the income reached, if any slab was.
    pub fn marginal_rate(&self) -> Option<Decimal> {
        self.charges.last().map(|charge| charge.rate_percent)
    }
}
