//! EPF and ETF contribution calculation.
//!
//! All three contributions are flat percentages of gross salary. They are
//! returned at full precision; rounding happens only when a value is shown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer EPF contribution, percent of gross.
pub const EMPLOYER_EPF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Employee EPF contribution, percent of gross.
pub const EMPLOYEE_EPF_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Employer ETF contribution, percent of gross.
pub const EMPLOYER_ETF_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// The three retirement contributions for a gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    /// Employer EPF (12% of gross).
    pub employer_epf: Decimal,
    /// Employee EPF (8% of gross).
    pub employee_epf: Decimal,
    /// Employer ETF (3% of gross).
    pub employer_etf: Decimal,
}

impl Contributions {
    /// The sum of the employer-side contributions.
    pub fn employer_total(&self) -> Decimal {
        self.employer_epf + self.employer_etf
    }
}

/// Calculates the EPF and ETF contributions for a gross salary.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::calculate_contributions;
///
/// let contributions = calculate_contributions(dec!(100000));
/// assert_eq!(contributions.employer_epf, dec!(12000));
/// assert_eq!(contributions.employee_epf, dec!(8000));
/// assert_eq!(contributions.employer_etf, dec!(3000));
/// ```
pub fn calculate_contributions(gross_salary: Decimal) -> Contributions {
    Contributions {
        employer_epf: percent_of(gross_salary, EMPLOYER_EPF_RATE),
        employee_epf: percent_of(gross_salary, EMPLOYEE_EPF_RATE),
        employer_etf: percent_of(gross_salary, EMPLOYER_ETF_RATE),
    }
}

pub(crate) fn percent_of(amount: Decimal, rate_percent: Decimal) -> Decimal {
    amount * (rate_percent / Decimal::ONE_HUNDRED)
}
