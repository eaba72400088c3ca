//! Calculation logic for the Salary Engine.
//!
//! This module contains the pure functions that turn a gross salary into a
//! [`SalaryBreakdown`](crate::models::SalaryBreakdown): EPF and ETF
//! contributions, progressive tax over the fixed slab schedule, and the
//! monetary rounding applied to the reported totals.

mod contributions;
mod progressive_tax;
mod rounding;
mod salary;

pub use contributions::{
    Contributions, EMPLOYEE_EPF_RATE, EMPLOYER_EPF_RATE, EMPLOYER_ETF_RATE,
    calculate_contributions,
};
pub use progressive_tax::{calculate_tax, calculate_tax_with_schedule};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use salary::{GROSS_TOO_LARGE_MESSAGE, NEGATIVE_GROSS_MESSAGE, calculate_salary};
