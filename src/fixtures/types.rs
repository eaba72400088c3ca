//! Fixture data types.
//!
//! These types mirror the sections of a fixture file. Every section is
//! optional and defaults to empty.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Strings that must parse to an expected amount.
    #[serde(default)]
    pub valid_inputs: Vec<ValidInputCase>,
    /// Strings that must be rejected with an expected message.
    #[serde(default)]
    pub invalid_inputs: Vec<InvalidInputCase>,
    /// Gross salaries with expected breakdown fields.
    #[serde(default)]
    pub salary_calculations: Vec<SalaryCalculationCase>,
    /// Gross salaries with an expected tax.
    #[serde(default)]
    pub tax_calculation: Vec<TaxCalculationCase>,
}

impl FixtureSet {
    /// The total number of cases across all sections.
    pub fn case_count(&self) -> usize {
        self.valid_inputs.len()
            + self.invalid_inputs.len()
            + self.salary_calculations.len()
            + self.tax_calculation.len()
    }
}

/// A string the parser must accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidInputCase {
    /// The raw input string.
    pub input: String,
    /// The amount it must parse to.
    pub expected: Decimal,
}

/// A string the parser must reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidInputCase {
    /// The raw input string.
    pub input: String,
    /// The exact error message expected.
    pub expected_error: String,
}

/// A gross salary and some or all of its expected breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculationCase {
    /// The gross salary to calculate.
    pub gross_salary: Decimal,
    /// Expected values keyed by breakdown label, e.g. `"Take-home Salary"`.
    pub result: BTreeMap<String, Decimal>,
}

/// A gross salary and its expected rounded tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationCase {
    /// The gross salary to calculate.
    pub gross_salary: Decimal,
    /// The expected value of the `Tax` field.
    pub expected_tax: Decimal,
}
