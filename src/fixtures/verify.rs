//! Runs fixture cases against the parser and calculator.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculation::{calculate_salary, round_money};
use crate::models::BreakdownField;
use crate::parser::parse_salary_input;

use super::types::{
    FixtureSet, InvalidInputCase, SalaryCalculationCase, TaxCalculationCase, ValidInputCase,
};

/// The section of a fixture file a case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureSection {
    /// `valid_inputs`
    ValidInputs,
    /// `invalid_inputs`
    InvalidInputs,
    /// `salary_calculations`
    SalaryCalculations,
    /// `tax_calculation`
    TaxCalculation,
}

impl FixtureSection {
    /// The key this section uses in a fixture file.
    pub fn key(self) -> &'static str {
        match self {
            FixtureSection::ValidInputs => "valid_inputs",
            FixtureSection::InvalidInputs => "invalid_inputs",
            FixtureSection::SalaryCalculations => "salary_calculations",
            FixtureSection::TaxCalculation => "tax_calculation",
        }
    }
}

impl fmt::Display for FixtureSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fixture case that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFailure {
    /// Which section the case is in.
    pub section: FixtureSection,
    /// Zero-based position of the case within its section.
    pub index: usize,
    /// What went wrong.
    pub reason: String,
}

impl fmt::Display for FixtureFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section, self.index, self.reason)
    }
}

/// The outcome of running every case in a [`FixtureSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// How many cases were run.
    pub cases: usize,
    /// The cases that failed, in file order.
    pub failures: Vec<FixtureFailure>,
}

impl VerificationReport {
    /// How many cases passed.
    pub fn passed(&self) -> usize {
        self.cases - self.failures.len()
    }

    /// Returns `true` if no case failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl FixtureSet {
    /// Runs every case and collects the failures.
    ///
    /// Breakdown fields are compared to two decimal places. Tax cases and
    /// parsed amounts must match exactly.
    pub fn verify(&self) -> VerificationReport {
        let mut failures = Vec::new();

        let checks = self
            .valid_inputs
            .iter()
            .enumerate()
            .map(|(i, case)| (FixtureSection::ValidInputs, i, check_valid_input(case)))
            .chain(
                self.invalid_inputs
                    .iter()
                    .enumerate()
                    .map(|(i, case)| (FixtureSection::InvalidInputs, i, check_invalid_input(case))),
            )
            .chain(self.salary_calculations.iter().enumerate().map(|(i, case)| {
                (
                    FixtureSection::SalaryCalculations,
                    i,
                    check_salary_calculation(case),
                )
            }))
            .chain(
                self.tax_calculation
                    .iter()
                    .enumerate()
                    .map(|(i, case)| (FixtureSection::TaxCalculation, i, check_tax(case))),
            );

        for (section, index, outcome) in checks {
            if let Err(reason) = outcome {
                failures.push(FixtureFailure {
                    section,
                    index,
                    reason,
                });
            }
        }

        VerificationReport {
            cases: self.case_count(),
            failures,
        }
    }
}

fn check_valid_input(case: &ValidInputCase) -> Result<(), String> {
    match parse_salary_input(&case.input) {
        Ok(value) if value == case.expected => Ok(()),
        Ok(value) => Err(format!(
            "input {:?} parsed to {}, expected {}",
            case.input, value, case.expected
        )),
        Err(err) => Err(format!("input {:?} was rejected: {}", case.input, err)),
    }
}

fn check_invalid_input(case: &InvalidInputCase) -> Result<(), String> {
    match parse_salary_input(&case.input) {
        Ok(value) => Err(format!(
            "input {:?} parsed to {}, expected error {:?}",
            case.input, value, case.expected_error
        )),
        Err(err) if !err.is_invalid_input() => Err(format!(
            "input {:?} failed with unexpected error kind: {}",
            case.input, err
        )),
        Err(err) if err.to_string() == case.expected_error => Ok(()),
        Err(err) => Err(format!(
            "input {:?} failed with {:?}, expected {:?}",
            case.input,
            err.to_string(),
            case.expected_error
        )),
    }
}

fn check_salary_calculation(case: &SalaryCalculationCase) -> Result<(), String> {
    let breakdown = calculate_salary(case.gross_salary)
        .map_err(|err| format!("gross salary {} was rejected: {}", case.gross_salary, err))?;

    for (label, expected) in &case.result {
        let field = BreakdownField::from_label(label)
            .ok_or_else(|| format!("unknown breakdown field {:?}", label))?;
        let actual = breakdown.get(field);
        if !agrees_to_two_places(actual, *expected) {
            return Err(format!(
                "gross salary {}: {} was {}, expected {}",
                case.gross_salary, label, actual, expected
            ));
        }
    }
    Ok(())
}

fn check_tax(case: &TaxCalculationCase) -> Result<(), String> {
    let breakdown = calculate_salary(case.gross_salary)
        .map_err(|err| format!("gross salary {} was rejected: {}", case.gross_salary, err))?;

    if breakdown.tax == case.expected_tax {
        Ok(())
    } else {
        Err(format!(
            "gross salary {}: Tax was {}, expected {}",
            case.gross_salary, breakdown.tax, case.expected_tax
        ))
    }
}

fn agrees_to_two_places(actual: Decimal, expected: Decimal) -> bool {
    round_money(actual - expected).is_zero()
}
