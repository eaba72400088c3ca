//! Salary breakdown models for the Salary Engine.
//!
//! This module contains the [`SalaryBreakdown`] record produced by the
//! calculator and the [`BreakdownField`] enum that names its fields in
//! display order.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Names one of the seven fields of a [`SalaryBreakdown`].
///
/// The variants are declared in display order, and [`BreakdownField::ALL`]
/// lists them in that same order.
///
/// # Example
///
/// ```
/// use salary_engine::models::BreakdownField;
///
/// assert_eq!(BreakdownField::TakeHomeSalary.label(), "Take-home Salary");
/// assert_eq!(
///     BreakdownField::from_label("Employer ETF"),
///     Some(BreakdownField::EmployerEtf)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BreakdownField {
    /// The gross salary, as given.
    #[serde(rename = "Gross Salary")]
    GrossSalary,
    /// The employer's EPF contribution (12% of gross).
    #[serde(rename = "Employer EPF")]
    EmployerEpf,
    /// The employee's EPF contribution (8% of gross).
    #[serde(rename = "Employee EPF")]
    EmployeeEpf,
    /// The employer's ETF contribution (3% of gross).
    #[serde(rename = "Employer ETF")]
    EmployerEtf,
    /// Progressive income tax.
    #[serde(rename = "Tax")]
    Tax,
    /// Gross less employee EPF and tax.
    #[serde(rename = "Take-home Salary")]
    TakeHomeSalary,
    /// Gross plus all employer contributions.
    #[serde(rename = "Total Benefit")]
    TotalBenefit,
}

impl BreakdownField {
    /// Every field, in display order.
    pub const ALL: [BreakdownField; 7] = [
        BreakdownField::GrossSalary,
        BreakdownField::EmployerEpf,
        BreakdownField::EmployeeEpf,
        BreakdownField::EmployerEtf,
        BreakdownField::Tax,
        BreakdownField::TakeHomeSalary,
        BreakdownField::TotalBenefit,
    ];

    /// Returns the human-readable label used for display and serialization.
    pub fn label(self) -> &'static str {
        match self {
            BreakdownField::GrossSalary => "Gross Salary",
            BreakdownField::EmployerEpf => "Employer EPF",
            BreakdownField::EmployeeEpf => "Employee EPF",
            BreakdownField::EmployerEtf => "Employer ETF",
            BreakdownField::Tax => "Tax",
            BreakdownField::TakeHomeSalary => "Take-home Salary",
            BreakdownField::TotalBenefit => "Total Benefit",
        }
    }

    /// Looks up a field by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for BreakdownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of a salary calculation.
///
/// `tax`, `take_home_salary` and `total_benefit` are rounded to two decimal
/// places. The other fields keep the full precision of the calculation.
/// Fields are declared in display order, so the serialized form is an
/// ordered object keyed by the display labels.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::models::BreakdownField;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_salary(Decimal::from(350_000)).unwrap();
/// assert_eq!(breakdown.get(BreakdownField::Tax), Decimal::from(45_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The gross salary, as given.
    #[serde(rename = "Gross Salary")]
    pub gross_salary: Decimal,
    /// The employer's EPF contribution.
    #[serde(rename = "Employer EPF")]
    pub employer_epf: Decimal,
    /// The employee's EPF contribution.
    #[serde(rename = "Employee EPF")]
    pub employee_epf: Decimal,
    /// The employer's ETF contribution.
    #[serde(rename = "Employer ETF")]
    pub employer_etf: Decimal,
    /// Progressive income tax, rounded to 2 dp.
    #[serde(rename = "Tax")]
    pub tax: Decimal,
    /// Take-home salary, rounded to 2 dp.
    #[serde(rename = "Take-home Salary")]
    pub take_home_salary: Decimal,
    /// Total employer cost, rounded to 2 dp.
    #[serde(rename = "Total Benefit")]
    pub total_benefit: Decimal,
}

impl SalaryBreakdown {
    /// Returns the value of a single field.
    pub fn get(&self, field: BreakdownField) -> Decimal {
        match field {
            BreakdownField::GrossSalary => self.gross_salary,
            BreakdownField::EmployerEpf => self.employer_epf,
            BreakdownField::EmployeeEpf => self.employee_epf,
            BreakdownField::EmployerEtf => self.employer_etf,
            BreakdownField::Tax => self.tax,
            BreakdownField::TakeHomeSalary => self.take_home_salary,
            BreakdownField::TotalBenefit => self.total_benefit,
        }
    }

    /// Iterates over `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (BreakdownField, Decimal)> + '_ {
        BreakdownField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}
