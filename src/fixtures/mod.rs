//! Fixture-driven verification for the Salary Engine.
//!
//! A fixture file lists parser inputs with expected amounts or error
//! messages, and gross salaries with expected breakdown values. This module
//! loads such files from JSON or YAML and checks every case against the
//! parser and calculator.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::fixtures::FixtureLoader;
//!
//! let report = FixtureLoader::load("./tests/data/test_data.json").unwrap().verify();
//! println!("{} of {} cases passed", report.passed(), report.cases);
//! ```

mod loader;
mod types;
mod verify;

pub use loader::{FixtureFormat, FixtureLoader};
pub use types::{
    FixtureSet, InvalidInputCase, SalaryCalculationCase, TaxCalculationCase, ValidInputCase,
};
pub use verify::{FixtureFailure, FixtureSection, VerificationReport};
