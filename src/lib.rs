//! Salary Engine
//!
//! This crate computes a salary breakdown (EPF and ETF contributions,
//! progressive tax, take-home pay and total employer cost) from a gross
//! salary, and parses human-friendly salary strings such as `"50K"` or
//! `"1.5M"` into decimal amounts.
//!
//! # Example
//!
//! ```
//! use salary_engine::calculation::calculate_salary;
//! use salary_engine::parser::parse_salary_input;
//! use rust_decimal_macros::dec;
//!
//! let gross = parse_salary_input("350K").unwrap();
//! let breakdown = calculate_salary(gross).unwrap();
//! assert_eq!(breakdown.tax, dec!(45000));
//! assert_eq!(breakdown.take_home_salary, dec!(277000));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod parser;
pub mod session;
