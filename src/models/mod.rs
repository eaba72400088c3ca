//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod salary_breakdown;
mod suffix;
mod tax_slab;

pub use salary_breakdown::{BreakdownField, SalaryBreakdown};
pub use suffix::SuffixMultiplier;
pub use tax_slab::{SlabCharge, TAX_SLABS, TaxComputation, TaxSlab};
