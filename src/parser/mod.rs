//! Salary input parsing for the Salary Engine.
//!
//! Converts free-form salary strings, including thousands separators and
//! magnitude suffixes (`K`, `L`, `M`, `B`), into decimal amounts.

mod salary_input;

pub use salary_input::{
    EMPTY_INPUT_MESSAGE, INPUT_TOO_LARGE_MESSAGE, INVALID_CHARACTERS_MESSAGE, parse_salary_input,
};
