//! Interactive front end for the Salary Engine.
//!
//! This module wraps the parser and calculator in a line-oriented prompt
//! loop and provides the formatting used to display breakdowns. All I/O goes
//! through the reader and writer the caller passes in.

mod format;
mod interactive;

pub use format::{format_amount, write_breakdown, write_tax_explanation};
pub use interactive::{
    BANNER, EXIT_COMMAND, FAREWELL, PROMPT, SessionSummary, breakdown_for_input, run_interactive,
};
