//! The interactive salary prompt.
//!
//! Reads one salary per line, prints its breakdown, and keeps going until
//! the user types `exit` or input ends. Errors are reported and the loop
//! continues.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::calculate_salary;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryBreakdown;
use crate::parser::parse_salary_input;

use super::format::write_breakdown;

/// Lines printed when a session starts.
pub const BANNER: &[&str] = &[
    "Welcome to the Salary Calculator",
    "You can use the following suffixes for large numbers:",
    "K: Thousand (e.g., 50K = 50,000)",
    "L: Lakh (e.g., 5L = 500,000)",
    "M: Million (e.g., 1.5M = 1,500,000)",
    "B: Billion (e.g., 2B = 2,000,000,000)",
];

/// The prompt shown before each line of input.
pub const PROMPT: &str = "Enter the gross salary (or type 'exit' to quit): ";

/// Printed when the session ends.
pub const FAREWELL: &str = "Goodbye! Have a great day!";

/// The command that ends a session, matched case-insensitively.
pub const EXIT_COMMAND: &str = "exit";

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that produced a breakdown.
    pub calculations: usize,
    /// Lines that were rejected.
    pub errors: usize,
}

/// Parses a salary string and calculates its breakdown.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::session::breakdown_for_input;
///
/// let breakdown = breakdown_for_input("350K").unwrap();
/// assert_eq!(breakdown.tax, dec!(45000));
/// ```
pub fn breakdown_for_input(input: &str) -> EngineResult<SalaryBreakdown> {
    let gross_salary: Decimal = parse_salary_input(input)?;
    calculate_salary(gross_salary)
}

/// Runs the prompt loop until `exit` or end of input.
///
/// Only I/O failures on `input` or `output` end the session early; every
/// [`EngineError`] is reported to `output` and the loop continues.
pub fn run_interactive<R, W>(mut input: R, output: &mut W) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for line in BANNER {
        writeln!(output, "{}", line)?;
    }
    writeln!(output)?;

    let mut buffer = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            debug!("input closed, ending session");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let entry = buffer.trim();
        if entry.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        match breakdown_for_input(entry) {
            Ok(breakdown) => {
                debug!(input = %entry, gross_salary = %breakdown.gross_salary, "calculated breakdown");
                summary.calculations += 1;
                writeln!(output)?;
                write_breakdown(output, &breakdown)?;
            }
            Err(err) => {
                summary.errors += 1;
                report_error(output, entry, &err)?;
            }
        }
    }

    info!(
        calculations = summary.calculations,
        errors = summary.errors,
        "session finished"
    );
    Ok(summary)
}

fn report_error<W: Write>(output: &mut W, entry: &str, err: &EngineError) -> io::Result<()> {
    if err.is_invalid_input() {
        warn!(input = %entry, error = %err, "rejected salary input");
        writeln!(output, "Error: {} Please try again.", err)
    } else {
        warn!(input = %entry, error = %err, "unexpected failure");
        writeln!(output, "Unexpected error: {} Please try again.", err)
    }
}
