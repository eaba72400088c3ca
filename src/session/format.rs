//! Display formatting for monetary amounts and breakdowns.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::calculation::{MONEY_DECIMAL_PLACES, round_money};
use crate::models::{SalaryBreakdown, TaxComputation};

/// Formats an amount with thousands separators and exactly two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::session::format_amount;
///
/// assert_eq!(format_amount(dec!(1500000)), "1,500,000.00");
/// assert_eq!(format_amount(dec!(999.999)), "1,000.00");
/// assert_eq!(format_amount(dec!(-1234.5)), "-1,234.50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_DECIMAL_PLACES);

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Writes the `Salary Breakdown:` block, one `Label: amount` line per field.
pub fn write_breakdown<W: Write>(out: &mut W, breakdown: &SalaryBreakdown) -> io::Result<()> {
    writeln!(out, "Salary Breakdown:")?;
    for (field, value) in breakdown.iter() {
        writeln!(out, "{}: {}", field.label(), format_amount(value))?;
    }
    Ok(())
}

/// Writes one line per slab the income reached, showing how the tax was built.
pub fn write_tax_explanation<W: Write>(out: &mut W, computation: &TaxComputation) -> io::Result<()> {
    writeln!(out, "Tax by slab:")?;
    if computation.charges.is_empty() {
        writeln!(out, "  (no taxable income)")?;
        return Ok(());
    }

    for charge in &computation.charges {
        let band = match charge.upper_bound {
            Some(upper) => format!(
                "{} - {}",
                format_amount(charge.lower_bound),
                format_amount(upper)
            ),
            None => format!("above {}", format_amount(charge.lower_bound)),
        };
        writeln!(
            out,
            "  {} @ {}%: {} -> {}",
            band,
            charge.rate_percent,
            format_amount(charge.taxable_amount),
            format_amount(charge.tax)
        )?;
    }
    Ok(())
}
