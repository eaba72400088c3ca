//! Integration tests for the Salary Engine.
//!
//! This test suite covers:
//! - Fixture files driving the parser and calculator
//! - Parser output feeding the calculator
//! - Tax at and around every slab boundary
//! - The interactive session end to end
//! - Error cases

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use salary_engine::calculation::{calculate_salary, calculate_tax};
use salary_engine::error::EngineError;
use salary_engine::fixtures::{FixtureLoader, FixtureSection};
use salary_engine::models::{BreakdownField, SalaryBreakdown};
use salary_engine::parser::parse_salary_input;
use salary_engine::session::{FAREWELL, run_interactive};

// =============================================================================
// Test Helpers
// =============================================================================

fn breakdown_for(input: &str) -> SalaryBreakdown {
    let gross = parse_salary_input(input).expect("input should parse");
    calculate_salary(gross).expect("salary should calculate")
}

fn run_session(script: &str) -> String {
    let mut output = Vec::new();
    run_interactive(Cursor::new(script.as_bytes()), &mut output).expect("session I/O failed");
    String::from_utf8(output).expect("session output is UTF-8")
}

fn assert_invalid_input(err: EngineError, expected: &str) {
    match err {
        EngineError::InvalidInput { message } => assert_eq!(message, expected),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

// =============================================================================
// Fixture Files
// =============================================================================

#[test]
fn test_json_fixture_file_passes() {
    let fixtures = FixtureLoader::load("./tests/data/test_data.json").expect("load fixtures");
    let report = fixtures.verify();

    let failures: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
    assert_eq!(failures, Vec::<String>::new());
    assert_eq!(report.passed(), fixtures.case_count());
}

#[test]
fn test_yaml_fixture_file_passes() {
    let fixtures = FixtureLoader::load("./tests/data/boundaries.yaml").expect("load fixtures");
    let report = fixtures.verify();

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(report.cases, 10);
}

#[test]
fn test_fixture_failures_identify_the_case() {
    let mut fixtures = FixtureLoader::load("./tests/data/test_data.json").expect("load fixtures");
    fixtures.tax_calculation[2].expected_tax = dec!(1);

    let report = fixtures.verify();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].section, FixtureSection::TaxCalculation);
    assert_eq!(report.failures[0].index, 2);
}

// =============================================================================
// Parser Into Calculator
// =============================================================================

#[test]
fn test_suffix_inputs_produce_expected_breakdowns() {
    let breakdown = breakdown_for("50K");
    assert_eq!(breakdown.tax, dec!(0));
    assert_eq!(breakdown.take_home_salary, dec!(46000));

    let breakdown = breakdown_for("5L");
    // 45,000 + 36% of 150,000
    assert_eq!(breakdown.tax, dec!(99000));
    assert_eq!(breakdown.take_home_salary, dec!(361000));
    assert_eq!(breakdown.total_benefit, dec!(575000));
}

#[test]
fn test_separators_do_not_change_the_result() {
    assert_eq!(breakdown_for("1,75,000"), breakdown_for("175000"));
    assert_eq!(breakdown_for("175 000"), breakdown_for("175K"));
}

#[test]
fn test_negative_input_is_rejected_by_calculator_not_parser() {
    let gross = parse_salary_input("-5").expect("parser accepts negatives");
    assert_eq!(gross, dec!(-5));

    let err = calculate_salary(gross).unwrap_err();
    assert_invalid_input(err, "Gross salary must be a positive number.");
}

#[test]
fn test_parser_errors() {
    assert_invalid_input(parse_salary_input("").unwrap_err(), "Input cannot be empty.");
    assert_invalid_input(
        parse_salary_input("abc").unwrap_err(),
        "Input contains invalid characters.",
    );
}

// =============================================================================
// Tax Slabs
// =============================================================================

#[test]
fn test_tax_at_documented_points() {
    assert_eq!(calculate_salary(dec!(100000)).unwrap().tax, dec!(0.00));
    assert_eq!(calculate_salary(dec!(350000)).unwrap().tax, dec!(45000.00));
}

#[test]
fn test_tax_is_continuous_across_boundaries() {
    let boundaries = [100_000, 150_000, 200_000, 250_000, 300_000, 350_000];
    let step = dec!(0.01);

    for boundary in boundaries {
        let at = Decimal::from(boundary);
        let below = calculate_tax(at - step).total;
        let exact = calculate_tax(at).total;
        let above = calculate_tax(at + step).total;

        assert!(below <= exact && exact <= above, "boundary {}", boundary);
        // One cent either side can move tax by at most 36% of a cent.
        assert!(exact - below <= dec!(0.0036), "boundary {}", boundary);
        assert!(above - exact <= dec!(0.0036), "boundary {}", boundary);
    }
}

#[test]
fn test_marginal_rate_steps_up_at_each_boundary() {
    let boundaries = [100_000, 150_000, 200_000, 250_000, 300_000, 350_000];
    let unit = Decimal::ONE;

    for boundary in boundaries {
        let at = Decimal::from(boundary);
        let rate_below = calculate_tax(at).total - calculate_tax(at - unit).total;
        let rate_above = calculate_tax(at + unit).total - calculate_tax(at).total;

        assert!(rate_above > rate_below, "boundary {}", boundary);
    }
}

// =============================================================================
// Breakdown Shape
// =============================================================================

#[test]
fn test_breakdown_json_uses_display_labels() {
    let breakdown = calculate_salary(dec!(200000)).unwrap();
    let value = serde_json::to_value(&breakdown).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 7);
    for field in BreakdownField::ALL {
        assert!(object.contains_key(field.label()), "missing {}", field);
    }
    assert_eq!(
        Decimal::from_str_exact(object["Tax"].as_str().unwrap()).unwrap(),
        dec!(9000)
    );
}

// =============================================================================
// Interactive Session
// =============================================================================

#[test]
fn test_session_prints_banner_breakdown_and_farewell() {
    let output = run_session("1.5M\nexit\n");

    assert!(output.contains("B: Billion (e.g., 2B = 2,000,000,000)\n"));
    assert!(output.contains(
        "Salary Breakdown:\n\
         Gross Salary: 1,500,000.00\n\
         Employer EPF: 180,000.00\n\
         Employee EPF: 120,000.00\n\
         Employer ETF: 45,000.00\n\
         Tax: 459,000.00\n\
         Take-home Salary: 921,000.00\n\
         Total Benefit: 1,725,000.00\n"
    ));
    assert!(output.ends_with(&format!("{}\n", FAREWELL)));
}

#[test]
fn test_session_recovers_from_errors() {
    let output = run_session("twelve\n12,000\nExit\n");

    assert!(output.contains("Error: Input contains invalid characters. Please try again.\n"));
    assert!(output.contains("Gross Salary: 12,000.00\n"));
    assert!(output.contains(FAREWELL));
}
