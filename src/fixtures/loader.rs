//! Fixture loading functionality.
//!
//! This module provides the [`FixtureLoader`] type for reading fixture
//! files in JSON or YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::FixtureSet;

/// The structured-data format of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    /// JSON, the default.
    Json,
    /// YAML, chosen by a `.yaml` or `.yml` extension.
    Yaml,
}

impl FixtureFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FixtureFormat::Yaml
            }
            _ => FixtureFormat::Json,
        }
    }
}

/// Loads fixture files.
///
/// # Example
///
/// ```no_run
/// use salary_engine::fixtures::FixtureLoader;
///
/// let fixtures = FixtureLoader::load("./tests/data/test_data.json")?;
/// let report = fixtures.verify();
/// assert!(report.is_success());
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureLoader;

impl FixtureLoader {
    /// Loads a fixture file, choosing the format from its extension.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`FixtureSet`], or an error if:
    /// - the file cannot be read (`FixtureNotFound`)
    /// - the file is not valid JSON/YAML for a fixture set (`FixtureParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<FixtureSet> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::FixtureNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, FixtureFormat::from_path(path)).map_err(|message| {
            EngineError::FixtureParseError {
                path: path_str,
                message,
            }
        })
    }

    /// Parses fixture content that has already been read.
    pub fn parse(content: &str, format: FixtureFormat) -> Result<FixtureSet, String> {
        match format {
            FixtureFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            FixtureFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn fixture_path() -> &'static str {
        "./tests/data/test_data.json"
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FixtureFormat::from_path(Path::new("a.json")), FixtureFormat::Json);
        assert_eq!(FixtureFormat::from_path(Path::new("a.yaml")), FixtureFormat::Yaml);
        assert_eq!(FixtureFormat::from_path(Path::new("a.YML")), FixtureFormat::Yaml);
        assert_eq!(FixtureFormat::from_path(Path::new("fixtures")), FixtureFormat::Json);
    }

    #[test]
    fn test_load_repository_fixture_file() {
        let result = FixtureLoader::load(fixture_path());
        assert!(result.is_ok(), "Failed to load fixtures: {:?}", result.err());

        let fixtures = result.unwrap();
        assert!(!fixtures.valid_inputs.is_empty());
        assert!(!fixtures.invalid_inputs.is_empty());
        assert!(!fixtures.salary_calculations.is_empty());
        assert!(!fixtures.tax_calculation.is_empty());
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = FixtureLoader::load("./tests/data/does_not_exist.json");

        match result {
            Err(EngineError::FixtureNotFound { path }) => {
                assert!(path.contains("does_not_exist.json"));
            }
            other => panic!("Expected FixtureNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_with_numbers() {
        let content = r#"{
            "valid_inputs": [{ "input": "50K", "expected": 50000.0 }],
            "tax_calculation": [{ "gross_salary": 350000, "expected_tax": 45000.0 }]
        }"#;

        let fixtures = FixtureLoader::parse(content, FixtureFormat::Json).unwrap();

        assert_eq!(fixtures.valid_inputs[0].expected, dec!(50000));
        assert_eq!(fixtures.tax_calculation[0].gross_salary, dec!(350000));
        assert!(fixtures.invalid_inputs.is_empty());
        assert!(fixtures.salary_calculations.is_empty());
        assert_eq!(fixtures.case_count(), 2);
    }

    #[test]
    fn test_parse_yaml() {
        let content = r#"
invalid_inputs:
  - input: "abc"
    expected_error: "Input contains invalid characters."
salary_calculations:
  - gross_salary: 100000
    result:
      Tax: 0
      Take-home Salary: 92000
"#;

        let fixtures = FixtureLoader::parse(content, FixtureFormat::Yaml).unwrap();

        assert_eq!(fixtures.invalid_inputs[0].input, "abc");
        assert_eq!(
            fixtures.salary_calculations[0].result["Take-home Salary"],
            dec!(92000)
        );
    }

    #[test]
    fn test_parse_malformed_content_returns_message() {
        let result = FixtureLoader::parse("{ not json", FixtureFormat::Json);
        assert!(result.is_err());
    }
}
