//! Conversion between test case and golden record sequences
//!
//! Both directions are pure, order-preserving field-for-field copies over
//! the four shared fields. Composing the two conversions reproduces the
//! original values.

use crate::error::Result;
use crate::golden::Golden;
use crate::test_case::TestCase;

/// Convert a sequence of test cases into golden records
///
/// Output order matches input order and output length equals input length.
/// Absent fields stay absent.
pub fn convert_test_cases_to_goldens(test_cases: &[TestCase]) -> Vec<Golden> {
    test_cases
        .iter()
        .map(|test_case| Golden {
            input: test_case.input.clone(),
            actual_output: test_case.actual_output.clone(),
            expected_output: test_case.expected_output.clone(),
            context: test_case.context.clone(),
        })
        .collect()
}

/// Convert a sequence of golden records into test cases
///
/// Inverse of [`convert_test_cases_to_goldens`]; same field correspondence,
/// order- and length-preserving.
pub fn convert_goldens_to_test_cases(goldens: &[Golden]) -> Vec<TestCase> {
    goldens
        .iter()
        .map(|golden| TestCase {
            input: golden.input.clone(),
            actual_output: golden.actual_output.clone(),
            expected_output: golden.expected_output.clone(),
            context: golden.context.clone(),
        })
        .collect()
}

/// Serialize a golden dataset to its JSON interchange form
pub fn goldens_to_json(goldens: &[Golden]) -> Result<String> {
    Ok(serde_json::to_string_pretty(goldens)?)
}

/// Deserialize a golden dataset from its JSON interchange form
pub fn goldens_from_json(json: &str) -> Result<Vec<Golden>> {
    Ok(serde_json::from_str(json)?)
}
