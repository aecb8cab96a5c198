use serde::{Deserialize, Serialize};

/// One instance of an evaluation run.
///
/// Pairs a prompt with the output the system under test produced, the output
/// we expected, and optional supporting context. Fields other than `input`
/// may be absent: a test case is often built incrementally, with
/// `actual_output` filled in only after the system has run. Absent fields are
/// `None`, never empty defaults, so "no context provided" stays distinct from
/// "empty context provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// The prompt given to the system under test
    pub input: String,
    /// The text the system under test produced
    pub actual_output: Option<String>,
    /// The reference text we wanted
    pub expected_output: Option<String>,
    /// Ordered supporting snippets (retrieval context, documents, etc.)
    pub context: Option<Vec<String>>,
}

impl TestCase {
    /// Create a test case with only the input prompt set
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            actual_output: None,
            expected_output: None,
            context: None,
        }
    }

    /// Set the actual output produced by the system under test
    pub fn with_actual_output(mut self, actual_output: impl Into<String>) -> Self {
        self.actual_output = Some(actual_output.into());
        self
    }

    /// Set the expected reference output
    pub fn with_expected_output(mut self, expected_output: impl Into<String>) -> Self {
        self.expected_output = Some(expected_output.into());
        self
    }

    /// Set the ordered supporting context
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = Some(context);
        self
    }
}
