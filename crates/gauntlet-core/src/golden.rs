use serde::{Deserialize, Serialize};

/// A curated reference record used as ground truth for evaluation.
///
/// Carries the same four fields as [`crate::TestCase`] under the same
/// semantics, but as a distinct type: golden datasets are stored and
/// exchanged independently of live test objects. The interchange format uses
/// camelCase keys and omits absent fields entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Golden {
    /// The prompt this reference record covers
    pub input: String,
    /// The output recorded when the golden was captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    /// The reference output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Ordered supporting snippets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
}

impl Golden {
    /// Create a golden with only the input prompt set
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            actual_output: None,
            expected_output: None,
            context: None,
        }
    }

    /// Set the recorded actual output
    pub fn with_actual_output(mut self, actual_output: impl Into<String>) -> Self {
        self.actual_output = Some(actual_output.into());
        self
    }

    /// Set the reference output
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let golden = Golden::new("prompt")
            .with_actual_output("produced")
            .with_expected_output("wanted");

        let json = serde_json::to_string(&golden).unwrap();
        assert!(json.contains("\"actualOutput\""));
        assert!(json.contains("\"expectedOutput\""));
        assert!(!json.contains("actual_output"));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let golden = Golden::new("prompt");
        let json = serde_json::to_string(&golden).unwrap();

        assert_eq!(json, "{\"input\":\"prompt\"}");
    }

    #[test]
    fn test_deserializes_missing_fields_as_absent() {
        let golden: Golden = serde_json::from_str("{\"input\":\"prompt\"}").unwrap();

        assert!(golden.actual_output.is_none());
        assert!(golden.expected_output.is_none());
        assert!(golden.context.is_none());
    }

    #[test]
    fn test_empty_context_round_trips_as_empty() {
        let golden = Golden::new("prompt").with_context(Vec::new());
        let json = serde_json::to_string(&golden).unwrap();

        let deserialized: Golden = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.context, Some(Vec::new()));
    }
}
