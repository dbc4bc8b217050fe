//! Request document editor.
//!
//! Holds the raw text the user is editing and re-parses it on every change.
//! Invalid JSON is never rejected, only flagged: `parsed()` is `None` until the
//! buffer parses again.

use serde_json::Value;

use crate::json;
use crate::request::{RequestIssue, check_request, example_document};

/// Editable JSON request buffer with a cached parse result.
#[derive(Debug, Clone)]
pub struct RequestEditor {
    text: String,
    parsed: Option<Value>,
    parse_error: Option<String>,
}

impl Default for RequestEditor {
    fn default() -> Self {
        Self::with_example()
    }
}

impl RequestEditor {
    /// Creates an editor holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let mut editor = Self { text: String::new(), parsed: None, parse_error: None };
        editor.set_text(text);
        editor
    }

    /// Creates an editor holding the example request.
    pub fn with_example() -> Self {
        Self::new(example_document())
    }

    /// The raw buffer, exactly as it will be sent.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer and re-validates it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        match json::parse(&self.text) {
            Ok(value) => {
                self.parsed = Some(value);
                self.parse_error = None;
            }
            Err(e) => {
                self.parsed = None;
                self.parse_error = Some(e.to_string());
            }
        }
    }

    /// The parsed document, or `None` while the buffer is not valid JSON.
    pub fn parsed(&self) -> Option<&Value> {
        self.parsed.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Parser message (with line and column) for the current buffer, if invalid.
    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    /// Advisory request-schema issues; empty while the buffer is invalid.
    pub fn issues(&self) -> Vec<RequestIssue> {
        self.parsed.as_ref().map(check_request).unwrap_or_default()
    }

    /// Re-indents a valid buffer. Returns `false` and leaves the text alone otherwise.
    pub fn format(&mut self) -> bool {
        let Some(value) = self.parsed.as_ref() else {
            return false;
        };
        match serde_json::to_string_pretty(value) {
            Ok(pretty) => {
                self.text = pretty;
                true
            }
            Err(_) => false,
        }
    }

    /// Restores the example request.
    pub fn reset(&mut self) {
        self.set_text(example_document());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_with_valid_example() {
        let editor = RequestEditor::default();
        assert!(editor.is_valid());
        assert!(editor.parse_error().is_none());
        assert_eq!(editor.text(), example_document());
        assert_eq!(editor.parsed().unwrap()["telemetry"]["vehicle_id"], "VEH-001");
    }

    #[test]
    fn test_invalid_text_is_kept_and_flagged() {
        let mut editor = RequestEditor::default();
        editor.set_text("{\"customer_id\": ");
        assert!(!editor.is_valid());
        assert!(editor.parsed().is_none());
        assert_eq!(editor.text(), "{\"customer_id\": ");
        assert!(editor.parse_error().unwrap().contains("line 1"));
        assert!(editor.issues().is_empty());
    }

    #[test]
    fn test_recovers_after_fix() {
        let mut editor = RequestEditor::new("{");
        assert!(!editor.is_valid());
        editor.set_text("{}");
        assert!(editor.is_valid());
        assert_eq!(editor.parsed(), Some(&json!({})));
        assert!(editor.parse_error().is_none());
    }

    #[test]
    fn test_rejects_assorted_invalid_inputs() {
        for text in ["", "   ", "{", "[1,]", "{'a': 1}", "nul", "{\"a\":1}}", "01"] {
            let editor = RequestEditor::new(text);
            assert!(!editor.is_valid(), "expected invalid: {:?}", text);
        }
    }

    #[test]
    fn test_scalar_documents_are_valid() {
        for text in ["null", "0", "false", "\"\"", "[]"] {
            let editor = RequestEditor::new(text);
            assert!(editor.is_valid(), "expected valid: {:?}", text);
        }
    }

    #[test]
    fn test_parse_matches_serialized_value() {
        let values = [
            json!({"a": [1, 2.5, -3], "b": {"c": null, "d": true}}),
            json!("unicode ✓ \"quoted\" \n"),
            json!([{"nested": [[]]}, 1e10, 0.1]),
            json!({"customer_id": DEMO, "telemetry": {"vehicle_id": "V"}}),
        ];
        for value in values {
            let compact = RequestEditor::new(serde_json::to_string(&value).unwrap());
            let pretty = RequestEditor::new(serde_json::to_string_pretty(&value).unwrap());
            assert_eq!(compact.parsed(), Some(&value));
            assert_eq!(pretty.parsed(), Some(&value));
        }
    }

    const DEMO: &str = crate::request::DEMO_CUSTOMER_ID;

    #[test]
    fn test_deeply_nested_document_is_valid() {
        let value = (0..200).fold(Value::Null, |inner, _| Value::Array(vec![inner]));
        let editor = RequestEditor::new(serde_json::to_string(&value).unwrap());
        assert!(editor.is_valid(), "{:?}", editor.parse_error());
        assert_eq!(editor.parsed(), Some(&value));
    }

    #[test]
    fn test_huge_exponent_is_valid() {
        let editor = RequestEditor::new("{\"x\": 1e400}");
        assert!(editor.is_valid(), "{:?}", editor.parse_error());
    }

    #[test]
    fn test_format_reindents_valid_buffer() {
        let mut editor = RequestEditor::new("{\"a\":1,\"b\":[true]}");
        assert!(editor.format());
        assert_eq!(editor.text(), "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}");
        assert!(editor.is_valid());
    }

    #[test]
    fn test_format_leaves_invalid_buffer() {
        let mut editor = RequestEditor::new("{\"a\":");
        assert!(!editor.format());
        assert_eq!(editor.text(), "{\"a\":");
    }

    #[test]
    fn test_reset_restores_example() {
        let mut editor = RequestEditor::new("garbage");
        editor.reset();
        assert!(editor.is_valid());
        assert_eq!(editor.text(), example_document());
    }

    #[test]
    fn test_issues_reported_for_valid_document() {
        let editor = RequestEditor::new("{\"telemetry\": {\"vehicle_id\": \"V\"}}");
        let issues = editor.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "customer_id");
    }
}
