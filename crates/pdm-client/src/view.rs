//! Pure projection from state to display.
//!
//! Front ends render [`ResultPanel`] and [`EditorStatus`] and never inspect
//! `RequestState` or the raw response themselves.

use crate::editor::RequestEditor;
use crate::response::OrchestrationResult;
use crate::state::RequestState;

/// Shown for fields the response did not contain.
pub const MISSING: &str = "—";

/// Placeholder shown before the first submission.
pub const IDLE_HINT: &str = "Run orchestration to see risk score, booking details, and RCA summary.";

/// Label of the submit trigger.
pub const SUBMIT_LABEL: &str = "POST /orchestrate";

/// Label of the submit trigger while a request is in flight.
pub const RUNNING_LABEL: &str = "Running…";

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Placeholder(&'static str),
    Loading,
    Error(String),
    Result(ResultView),
}

/// Display-ready fields of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub risk_percent: Option<i64>,
    /// `"83% (high)"`.
    pub risk_headline: String,
    pub risk_level: String,
    pub component: String,
    pub center_id: String,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub status: String,
    pub rca_summary: String,
    pub similar_cases: Option<String>,
    pub voice_script: String,
    pub alert_id: Option<String>,
    pub telemetry_event_id: Option<String>,
    pub booking_id: Option<String>,
    pub security_allowed: Option<bool>,
    /// Expected fields the response lacked.
    pub missing_fields: Vec<String>,
    pub raw_json: String,
}

impl ResultView {
    pub fn from_result(result: &OrchestrationResult) -> Self {
        let risk_percent = result.risk_percent();
        let risk_level = text(result.risk_level());
        let percent = risk_percent.map_or_else(|| MISSING.to_string(), |p| format!("{}%", p));

        Self {
            risk_percent,
            risk_headline: format!("{} ({})", percent, risk_level),
            risk_level,
            component: text(result.predicted_component()),
            center_id: text(result.booking_center_id()),
            starts_at: text(result.booking_starts_at()),
            ends_at: result.booking_ends_at().map(ToString::to_string),
            status: text(result.booking_status()),
            rca_summary: text(result.rca_summary()),
            similar_cases: result.similar_cases().map(ToString::to_string),
            voice_script: text(result.voice_script()),
            alert_id: result.alert_id().map(ToString::to_string),
            telemetry_event_id: result.telemetry_event_id().map(ToString::to_string),
            booking_id: result.booking_id().map(ToString::to_string),
            security_allowed: result.security_allowed(),
            missing_fields: result.validate(),
            raw_json: result.raw_pretty(),
        }
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

/// Projects the request state onto the result panel.
///
/// An error replaces the panel entirely; no partial result is ever shown with it.
pub fn project(state: &RequestState) -> ResultPanel {
    match state {
        RequestState::Idle => ResultPanel::Placeholder(IDLE_HINT),
        RequestState::Loading => ResultPanel::Loading,
        RequestState::Error(message) => ResultPanel::Error(message.clone()),
        RequestState::Success(result) => ResultPanel::Result(ResultView::from_result(result)),
    }
}

/// Whether the submit trigger is enabled.
pub fn can_submit(state: &RequestState, editor: &RequestEditor) -> bool {
    !state.is_loading() && editor.is_valid()
}

/// Label the submit trigger should carry.
pub fn submit_label(state: &RequestState) -> &'static str {
    if state.is_loading() { RUNNING_LABEL } else { SUBMIT_LABEL }
}

/// Indicators shown under the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStatus {
    /// `Some` while the buffer is not valid JSON.
    pub invalid: Option<String>,
    /// Advisory schema warnings for a valid buffer.
    pub warnings: Vec<String>,
    pub can_submit: bool,
}

/// Projects the editor and state onto the editor indicators.
pub fn editor_status(state: &RequestState, editor: &RequestEditor) -> EditorStatus {
    EditorStatus {
        invalid: editor
            .parse_error()
            .map(|e| format!("Invalid JSON: {}", e)),
        warnings: editor.issues().iter().map(ToString::to_string).collect(),
        can_submit: can_submit(state, editor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(body: serde_json::Value) -> RequestState {
        RequestState::Success(OrchestrationResult::new(body))
    }

    #[test]
    fn test_idle_and_loading_panels() {
        assert_eq!(project(&RequestState::Idle), ResultPanel::Placeholder(IDLE_HINT));
        assert_eq!(project(&RequestState::Loading), ResultPanel::Loading);
    }

    #[test]
    fn test_error_panel_is_message_only() {
        let panel = project(&RequestState::Error("internal error".to_string()));
        assert_eq!(panel, ResultPanel::Error("internal error".to_string()));
    }

    #[test]
    fn test_reference_result_view() {
        let state = success(json!({
            "prediction": {"risk_score": 0.83, "risk_level": "high", "predicted_component": "brake_pad"},
            "booking": {"center_id": "SVC-12", "starts_at": "2024-05-01T10:00:00Z", "status": "confirmed"},
            "rca": {"summary": "Elevated vibration correlated with pad wear."},
            "voice_script": "Hello, this is..."
        }));
        let ResultPanel::Result(view) = project(&state) else {
            panic!("expected result panel");
        };
        assert_eq!(view.risk_percent, Some(83));
        assert_eq!(view.risk_headline, "83% (high)");
        assert_eq!(view.component, "brake_pad");
        assert_eq!(view.center_id, "SVC-12");
        assert_eq!(view.status, "confirmed");
        assert!(view.missing_fields.is_empty());
        assert!(view.raw_json.contains("\"risk_score\": 0.83"));
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let ResultPanel::Result(view) = project(&success(json!({}))) else {
            panic!("expected result panel");
        };
        assert_eq!(view.risk_headline, "— (—)");
        assert_eq!(view.rca_summary, MISSING);
        assert_eq!(view.ends_at, None);
        assert_eq!(view.missing_fields.len(), 8);
    }

    #[test]
    fn test_submit_guard() {
        let valid = RequestEditor::default();
        let invalid = RequestEditor::new("{oops");

        assert!(can_submit(&RequestState::Idle, &valid));
        assert!(can_submit(&RequestState::Error("x".to_string()), &valid));
        assert!(!can_submit(&RequestState::Loading, &valid));
        assert!(!can_submit(&RequestState::Idle, &invalid));
        assert!(!can_submit(&RequestState::Loading, &invalid));
    }

    #[test]
    fn test_any_unparseable_text_disables_submit() {
        for text in ["", "{", "}", "[", "tru", "{\"a\" 1}", "1 2", "\"unterminated", "NaN"] {
            let editor = RequestEditor::new(text);
            let status = editor_status(&RequestState::Idle, &editor);
            assert!(!status.can_submit, "should be disabled for {:?}", text);
            assert!(status.invalid.unwrap().starts_with("Invalid JSON"));
        }
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(&RequestState::Idle), SUBMIT_LABEL);
        assert_eq!(submit_label(&RequestState::Loading), RUNNING_LABEL);
    }

    #[test]
    fn test_editor_status_warnings() {
        let editor = RequestEditor::new("{\"customer_id\": \"nope\", \"telemetry\": {\"vehicle_id\": \"V\"}}");
        let status = editor_status(&RequestState::Idle, &editor);
        assert!(status.invalid.is_none());
        assert!(status.can_submit);
        assert_eq!(status.warnings, vec!["customer_id: not a valid UUID".to_string()]);
    }
}
