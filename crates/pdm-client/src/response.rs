//! Orchestration response model.
//!
//! The response body is kept as the parsed JSON value. Field accessors are all
//! optional and tolerate wrong types, so a partial or unexpected body still
//! renders. [`OrchestrationResult::validate`] reports what is missing.

use serde_json::Value;

/// Expected fields of an orchestration response and their JSON kinds.
const EXPECTED_FIELDS: [(&str, JsonKind); 8] = [
    ("prediction.risk_score", JsonKind::Number),
    ("prediction.risk_level", JsonKind::String),
    ("prediction.predicted_component", JsonKind::String),
    ("booking.center_id", JsonKind::String),
    ("booking.starts_at", JsonKind::String),
    ("booking.status", JsonKind::String),
    ("rca.summary", JsonKind::String),
    ("voice_script", JsonKind::String),
];

#[derive(Debug, Clone, Copy)]
enum JsonKind {
    Number,
    String,
}

impl JsonKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
        }
    }
}

/// A successful orchestration response.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationResult {
    raw: Value,
}

impl OrchestrationResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The response body as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Pretty-printed response body.
    pub fn raw_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }

    /// Looks up a dotted path such as `booking.center_id`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.raw, |value, key| value.get(key))
    }

    fn str_field(&self, path: &str) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }

    /// Predicted failure probability in [0, 1].
    pub fn risk_score(&self) -> Option<f64> {
        self.field("prediction.risk_score").and_then(Value::as_f64)
    }

    /// Risk score as a whole percentage, rounded half away from zero.
    pub fn risk_percent(&self) -> Option<i64> {
        self.risk_score().map(|score| (score * 100.0).round() as i64)
    }

    pub fn risk_level(&self) -> Option<&str> {
        self.str_field("prediction.risk_level")
    }

    pub fn predicted_component(&self) -> Option<&str> {
        self.str_field("prediction.predicted_component")
    }

    pub fn booking_center_id(&self) -> Option<&str> {
        self.str_field("booking.center_id")
    }

    pub fn booking_starts_at(&self) -> Option<&str> {
        self.str_field("booking.starts_at")
    }

    pub fn booking_ends_at(&self) -> Option<&str> {
        self.str_field("booking.ends_at")
    }

    pub fn booking_status(&self) -> Option<&str> {
        self.str_field("booking.status")
    }

    pub fn booking_id(&self) -> Option<&str> {
        self.str_field("booking.booking_id")
    }

    pub fn slot_id(&self) -> Option<&str> {
        self.str_field("booking.slot_id")
    }

    pub fn rca_summary(&self) -> Option<&str> {
        self.str_field("rca.summary")
    }

    pub fn rca_case_id(&self) -> Option<&str> {
        self.str_field("rca.rca_case_id")
    }

    /// Similar historical cases attached to the RCA, when non-empty.
    pub fn similar_cases(&self) -> Option<&Value> {
        self.field("rca.similar_cases").filter(|v| match v {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Null => false,
            _ => true,
        })
    }

    pub fn voice_script(&self) -> Option<&str> {
        self.str_field("voice_script")
    }

    pub fn telemetry_event_id(&self) -> Option<&str> {
        self.str_field("telemetry_event_id")
    }

    pub fn alert_id(&self) -> Option<&str> {
        self.str_field("alert_id")
    }

    pub fn security_allowed(&self) -> Option<bool> {
        self.field("security_allowed").and_then(Value::as_bool)
    }

    /// Expected fields that are absent or have the wrong JSON type, as dotted paths.
    pub fn validate(&self) -> Vec<String> {
        EXPECTED_FIELDS
            .iter()
            .filter(|(path, kind)| !self.field(path).is_some_and(|v| kind.matches(v)))
            .map(|(path, _)| (*path).to_string())
            .collect()
    }
}

impl From<Value> for OrchestrationResult {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}
