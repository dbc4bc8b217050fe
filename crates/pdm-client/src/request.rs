//! Orchestration request schema.
//!
//! The client sends whatever text the user typed, so these types are only used
//! to build the example document and to produce advisory [`RequestIssue`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Maximum length the backend accepts for `telemetry.vehicle_id`.
pub const MAX_VEHICLE_ID_LEN: usize = 64;

/// Customer id used by the example document (the seeded demo customer).
pub const DEMO_CUSTOMER_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Body of `POST /orchestrate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryIn {
    pub customer_id: Uuid,
    pub telemetry: TelemetryPayload,
}

/// One telemetry snapshot. Readings default to the backend's nominal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryPayload {
    pub vehicle_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub speed_kph: f64,
    #[serde(default = "default_engine_temp")]
    pub engine_temp_c: f64,
    #[serde(default = "default_vibration")]
    pub vibration_rms: f64,
    #[serde(default = "default_oil_pressure")]
    pub oil_pressure_kpa: f64,
    #[serde(default = "default_battery")]
    pub battery_v: f64,
    #[serde(default)]
    pub odometer_km: f64,
    #[serde(default = "default_ambient_temp")]
    pub ambient_temp_c: f64,
}

fn default_engine_temp() -> f64 {
    90.0
}

fn default_vibration() -> f64 {
    0.2
}

fn default_oil_pressure() -> f64 {
    250.0
}

fn default_battery() -> f64 {
    12.5
}

fn default_ambient_temp() -> f64 {
    25.0
}

impl TelemetryPayload {
    /// A payload for `vehicle_id` with every reading at its nominal default.
    pub fn nominal(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            timestamp: None,
            speed_kph: 0.0,
            engine_temp_c: default_engine_temp(),
            vibration_rms: default_vibration(),
            oil_pressure_kpa: default_oil_pressure(),
            battery_v: default_battery(),
            odometer_km: 0.0,
            ambient_temp_c: default_ambient_temp(),
        }
    }
}

impl TelemetryIn {
    /// The example request the editor starts with: a hot, vibrating engine with
    /// low oil pressure and a weak battery.
    pub fn example() -> Self {
        Self {
            customer_id: Uuid::parse_str(DEMO_CUSTOMER_ID).unwrap_or_default(),
            telemetry: TelemetryPayload {
                speed_kph: 62.0,
                engine_temp_c: 108.0,
                vibration_rms: 0.82,
                oil_pressure_kpa: 155.0,
                battery_v: 11.5,
                odometer_km: 120_000.0,
                ambient_temp_c: 28.0,
                ..TelemetryPayload::nominal("VEH-001")
            },
        }
    }
}

/// The example document as pretty-printed JSON (two-space indent).
///
/// Whole-number readings are written without a fractional part so the text
/// reads the way an operator would type it.
pub fn example_document() -> String {
    let example = TelemetryIn::example();
    let t = &example.telemetry;
    let value = serde_json::json!({
        "customer_id": example.customer_id.to_string(),
        "telemetry": {
            "vehicle_id": t.vehicle_id,
            "speed_kph": t.speed_kph as i64,
            "engine_temp_c": t.engine_temp_c as i64,
            "vibration_rms": t.vibration_rms,
            "oil_pressure_kpa": t.oil_pressure_kpa as i64,
            "battery_v": t.battery_v,
            "odometer_km": t.odometer_km as i64,
            "ambient_temp_c": t.ambient_temp_c as i64,
        }
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// A schema problem in a request document. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIssue {
    /// Dotted path of the offending field.
    pub path: String,
    pub message: String,
}

impl RequestIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl std::fmt::Display for RequestIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

const NUMERIC_READINGS: [&str; 7] = [
    "speed_kph",
    "engine_temp_c",
    "vibration_rms",
    "oil_pressure_kpa",
    "battery_v",
    "odometer_km",
    "ambient_temp_c",
];

/// Checks a parsed document against the request schema.
pub fn check_request(document: &Value) -> Vec<RequestIssue> {
    let mut issues = Vec::new();

    let Some(root) = document.as_object() else {
        issues.push(RequestIssue::new("$", "expected a JSON object"));
        return issues;
    };

    match root.get("customer_id") {
        None => issues.push(RequestIssue::new("customer_id", "missing")),
        Some(Value::String(id)) => {
            if Uuid::parse_str(id).is_err() {
                issues.push(RequestIssue::new("customer_id", "not a valid UUID"));
            }
        }
        Some(_) => issues.push(RequestIssue::new("customer_id", "expected a string")),
    }

    let telemetry = match root.get("telemetry") {
        None => {
            issues.push(RequestIssue::new("telemetry", "missing"));
            return issues;
        }
        Some(Value::Object(t)) => t,
        Some(_) => {
            issues.push(RequestIssue::new("telemetry", "expected an object"));
            return issues;
        }
    };

    match telemetry.get("vehicle_id") {
        None => issues.push(RequestIssue::new("telemetry.vehicle_id", "missing")),
        Some(Value::String(id)) => {
            let len = id.chars().count();
            if len == 0 || len > MAX_VEHICLE_ID_LEN {
                issues.push(RequestIssue::new(
                    "telemetry.vehicle_id",
                    format!("length must be 1-{} characters", MAX_VEHICLE_ID_LEN),
                ));
            }
        }
        Some(_) => issues.push(RequestIssue::new("telemetry.vehicle_id", "expected a string")),
    }

    match telemetry.get("timestamp") {
        None | Some(Value::Null) => {}
        Some(Value::String(ts)) => {
            if DateTime::parse_from_rfc3339(ts).is_err() {
                issues.push(RequestIssue::new("telemetry.timestamp", "not an RFC 3339 timestamp"));
            }
        }
        Some(_) => issues.push(RequestIssue::new("telemetry.timestamp", "expected a string")),
    }

    for field in NUMERIC_READINGS {
        if let Some(value) = telemetry.get(field) {
            if !value.is_number() {
                issues.push(RequestIssue::new(format!("telemetry.{}", field), "expected a number"));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_example_document_round_trips_into_schema() {
        let text = example_document();
        let parsed: TelemetryIn = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, TelemetryIn::example());
    }

    #[test]
    fn test_example_document_is_pretty_printed() {
        let text = example_document();
        assert!(text.starts_with("{\n  \"customer_id\""));
        assert!(text.contains("\"speed_kph\": 62,"));
        assert!(text.contains("\"vibration_rms\": 0.82"));
    }

    #[test]
    fn test_example_has_no_issues() {
        let value: Value = serde_json::from_str(&example_document()).unwrap();
        assert!(check_request(&value).is_empty());
    }

    #[test]
    fn test_missing_readings_take_defaults() {
        let parsed: TelemetryIn = serde_json::from_value(json!({
            "customer_id": DEMO_CUSTOMER_ID,
            "telemetry": { "vehicle_id": "VEH-9" }
        }))
        .unwrap();
        assert_eq!(parsed.telemetry, TelemetryPayload::nominal("VEH-9"));
    }

    #[test]
    fn test_example_overrides_nominal_readings() {
        let example = TelemetryIn::example();
        let nominal = TelemetryPayload::nominal("VEH-001");
        assert_eq!(example.telemetry.vehicle_id, nominal.vehicle_id);
        assert_eq!(example.telemetry.timestamp, None);
        assert!(example.telemetry.engine_temp_c > nominal.engine_temp_c);
        assert!(example.telemetry.oil_pressure_kpa < nominal.oil_pressure_kpa);
    }

    #[test]
    fn test_non_object_document() {
        let issues = check_request(&json!([1, 2]));
        assert_eq!(issues, vec![RequestIssue::new("$", "expected a JSON object")]);
    }

    #[test]
    fn test_bad_customer_and_missing_telemetry() {
        let issues = check_request(&json!({ "customer_id": "abc" }));
        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["customer_id", "telemetry"]);
    }

    #[test]
    fn test_vehicle_id_length() {
        let long_id = "V".repeat(MAX_VEHICLE_ID_LEN + 1);
        let issues = check_request(&json!({
            "customer_id": DEMO_CUSTOMER_ID,
            "telemetry": { "vehicle_id": long_id }
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "telemetry.vehicle_id");

        let issues = check_request(&json!({
            "customer_id": DEMO_CUSTOMER_ID,
            "telemetry": { "vehicle_id": "" }
        }));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_mistyped_readings_and_timestamp() {
        let issues = check_request(&json!({
            "customer_id": DEMO_CUSTOMER_ID,
            "telemetry": {
                "vehicle_id": "VEH-1",
                "timestamp": "yesterday",
                "speed_kph": "fast",
                "battery_v": 12.1
            }
        }));
        let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "telemetry.timestamp: not an RFC 3339 timestamp".to_string(),
                "telemetry.speed_kph: expected a number".to_string(),
            ]
        );
    }

    #[test]
    fn test_valid_timestamp_accepted() {
        let issues = check_request(&json!({
            "customer_id": DEMO_CUSTOMER_ID,
            "telemetry": { "vehicle_id": "VEH-1", "timestamp": "2024-05-01T10:00:00Z" }
        }));
        assert!(issues.is_empty());
    }
}
