//! Error types for the orchestration client.
//!
//! The `Display` output of [`ClientError`] is the exact message shown to the
//! user in the error state, so variants carry pre-formatted text rather than
//! wrapping foreign error types.

use thiserror::Error;

/// An error raised while talking to the orchestration endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The endpoint answered with a non-2xx status.
    ///
    /// Displays the response body verbatim, or `HTTP <status>` when the body
    /// is empty.
    #[error("{}", status_message(.status, .body))]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body read as text.
        body: String,
    },

    /// The request never produced a response (connection refused, DNS, TLS, ...).
    #[error("{0}")]
    Transport(String),

    /// The response body could not be read or parsed as JSON.
    #[error("{0}")]
    Decode(String),

    /// The response parsed but failed strict schema validation.
    #[error("Response missing or invalid fields: {}", .0.join(", "))]
    Schema(Vec<String>),
}

impl ClientError {
    /// Returns the HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_message(status: &u16, body: &str) -> String {
    if body.is_empty() { format!("HTTP {}", status) } else { body.to_string() }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_body() {
        let err = ClientError::Status { status: 500, body: "internal error".to_string() };
        assert_eq!(err.to_string(), "internal error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_error_empty_body_falls_back_to_code() {
        let err = ClientError::Status { status: 503, body: String::new() };
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_status_error_keeps_whitespace_body() {
        let err = ClientError::Status { status: 502, body: " ".to_string() };
        assert_eq!(err.to_string(), " ");
    }

    #[test]
    fn test_schema_error_lists_fields() {
        let err = ClientError::Schema(vec![
            "prediction.risk_score".to_string(),
            "voice_script".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Response missing or invalid fields: prediction.risk_score, voice_script"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let message = json_err.to_string();
        let err: ClientError = json_err.into();
        assert_eq!(err, ClientError::Decode(message));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue("api_base".to_string());
        assert!(err.to_string().contains("Invalid configuration value"));
        assert!(err.to_string().contains("api_base"));
    }
}
