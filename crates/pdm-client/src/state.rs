//! Request lifecycle state.

use crate::response::OrchestrationResult;

/// Where the current orchestration request stands. Exactly one variant is active.
///
/// The only path is `Idle -> Loading -> {Success | Error}`, re-entered from any
/// terminal state on the next submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed with this message.
    Error(String),
    /// The last request succeeded.
    Success(OrchestrationResult),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&OrchestrationResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Short lowercase label, used in logs and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Success(_) => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_accessors_are_exclusive() {
        let error = RequestState::Error("boom".to_string());
        assert_eq!(error.error(), Some("boom"));
        assert!(error.result().is_none());

        let success = RequestState::Success(OrchestrationResult::new(json!({})));
        assert!(success.error().is_none());
        assert_eq!(success.result().map(|r| r.raw()), Some(&json!({})));
    }

    #[test]
    fn test_labels() {
        assert_eq!(RequestState::Idle.label(), "idle");
        assert_eq!(RequestState::Loading.label(), "loading");
        assert_eq!(RequestState::Error(String::new()).label(), "error");
        assert_eq!(RequestState::Success(json!(null).into()).label(), "success");
    }
}
