//! Orchestration client.
//!
//! Owns the [`RequestState`] and publishes every transition on a
//! `tokio::sync::watch` channel so a UI can re-render from it.
//!
//! The client does not guard against overlapping submissions. Two calls in
//! flight are two independent lifecycles writing the same state, and whichever
//! resolves last wins. Callers that care (the TUI does) disable the trigger
//! while the state is `Loading`.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::json;
use crate::response::OrchestrationResult;
use crate::state::RequestState;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// Path of the orchestration endpoint.
pub const ORCHESTRATE_PATH: &str = "/orchestrate";

/// Path of the health probe.
pub const HEALTH_PATH: &str = "/health";

/// Client for `POST /orchestrate`.
///
/// Cloning is cheap; clones share the transport and the state.
#[derive(Clone)]
pub struct OrchestrationClient {
    transport: Arc<dyn Transport>,
    state: Arc<watch::Sender<RequestState>>,
    strict_schema: bool,
}

impl std::fmt::Debug for OrchestrationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestrationClient")
            .field("base_url", &self.transport.base_url())
            .field("state", &self.state.borrow().label())
            .field("strict_schema", &self.strict_schema)
            .finish()
    }
}

impl OrchestrationClient {
    /// Creates an HTTP-backed client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        let strict_schema = config.strict_schema;
        Self::with_transport(Arc::new(HttpTransport::new(config))).with_strict_schema(strict_schema)
    }

    /// Creates a client over any transport, starting in `Idle`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self { transport, state: Arc::new(state), strict_schema: false }
    }

    #[must_use]
    pub fn with_strict_schema(mut self, strict: bool) -> Self {
        self.strict_schema = strict;
        self
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Runs one request lifecycle and returns the terminal state it wrote.
    ///
    /// Clears any previous result or error by entering `Loading`, sends
    /// `raw_text` byte-for-byte, then moves to `Success` or `Error`. Never
    /// retries and never times out.
    pub async fn submit(&self, raw_text: &str) -> RequestState {
        self.state.send_replace(RequestState::Loading);
        debug!(base_url = %self.base_url(), body_len = raw_text.len(), "Submission started");

        let next = match self.orchestrate(raw_text).await {
            Ok(result) => {
                info!(risk_level = result.risk_level().unwrap_or("-"), "Orchestration succeeded");
                RequestState::Success(result)
            }
            Err(e) => {
                warn!(error = %e, "Orchestration failed");
                RequestState::Error(e.to_string())
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// Runs [`submit`](Self::submit) on a new tokio task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_submit(&self, raw_text: String) -> Submission {
        let client = self.clone();
        let handle = tokio::spawn(async move { client.submit(&raw_text).await });
        Submission { handle }
    }

    /// Performs the exchange without touching the shared state.
    pub async fn orchestrate(&self, raw_text: &str) -> Result<OrchestrationResult, ClientError> {
        let response = self.transport.post_json(ORCHESTRATE_PATH, raw_text.to_string()).await?;
        let result = OrchestrationResult::new(interpret(response)?);

        let issues = result.validate();
        if !issues.is_empty() {
            if self.strict_schema {
                return Err(ClientError::Schema(issues));
            }
            warn!(fields = ?issues, "Orchestration response is missing expected fields");
        }

        Ok(result)
    }

    /// Probes `GET /health`. Does not touch the shared state.
    pub async fn health(&self) -> Result<Value, ClientError> {
        let response = self.transport.get(HEALTH_PATH).await?;
        interpret(response)
    }
}

/// Maps a raw exchange to a JSON body or an error message.
fn interpret(response: RawResponse) -> Result<Value, ClientError> {
    if !response.is_success() {
        return Err(ClientError::Status { status: response.status, body: response.body });
    }
    Ok(json::parse(&response.body)?)
}

/// Handle to a submission running on its own task.
#[derive(Debug)]
pub struct Submission {
    handle: JoinHandle<RequestState>,
}

impl Submission {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops waiting for the response. The shared state is left as it is.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the terminal state; `None` if the task was aborted.
    pub async fn join(self) -> Option<RequestState> {
        self.handle.await.ok()
    }
}
