//! Client core for the predictive maintenance console.
//!
//! Collects a telemetry request as editable JSON text, submits it to an
//! orchestration API (`POST /orchestrate`) and exposes the outcome as an
//! explicit [`RequestState`].
//!
//! # Modules
//!
//! - [`editor`]: the request buffer and its validity flag
//! - [`json`]: the JSON text parser shared by the editor and the response path
//! - [`client`]: the request lifecycle over a pluggable [`Transport`]
//! - [`view`]: pure projection from state to what a UI shows
//! - [`config`]: base URL resolution and the TOML config file
//! - [`request`] / [`response`]: the backend's request and response shapes

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod json;
pub mod request;
pub mod response;
pub mod state;
pub mod transport;
pub mod view;

pub use client::{HEALTH_PATH, ORCHESTRATE_PATH, OrchestrationClient, Submission};
pub use config::{API_BASE_ENV, ClientConfig, DEFAULT_API_BASE, PdmConfig};
pub use editor::RequestEditor;
pub use error::{ClientError, ConfigError};
pub use request::{RequestIssue, TelemetryIn, TelemetryPayload, check_request, example_document};
pub use response::OrchestrationResult;
pub use state::RequestState;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use view::{EditorStatus, ResultPanel, ResultView};
