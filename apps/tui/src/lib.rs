//! PDM TUI library.
//!
//! Two-panel terminal front end for the orchestration client: a JSON request
//! editor on the left, the orchestration result on the right.

pub mod app;
pub mod components;
pub mod icons;
pub mod theme;
pub mod views;

pub use app::App;
