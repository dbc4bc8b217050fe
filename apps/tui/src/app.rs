//! Application state and key handling.
//!
//! The request lifecycle belongs to [`OrchestrationClient`]; the app keeps a
//! snapshot of its state, refreshed on every [`App::tick`], and renders only
//! from that snapshot.

use crossterm::event::{KeyCode, KeyModifiers};
use pdm_client::view;
use pdm_client::{OrchestrationClient, RequestEditor, RequestState, Submission};
use tokio::sync::watch;
use tracing::debug;

use crate::components::{Spinner, TextArea};
use crate::theme::PdmTheme;

/// Main application.
pub struct App {
    /// Whether to quit
    pub should_quit: bool,
    /// Show the raw response JSON instead of the summary
    pub show_raw: bool,
    pub theme: PdmTheme,
    pub spinner: Spinner,
    textarea: TextArea,
    editor: RequestEditor,
    client: OrchestrationClient,
    state_rx: watch::Receiver<RequestState>,
    state: RequestState,
    in_flight: Vec<Submission>,
    tick: usize,
}

impl App {
    /// Creates the app with the example request loaded.
    pub fn new(client: OrchestrationClient) -> Self {
        let editor = RequestEditor::with_example();
        let theme = PdmTheme::default();
        let mut textarea = TextArea::new(editor.text());
        textarea.set_style(theme.editor_text());
        let state_rx = client.subscribe();
        let state = client.state();

        Self {
            should_quit: false,
            show_raw: false,
            theme,
            spinner: Spinner::new(),
            textarea,
            editor,
            client,
            state_rx,
            state,
            in_flight: Vec::new(),
            tick: 0,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: PdmTheme) -> Self {
        self.textarea.set_style(theme.editor_text());
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn editor(&self) -> &RequestEditor {
        &self.editor
    }

    pub fn textarea(&self) -> &TextArea {
        &self.textarea
    }

    pub fn client(&self) -> &OrchestrationClient {
        &self.client
    }

    /// The request state as of the last tick.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Number of submissions still running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|s| !s.is_finished()).count()
    }

    pub fn can_submit(&self) -> bool {
        view::can_submit(&self.state, &self.editor)
    }

    /// Pulls the latest request state and advances animations.
    pub fn tick(&mut self) {
        if self.state_rx.has_changed().unwrap_or(false) {
            self.state = self.state_rx.borrow_and_update().clone();
            debug!(state = self.state.label(), "Request state changed");
        }
        if self.state.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
        self.in_flight.retain(|s| !s.is_finished());
    }

    /// Handles a key press. Must run inside a tokio runtime.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('q' | 'c') => self.quit(),
                KeyCode::Char('s') => {
                    self.submit();
                }
                KeyCode::Char('o') => self.show_raw = !self.show_raw,
                KeyCode::Char('f') => {
                    if self.editor.format() {
                        self.textarea.set_text(self.editor.text());
                    }
                }
                KeyCode::Char('r') => {
                    self.editor.reset();
                    self.textarea.set_text(self.editor.text());
                }
                _ => {}
            }
            return;
        }

        if self.textarea.handle_key(key, modifiers) {
            self.editor.set_text(self.textarea.text());
        }
    }

    /// Starts a submission of the editor text. Returns `false` when the
    /// trigger is disabled (loading, or the buffer is not valid JSON).
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            debug!(loading = self.state.is_loading(), valid = self.editor.is_valid(), "Submit ignored");
            return false;
        }

        let submission = self.client.spawn_submit(self.editor.text().to_string());
        self.in_flight.push(submission);
        // The task publishes Loading itself; mirror it now so a second press
        // before the next tick is already guarded.
        self.state = RequestState::Loading;
        self.show_raw = false;
        true
    }

    fn quit(&mut self) {
        self.abort_in_flight();
        self.should_quit = true;
    }

    fn abort_in_flight(&mut self) {
        for submission in self.in_flight.drain(..) {
            submission.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
