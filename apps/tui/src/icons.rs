//! Status icons and visual indicators for the TUI.

/// Status icons for visual feedback.
pub struct Icons;

impl Icons {
    /// Success / valid
    pub const SUCCESS: &'static str = "✓";

    /// Warning
    pub const WARNING: &'static str = "⚠";

    /// Error / invalid
    pub const ERROR: &'static str = "✗";

    /// Info
    pub const INFO: &'static str = "ℹ";
}
