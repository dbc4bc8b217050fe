//! Color theme for the PDM TUI.

use ratatui::style::{Color, Modifier, Style};

/// PDM TUI color theme.
#[derive(Debug, Clone)]
pub struct PdmTheme {
    // Primary brand colors
    pub primary: Color,
    pub secondary: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Text colors
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,

    // Border colors
    pub border: Color,
    pub border_active: Color,
}

impl Default for PdmTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl PdmTheme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            // Primary: Cyan (#00D9FF)
            primary: Color::Rgb(0, 217, 255),
            // Secondary: Purple (#A78BFA)
            secondary: Color::Rgb(167, 139, 250),

            success: Color::Rgb(16, 185, 129), // Green
            warning: Color::Rgb(245, 158, 11), // Yellow
            error: Color::Rgb(239, 68, 68),    // Red
            info: Color::Rgb(6, 182, 212),     // Blue

            text: Color::Rgb(238, 238, 238),
            text_muted: Color::Rgb(128, 128, 128),
            text_dim: Color::Rgb(96, 96, 96),

            border: Color::Rgb(72, 72, 72),
            border_active: Color::Rgb(0, 217, 255),
        }
    }

    /// Theme using only the 16 ANSI colors.
    pub fn ansi() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            text: Color::White,
            text_muted: Color::Gray,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_active: Color::Cyan,
        }
    }

    /// Color for a risk level label.
    pub fn risk(&self, level: &str) -> Color {
        match level {
            "high" | "critical" => self.error,
            "medium" => self.warning,
            "low" => self.success,
            _ => self.text,
        }
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Style for the request text in the editor.
    pub fn editor_text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_colors() {
        let theme = PdmTheme::dark();
        assert_eq!(theme.risk("high"), theme.error);
        assert_eq!(theme.risk("medium"), theme.warning);
        assert_eq!(theme.risk("low"), theme.success);
        assert_eq!(theme.risk("—"), theme.text);
    }
}
