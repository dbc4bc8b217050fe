//! Key hints footer.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

/// Key hints; the submit hint is dimmed while submitting is disabled.
pub fn render_status_footer(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let key = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.text_muted);
    let disabled = Style::default().fg(theme.text_dim).add_modifier(Modifier::DIM);

    let (submit_key, submit_label) = if app.can_submit() { (key, label) } else { (disabled, disabled) };

    let mut spans = vec![
        Span::styled("[Ctrl+S]", submit_key),
        Span::styled(format!(" {}", pdm_client::view::SUBMIT_LABEL), submit_label),
    ];
    for (k, text) in [("[Ctrl+O]", "Raw JSON"), ("[Ctrl+F]", "Format"), ("[Ctrl+R]", "Reset"), ("[Ctrl+Q]", "Quit")] {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {}", text), label));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
