//! Request editor panel.

use pdm_client::view::editor_status;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::icons::Icons;
use crate::views::layout::GlobalLayout;

/// Most schema warnings listed under the editor.
const MAX_WARNINGS: usize = 3;

pub fn render_request_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(" Request ", theme.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_active));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = editor_status(app.state(), app.editor());

    let mut lines = vec![Line::from(vec![
        Span::styled("API ", theme.muted()),
        Span::styled(app.client().base_url().to_string(), Style::default().fg(theme.info)),
    ])];

    if let Some(invalid) = &status.invalid {
        lines.push(Line::from(Span::styled(
            format!("{} {}", Icons::ERROR, invalid),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(format!("{} Valid JSON", Icons::SUCCESS), Style::default().fg(theme.success))));
    }

    for warning in status.warnings.iter().take(MAX_WARNINGS) {
        lines.push(Line::from(Span::styled(format!("{} {}", Icons::WARNING, warning), Style::default().fg(theme.warning))));
    }
    if status.warnings.len() > MAX_WARNINGS {
        lines.push(Line::from(Span::styled(
            format!("  +{} more", status.warnings.len() - MAX_WARNINGS),
            Style::default().fg(theme.warning),
        )));
    }

    let [editor_area, status_area] = GlobalLayout::split_status(inner, lines.len() as u16);
    frame.render_widget(app.textarea(), editor_area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), status_area);
}
