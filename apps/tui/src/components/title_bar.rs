//! Title bar component for the global layout.
//!
//! Shows the product name on the left and the request status on the right.

use pdm_client::view;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::icons::Icons;

/// Renders the title bar with branding and request status.
pub fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let content_area = Rect { height: area.height.saturating_sub(1), ..area };
    let border_area = Rect { y: area.y + content_area.height, height: area.height - content_area.height, ..area };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Fill(1), Constraint::Min(24)])
        .split(content_area);

    let left = Line::from(vec![
        Span::styled("PDM", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled("Predictive Maintenance Console", Style::default().fg(theme.text)),
    ]);
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let state = app.state();
    let status = if state.is_loading() {
        Span::styled(
            format!("{} {}", app.spinner.frame(app.tick_count()), view::submit_label(state)),
            Style::default().fg(theme.info),
        )
    } else if state.error().is_some() {
        Span::styled(format!("{} Error", Icons::ERROR), Style::default().fg(theme.error))
    } else if state.result().is_some() {
        Span::styled(format!("{} Done", Icons::SUCCESS), Style::default().fg(theme.success))
    } else {
        Span::styled("Idle", theme.muted())
    };
    frame.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Right), chunks[2]);

    if border_area.height > 0 {
        let rule = "─".repeat(border_area.width as usize);
        frame.render_widget(Paragraph::new(rule).style(Style::default().fg(theme.secondary)), border_area);
    }
}
