//! Result panel: placeholder, progress, error or the orchestration summary.

use pdm_client::view::{self, ResultPanel, ResultView};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::icons::Icons;
use crate::theme::PdmTheme;

pub fn render_result_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let panel = view::project(app.state());

    let title = match &panel {
        ResultPanel::Result(_) if app.show_raw => " Result (raw JSON) ",
        _ => " Result ",
    };
    let block = Block::default()
        .title(Span::styled(title, theme.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let lines = match &panel {
        ResultPanel::Placeholder(hint) => vec![Line::from(Span::styled(*hint, theme.muted()))],
        ResultPanel::Loading => vec![Line::from(Span::styled(
            format!("{} {}", app.spinner.frame(app.tick_count()), view::RUNNING_LABEL),
            Style::default().fg(theme.info),
        ))],
        ResultPanel::Error(message) => error_lines(message, theme),
        ResultPanel::Result(result) if app.show_raw => {
            result.raw_json.lines().map(|l| Line::from(l.to_string())).collect()
        }
        ResultPanel::Result(result) => summary_lines(result, theme),
    };

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn error_lines<'a>(message: &'a str, theme: &PdmTheme) -> Vec<Line<'a>> {
    let style = Style::default().fg(theme.error);
    let mut lines = vec![Line::from(Span::styled(
        format!("{} Request failed", Icons::ERROR),
        style.add_modifier(Modifier::BOLD),
    ))];
    lines.extend(message.lines().map(|l| Line::from(Span::styled(l, style))));
    lines
}

fn section(title: &'static str, theme: &PdmTheme) -> Line<'static> {
    Line::from(Span::styled(title, theme.heading()))
}

fn field<'a>(label: &'static str, value: &'a str, theme: &PdmTheme) -> Line<'a> {
    Line::from(vec![Span::styled(format!("  {}: ", label), theme.muted()), Span::raw(value)])
}

/// One indented line per line of `text`, keeping its line breaks.
fn indented_lines(text: &str) -> Vec<Line<'_>> {
    let lines: Vec<Line<'_>> = text.lines().map(|l| Line::from(vec![Span::raw("  "), Span::raw(l)])).collect();
    if lines.is_empty() {
        return vec![Line::default()];
    }
    lines
}

fn summary_lines<'a>(result: &'a ResultView, theme: &PdmTheme) -> Vec<Line<'a>> {
    let mut lines = vec![
        section("Risk", theme),
        Line::from(vec![
            Span::styled("  Score: ", theme.muted()),
            Span::styled(
                result.risk_headline.as_str(),
                Style::default().fg(theme.risk(&result.risk_level)).add_modifier(Modifier::BOLD),
            ),
        ]),
        field("Component", &result.component, theme),
        Line::default(),
        section("Booking", theme),
        field("Center", &result.center_id, theme),
        field("Starts", &result.starts_at, theme),
    ];
    if let Some(ends_at) = &result.ends_at {
        lines.push(field("Ends", ends_at, theme));
    }
    lines.push(field("Status", &result.status, theme));

    lines.push(Line::default());
    lines.push(section("Root cause", theme));
    lines.extend(indented_lines(&result.rca_summary));
    if let Some(cases) = &result.similar_cases {
        lines.push(field("Similar cases", cases, theme));
    }

    lines.push(Line::default());
    lines.push(section("Voice script", theme));
    lines.extend(indented_lines(&result.voice_script));

    if result.security_allowed == Some(false) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} Security check did not allow this request", Icons::WARNING),
            Style::default().fg(theme.warning),
        )));
    }

    if !result.missing_fields.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} Missing: {}", Icons::INFO, result.missing_fields.join(", ")),
            Style::default().fg(theme.text_dim),
        )));
    }

    lines
}
