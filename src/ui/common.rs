//! Common UI components shared across the dashboard.
//!
//! This module contains the header, the status bar, the single-notice
//! panel shown while there is nothing to chart, and the help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::StatusMessage;

/// Dashboard title.
pub const TITLE: &str = "Smart Agriculture Monitoring";

/// Name of the device whose telemetry is shown.
pub const DEVICE_NAME: &str = "simDevice01";

/// Render the two-line header: title and telemetry origin.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(vec![Span::styled(
            format!(" {} ", TITLE),
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::raw(" Real-time telemetry from "),
            Span::styled(DEVICE_NAME, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("."),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render a single styled message inside a bordered panel.
pub fn render_notice(frame: &mut Frame, app: &App, message: &StatusMessage, area: Rect) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", message.tone.symbol()),
            app.theme.tone_style(message.tone).add_modifier(Modifier::REVERSED),
        ),
        Span::raw(" "),
        Span::styled(message.text.clone(), app.theme.tone_style(message.tone)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since the last pass, pass state, controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match (&app.outcome, app.last_pass) {
        (Some(outcome), Some(at)) => format!(
            " {} | Updated {:.1}s ago | {} | ?:help q:quit",
            app.source_description(),
            at.elapsed().as_secs_f64(),
            outcome.label(),
        ),
        _ => format!(" {} | Loading... | q:quit", app.source_description()),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from("  Ctrl+C    Quit"),
        Line::from(""),
        Line::from(format!(
            "  Data refreshes every {}s",
            app.refresh_interval().as_secs()
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block).alignment(Alignment::Left);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 11u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
