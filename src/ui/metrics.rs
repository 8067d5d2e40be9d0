//! Metric cards and the alert panel.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{Metric, StatusMessage};

/// Height of a metric card, borders included.
pub const CARD_HEIGHT: u16 = 3;

/// Render metric cards side by side, one equal-width column each.
pub fn render_cards(frame: &mut Frame, app: &App, metrics: &[Metric], area: Rect) {
    if metrics.is_empty() {
        return;
    }

    let columns = Layout::horizontal(vec![Constraint::Fill(1); metrics.len()]).split(area);

    for (metric, column) in metrics.iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            metric.value.clone(),
            app.theme.metric_value,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", metric.label))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );
        frame.render_widget(card, *column);
    }
}

/// Height needed to show every status message wrapped to `width`, borders
/// included.
pub fn alerts_height(status: &[StatusMessage], width: u16) -> u16 {
    // Borders, plus the badge's padding that word splitting does not count
    let inner = usize::from(width.saturating_sub(4));
    let rows: usize = status
        .iter()
        .map(|message| wrapped_rows(&status_text(message), inner))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Plain text of a status line as drawn: the tone badge, then the message.
fn status_text(message: &StatusMessage) -> String {
    format!(" {}  {}", message.tone.symbol(), message.text)
}

/// Rows taken by `text` under greedy word wrapping at `width` columns.
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than the panel are split across rows
        rows += (len - 1) / width;
        used = (len - 1) % width + 1;
    }
    rows
}

/// Render the "Current Status Alerts" panel, one wrapped paragraph per
/// message.
pub fn render_alerts(frame: &mut Frame, app: &App, status: &[StatusMessage], area: Rect) {
    let lines: Vec<Line> = status
        .iter()
        .map(|message| {
            let style = app.theme.tone_style(message.tone);
            Line::from(vec![
                Span::styled(
                    format!(" {} ", message.tone.symbol()),
                    style.add_modifier(Modifier::REVERSED),
                ),
                Span::raw(" "),
                Span::styled(message.text.clone(), style),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Current Status Alerts ")
            .title_style(app.theme.header)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );
    frame.render_widget(panel, area);
}
