//! Raw data preview table, newest reading first.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::PreviewTable;

/// Render the preview table.
pub fn render(frame: &mut Frame, app: &App, table: &PreviewTable, area: Rect) {
    let header = Row::new(table.columns.iter().map(|c| Cell::from(c.clone())))
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|value| Cell::from(value.clone()))))
        .collect();

    // Line number column stays narrow, the rest share the width
    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(6))
        .chain(std::iter::repeat(Constraint::Fill(1)).take(table.columns.len().saturating_sub(1)))
        .collect();

    let widget = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Raw Data Preview (Latest) ")
            .title_style(app.theme.header)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(widget, area);
}
