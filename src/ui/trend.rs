//! Trend chart of the recent window.
//!
//! Plots temperature and moisture against the file line number, oldest
//! reading on the left.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::app::App;
use crate::data::TrendChart;

/// Render the two-series line chart.
pub fn render(frame: &mut Frame, app: &App, chart: &TrendChart, area: Rect) {
    let datasets = vec![
        Dataset::default()
            .name(chart.temperature.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.temperature))
            .data(&chart.temperature.points),
        Dataset::default()
            .name(chart.moisture.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.moisture))
            .data(&chart.moisture.points),
    ];

    let [x_lo, x_hi] = chart.x_bounds;
    let [y_lo, y_hi] = chart.y_bounds;

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" Last {} Readings Trend ", app.window_size()))
                .title_style(app.theme.header)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .x_axis(
            Axis::default()
                .title("line")
                .style(Style::default().fg(app.theme.border))
                .bounds(chart.x_bounds)
                .labels(vec![
                    Span::from(format!("{:.0}", x_lo)),
                    Span::from(format!("{:.0}", x_hi)),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds(chart.y_bounds)
                .labels(vec![
                    Span::from(format!("{:.0}", y_lo)),
                    Span::from(format!("{:.0}", (y_lo + y_hi) / 2.0)),
                    Span::from(format!("{:.0}", y_hi)),
                ]),
        );

    frame.render_widget(widget, area);
}
