//! Terminal UI rendering using ratatui.
//!
//! This module draws the outcome of the latest pass. It never computes
//! anything itself; every value comes from [`crate::data::PassOutcome`].
//!
//! ## Submodules
//!
//! - [`common`]: Header, status bar, single-notice panel, help overlay
//! - [`metrics`]: Metric cards and the status alerts panel
//! - [`trend`]: Two-series line chart over the recent window
//! - [`preview`]: Raw data table, newest first
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├────────────┬────────────┬────────────┤
//! │ Temp card  │ Moist card │ Total card │
//! ├────────────┴────────────┴────────────┤
//! │ Current Status Alerts                │
//! ├──────────────────────────────────────┤
//! │ Trend chart (trend::render)          │
//! ├──────────────────────────────────────┤
//! │ Raw data preview (preview::render)   │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//! ```
//!
//! When there is no dashboard (file missing, empty, or unreadable), the
//! middle is replaced by a single notice.

pub mod common;
pub mod metrics;
pub mod preview;
pub mod theme;
pub mod trend;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::{StatusMessage, Tone};

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Draw the whole dashboard for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
        frame.render_widget(paragraph, centered.intersection(area));
        return;
    }

    let [header, body, status_bar] = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    common::render_header(frame, app, header);

    match app.outcome.as_ref() {
        Some(outcome) => match outcome.dashboard() {
            Some(dashboard) => {
                let [cards, alerts, chart, table] = Layout::vertical([
                    Constraint::Length(metrics::CARD_HEIGHT),
                    Constraint::Length(metrics::alerts_height(&dashboard.status, body.width)),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ])
                .areas(body);

                metrics::render_cards(frame, app, &dashboard.metrics, cards);
                metrics::render_alerts(frame, app, &dashboard.status, alerts);
                trend::render(frame, app, &dashboard.chart, chart);
                preview::render(frame, app, &dashboard.table, table);
            }
            None => {
                if let Some(notice) = outcome.notice() {
                    render_notice_area(frame, app, &notice, body);
                }
            }
        },
        None => {
            let loading = StatusMessage::new(Tone::Info, "Loading...");
            render_notice_area(frame, app, &loading, body);
        }
    }

    common::render_status_bar(frame, app, status_bar);

    // Render help overlay if active
    if app.show_help {
        common::render_help(frame, app, area);
    }
}

fn render_notice_area(frame: &mut Frame, app: &App, notice: &StatusMessage, body: Rect) {
    let [top, _] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body);
    common::render_notice(frame, app, notice, top);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dashboard::{WAITING_FOR_DATA, WAITING_FOR_FILE};
    use crate::data::DashboardConfig;
    use crate::driver::Driver;
    use crate::source::FileSource;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::Path;
    use std::time::Duration;

    fn app_for(path: &Path) -> App {
        let driver = Driver::new(Box::new(FileSource::new(path)), DashboardConfig::default());
        App::with_theme(driver, Duration::from_secs(3), Theme::dark())
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn rendered_at(content: Option<&str>, width: u16, height: u16) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed_data.json");
        if let Some(content) = content {
            std::fs::write(&path, content).unwrap();
        }
        let mut app = app_for(&path);
        app.refresh().unwrap();
        screen(&app, width, height)
    }

    fn rendered(content: Option<&str>) -> String {
        rendered_at(content, 140, 48)
    }

    #[test]
    fn test_missing_file_renders_waiting_only() {
        let text = rendered(None);
        assert!(text.contains(WAITING_FOR_FILE));
        assert!(!text.contains("Temperature (C)"));
        assert!(!text.contains("Readings Trend"));
    }

    #[test]
    fn test_empty_file_renders_waiting_for_data() {
        let text = rendered(Some(""));
        assert!(text.contains(WAITING_FOR_DATA));
        assert!(!text.contains("Current Status Alerts"));
    }

    #[test]
    fn test_dashboard_renders_all_sections() {
        let text = rendered(Some("{\"temperature\": 36.5, \"moisture\": 45.0}\n"));

        assert!(text.contains("Smart Agriculture Monitoring"));
        assert!(text.contains("Temperature (C)"));
        assert!(text.contains("36.50"));
        assert!(text.contains("45.00"));
        assert!(text.contains("Current Status Alerts"));
        assert!(text.contains("HIGH TEMPERATURE ALERT"));
        assert!(!text.contains("STATUS OK"));
        assert!(text.contains("Last 20 Readings Trend"));
        assert!(text.contains("Raw Data Preview (Latest)"));
    }

    #[test]
    fn test_ok_status_renders() {
        let text = rendered(Some("{\"temperature\": 25.0, \"moisture\": 50.0}\n"));
        assert!(text.contains("STATUS OK"));
        assert!(!text.contains("ALERT:"));
    }

    #[test]
    fn test_alerts_wrap_to_show_thresholds() {
        let content = Some("{\"temperature\": 36.5, \"moisture\": 20.0}\n");

        for (width, height) in [(80, 24), (MIN_WIDTH, MIN_HEIGHT)] {
            let text = rendered_at(content, width, height);
            assert!(text.contains("(35°C)"), "temperature threshold cut at {width}x{height}");
            assert!(text.contains("(30%)"), "moisture threshold cut at {width}x{height}");
            assert!(text.contains("20.00%"));
        }
    }

    #[test]
    fn test_small_terminal_shows_resize_hint() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("processed_data.json"));
        let text = screen(&app, 40, 10);
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_before_first_pass_shows_loading() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("processed_data.json"));
        let text = screen(&app, 100, 30);
        assert!(text.contains("Loading..."));
    }
}
