//! Application state for the terminal dashboard.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::PassOutcome;
use crate::driver::{Driver, RenderTarget};
use crate::ui::Theme;

/// Main application state.
///
/// Holds only the outcome of the most recent pass; each refresh replaces it
/// entirely.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    driver: Driver,
    refresh_interval: Duration,
    pub outcome: Option<PassOutcome>,
    pub last_pass: Option<Instant>,

    // UI
    pub theme: Theme,
}

impl App {
    /// Create a new App with the given driver, detecting the terminal theme.
    pub fn new(driver: Driver, refresh_interval: Duration) -> Self {
        Self::with_theme(driver, refresh_interval, Theme::auto_detect())
    }

    /// Create a new App with an explicit theme.
    pub fn with_theme(driver: Driver, refresh_interval: Duration, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            driver,
            refresh_interval,
            outcome: None,
            last_pass: None,
            theme,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.driver.source_description()
    }

    /// Delay between passes.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Number of most recent readings charted and previewed.
    pub fn window_size(&self) -> usize {
        self.driver.config().window_size
    }

    /// Run one pass and keep its outcome for drawing.
    pub fn refresh(&mut self) -> Result<()> {
        let outcome = self.driver.run_pass();
        self.show(outcome)
    }

    /// Returns true once the refresh interval has elapsed since the last pass finished.
    pub fn refresh_due(&self) -> bool {
        self.last_pass.is_none_or(|t| t.elapsed() >= self.refresh_interval)
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

impl RenderTarget for App {
    fn show(&mut self, outcome: PassOutcome) -> Result<()> {
        self.outcome = Some(outcome);
        self.last_pass = Some(Instant::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardConfig;
    use crate::source::FileSource;

    fn app_for(path: &std::path::Path, interval: Duration) -> App {
        let driver = Driver::new(Box::new(FileSource::new(path)), DashboardConfig::default());
        App::with_theme(driver, interval, Theme::dark())
    }

    #[test]
    fn test_refresh_replaces_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed_data.json");
        let mut app = app_for(&path, Duration::from_secs(3));

        assert!(app.outcome.is_none());
        assert!(app.refresh_due());

        app.refresh().unwrap();
        assert!(matches!(app.outcome, Some(PassOutcome::FileNotReady { .. })));
        assert!(!app.refresh_due());

        std::fs::write(&path, "{\"temperature\": 25.0, \"moisture\": 50.0}\n").unwrap();
        app.refresh().unwrap();
        assert!(app.outcome.as_ref().and_then(|o| o.dashboard()).is_some());
    }

    #[test]
    fn test_zero_interval_is_always_due() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&dir.path().join("processed_data.json"), Duration::ZERO);
        app.refresh().unwrap();
        assert!(app.refresh_due());
    }

    #[test]
    fn test_quit_and_help() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&dir.path().join("processed_data.json"), Duration::from_secs(3));
        assert_eq!(app.window_size(), 20);

        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);

        app.quit();
        assert!(!app.running);
    }
}
