use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardConfig;
    use crate::driver::Driver;
    use crate::source::FileSource;
    use crate::ui::Theme;

    fn app() -> App {
        let driver = Driver::new(
            Box::new(FileSource::new("/nonexistent/processed_data.json")),
            DashboardConfig::default(),
        );
        App::with_theme(driver, Duration::from_secs(3), Theme::dark())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(app, KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.running);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(app.running);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.show_help);

        // The first key only dismisses the overlay
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.show_help);
        assert!(app.running);
    }
}
