//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Tone;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and active elements.
    pub highlight: Color,
    /// Color for success messages.
    pub success: Color,
    /// Color for informational messages.
    pub info: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for error and alert messages.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Line color of the temperature series.
    pub temperature: Color,
    /// Line color of the moisture series.
    pub moisture: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for metric values.
    pub metric_value: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::Gray,
            temperature: Color::LightRed,
            moisture: Color::LightBlue,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            metric_value: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGray,
            temperature: Color::Red,
            moisture: Color::Blue,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            metric_value: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a message tone
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Success => Style::default().fg(self.success),
            Tone::Info => Style::default().fg(self.info),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }
}
