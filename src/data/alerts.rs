//! Threshold alerts evaluated against the latest reading.
//!
//! The two rules are independent: both may fire on the same reading. When
//! neither fires a single "status OK" message is produced instead.

use serde::Serialize;

use crate::source::Reading;

/// Thresholds for the alert rules.
///
/// Both comparisons are strict: a reading sitting exactly on a threshold
/// does not alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Temperature (°C) above which the high temperature alert fires.
    pub temperature_high: f64,
    /// Soil moisture (%) below which the low moisture alert fires.
    pub moisture_low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature_high: 35.0,
            moisture_low: 30.0,
        }
    }
}

/// Visual tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::Success => "OK",
            Tone::Info => "INFO",
            Tone::Warning => "WARN",
            Tone::Error => "ALERT",
        }
    }
}

/// A single styled line of status text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// A firing alert, carrying the value that tripped it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    HighTemperature { value: f64, threshold: f64 },
    LowMoisture { value: f64, threshold: f64 },
}

impl Alert {
    /// Human-readable alert text, including the value and its threshold.
    pub fn message(&self) -> String {
        match self {
            Alert::HighTemperature { value, threshold } => format!(
                "HIGH TEMPERATURE ALERT: The current temperature is {:.2}°C, \
                 which exceeds the safe threshold ({}°C).",
                value, threshold
            ),
            Alert::LowMoisture { value, threshold } => format!(
                "LOW MOISTURE ALERT: The current soil moisture is {:.2}%, \
                 which is below the critical level ({}%). Immediate irrigation required!",
                value, threshold
            ),
        }
    }
}

/// Text of the indicator shown when no alert fires.
pub const STATUS_OK: &str =
    "STATUS OK: All sensor readings are within normal operating parameters.";

/// Evaluate both alert rules against a reading.
///
/// Returns the firing alerts in a fixed order: temperature, then moisture.
pub fn evaluate(reading: &Reading, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::with_capacity(2);

    if reading.temperature > thresholds.temperature_high {
        alerts.push(Alert::HighTemperature {
            value: reading.temperature,
            threshold: thresholds.temperature_high,
        });
    }

    if reading.moisture < thresholds.moisture_low {
        alerts.push(Alert::LowMoisture {
            value: reading.moisture,
            threshold: thresholds.moisture_low,
        });
    }

    alerts
}

/// Status lines for a set of alerts: one error line per alert, or the OK line.
pub fn status_messages(alerts: &[Alert]) -> Vec<StatusMessage> {
    if alerts.is_empty() {
        return vec![StatusMessage::new(Tone::Success, STATUS_OK)];
    }
    alerts
        .iter()
        .map(|alert| StatusMessage::new(Tone::Error, alert.message()))
        .collect()
}
