//! Dashboard content computed from a snapshot.
//!
//! Everything here is pure: a [`PassOutcome`] is derived from a read result
//! and handed to whichever display draws it.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::alerts::{self, Alert, StatusMessage, Thresholds, Tone};
use super::snapshot::{Snapshot, DEFAULT_WINDOW_SIZE};
use crate::error::SourceError;
use crate::source::{Reading, ReadingSet};

/// Message shown while the data file does not exist.
pub const WAITING_FOR_FILE: &str = "Waiting for data to be generated and processed...";

/// Message shown while the data file exists but holds no readings.
pub const WAITING_FOR_DATA: &str = "Waiting for data to be processed...";

/// Settings that shape the dashboard content.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub thresholds: Thresholds,
    /// Number of most recent readings charted and previewed.
    pub window_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// A labeled scalar shown as a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// One named line of the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    /// (line number, value) points, oldest first.
    pub points: Vec<(f64, f64)>,
}

/// Two-series trend chart over the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub temperature: Series,
    pub moisture: Series,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TrendChart {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let (temperature, moisture): (Vec<_>, Vec<_>) = snapshot
            .window_rows()
            .map(|(line, r)| ((line as f64, r.temperature), (line as f64, r.moisture)))
            .unzip();

        let x_bounds = match (temperature.first(), temperature.last()) {
            (Some(first), Some(last)) if last.0 > first.0 => [first.0, last.0],
            (Some(only), _) => [only.0 - 1.0, only.0 + 1.0],
            _ => [0.0, 1.0],
        };

        let values = temperature.iter().chain(moisture.iter()).map(|(_, v)| *v);
        let y_bounds = value_bounds(values);

        Self {
            temperature: Series {
                name: "temperature",
                points: temperature,
            },
            moisture: Series {
                name: "moisture",
                points: moisture,
            },
            x_bounds,
            y_bounds,
        }
    }
}

/// Padded [min, max] range covering all values.
fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.1).max(1.0);
    [(lo - pad).floor(), (hi + pad).ceil()]
}

/// Raw data preview, newest reading first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewTable {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let extra_keys: BTreeSet<&str> = snapshot
            .window()
            .iter()
            .flat_map(|r| r.extra.keys().map(String::as_str))
            .collect();

        let mut columns = vec![
            "line".to_string(),
            "temperature".to_string(),
            "moisture".to_string(),
        ];
        columns.extend(extra_keys.iter().map(|k| k.to_string()));

        let rows = snapshot
            .latest_first()
            .map(|(line, reading)| {
                let mut row = vec![
                    line.to_string(),
                    float_cell(reading.temperature),
                    float_cell(reading.moisture),
                ];
                row.extend(extra_keys.iter().map(|k| cell(reading, k)));
                row
            })
            .collect();

        Self { columns, rows }
    }
}

/// Raw float text, keeping the decimal point on whole values (`45.0`).
fn float_cell(value: f64) -> String {
    format!("{:?}", value)
}

fn cell(reading: &Reading, key: &str) -> String {
    match reading.extra.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Everything drawn for a pass that found readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub metrics: Vec<Metric>,
    pub alerts: Vec<Alert>,
    /// Alert lines, or the single OK line when no alert fires.
    pub status: Vec<StatusMessage>,
    pub chart: TrendChart,
    pub table: PreviewTable,
}

impl Dashboard {
    /// Compute the dashboard for a snapshot.
    pub fn compute(snapshot: &Snapshot, config: &DashboardConfig) -> Self {
        let latest = snapshot.latest();

        let metrics = vec![
            Metric {
                label: "Temperature (C)",
                value: format!("{:.2}", latest.temperature),
            },
            Metric {
                label: "Soil Moisture (%)",
                value: format!("{:.2}", latest.moisture),
            },
            Metric {
                label: "Total Readings",
                value: snapshot.total().to_string(),
            },
        ];

        let alerts = alerts::evaluate(latest, &config.thresholds);
        let status = alerts::status_messages(&alerts);

        Self {
            metrics,
            alerts,
            status,
            chart: TrendChart::from_snapshot(snapshot),
            table: PreviewTable::from_snapshot(snapshot),
        }
    }

    /// Returns true when neither alert fired.
    pub fn is_ok(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Result of one read-aggregate-present pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PassOutcome {
    /// The data file does not exist yet.
    FileNotReady { path: PathBuf },
    /// The file exists but holds no readings.
    NoData,
    /// Readings were found and the dashboard computed.
    Ready(Box<Dashboard>),
    /// The file could not be read or decoded this pass.
    Failed { error: String },
}

impl PassOutcome {
    /// Derive the outcome of a pass from a source read.
    pub fn from_read(read: Result<ReadingSet, SourceError>, config: &DashboardConfig) -> Self {
        match read {
            Ok(readings) => match Snapshot::from_readings(readings, config.window_size) {
                Some(snapshot) => PassOutcome::Ready(Box::new(Dashboard::compute(&snapshot, config))),
                None => PassOutcome::NoData,
            },
            Err(SourceError::FileNotReady(path)) => PassOutcome::FileNotReady { path },
            Err(e) => PassOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    /// The single message shown in place of the dashboard, if any.
    pub fn notice(&self) -> Option<StatusMessage> {
        match self {
            PassOutcome::FileNotReady { .. } => {
                Some(StatusMessage::new(Tone::Warning, WAITING_FOR_FILE))
            }
            PassOutcome::NoData => Some(StatusMessage::new(Tone::Info, WAITING_FOR_DATA)),
            PassOutcome::Ready(_) => None,
            PassOutcome::Failed { error } => Some(StatusMessage::new(Tone::Error, error.clone())),
        }
    }

    /// The computed dashboard, if readings were found.
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            PassOutcome::Ready(dashboard) => Some(dashboard.as_ref()),
            _ => None,
        }
    }

    /// Short state label for logs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            PassOutcome::FileNotReady { .. } => "waiting for file",
            PassOutcome::NoData => "no data",
            PassOutcome::Ready(_) => "rendering",
            PassOutcome::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_lines;

    fn outcome_for(content: &str) -> PassOutcome {
        PassOutcome::from_read(parse_lines(content, true), &DashboardConfig::default())
    }

    fn dashboard_for(content: &str) -> Dashboard {
        match outcome_for(content) {
            PassOutcome::Ready(dashboard) => *dashboard,
            other => panic!("expected dashboard, got {other:?}"),
        }
    }

    fn metric_values(dashboard: &Dashboard) -> Vec<&str> {
        dashboard.metrics.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn test_missing_file_is_waiting() {
        let read = Err(SourceError::FileNotReady(PathBuf::from("processed_data.json")));
        let outcome = PassOutcome::from_read(read, &DashboardConfig::default());

        assert!(outcome.dashboard().is_none());
        let notice = outcome.notice().unwrap();
        assert_eq!(notice.tone, Tone::Warning);
        assert_eq!(notice.text, WAITING_FOR_FILE);
    }

    #[test]
    fn test_empty_file_is_no_data() {
        let outcome = outcome_for("");
        assert_eq!(outcome, PassOutcome::NoData);
        assert_eq!(outcome.notice().unwrap().text, WAITING_FOR_DATA);
    }

    #[test]
    fn test_decode_failure_is_failed_pass() {
        let outcome = outcome_for("{\"temperature\": 1.0, \"moisture\": 2.0}\ngarbage\n");
        match &outcome {
            PassOutcome::Failed { error } => assert!(error.contains("line 2")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(outcome.notice().unwrap().tone, Tone::Error);
    }

    #[test]
    fn test_high_temperature_scenario() {
        let dashboard = dashboard_for("{\"temperature\": 36.5, \"moisture\": 45.0}\n");

        assert_eq!(metric_values(&dashboard), vec!["36.50", "45.00", "1"]);
        assert_eq!(dashboard.alerts.len(), 1);
        assert!(matches!(dashboard.alerts[0], Alert::HighTemperature { .. }));
        assert_eq!(dashboard.status.len(), 1);
        assert_eq!(dashboard.status[0].tone, Tone::Error);
        assert_eq!(dashboard.chart.temperature.points, vec![(1.0, 36.5)]);
        assert_eq!(dashboard.chart.moisture.points, vec![(1.0, 45.0)]);
        assert_eq!(dashboard.table.rows, vec![vec!["1", "36.5", "45.0"]]);
    }

    #[test]
    fn test_both_alerts_scenario() {
        let dashboard = dashboard_for("{\"temperature\": 20.0, \"moisture\": 20.0}\n");

        assert_eq!(dashboard.alerts.len(), 2);
        assert!(!dashboard.is_ok());
        assert!(dashboard.status.iter().all(|m| m.tone == Tone::Error));
        assert!(dashboard.status.iter().all(|m| m.text != alerts::STATUS_OK));
    }

    #[test]
    fn test_all_clear_scenario() {
        let dashboard = dashboard_for("{\"temperature\": 25.0, \"moisture\": 50.0}\n");

        assert!(dashboard.is_ok());
        assert_eq!(
            dashboard.status,
            vec![StatusMessage::new(Tone::Success, alerts::STATUS_OK)]
        );
    }

    #[test]
    fn test_boundary_values_do_not_alert() {
        let dashboard = dashboard_for("{\"temperature\": 35.0, \"moisture\": 30.0}\n");
        assert!(dashboard.is_ok());
        assert_eq!(metric_values(&dashboard)[..2], ["35.00", "30.00"]);
    }

    #[test]
    fn test_window_scenario_with_twenty_five_lines() {
        let content: String = (1..=25)
            .map(|i| format!("{{\"temperature\": {}.0, \"moisture\": 50.0}}\n", i))
            .collect();
        let dashboard = dashboard_for(&content);

        assert_eq!(dashboard.metrics[2].value, "25");

        let chart_lines: Vec<f64> = dashboard.chart.temperature.points.iter().map(|p| p.0).collect();
        assert_eq!(chart_lines, (6..=25).map(|i| i as f64).collect::<Vec<_>>());
        let chart_temps: Vec<f64> = dashboard.chart.temperature.points.iter().map(|p| p.1).collect();
        assert_eq!(chart_temps, (6..=25).map(|i| i as f64).collect::<Vec<_>>());

        let table_lines: Vec<&str> = dashboard.table.rows.iter().map(|r| r[0].as_str()).collect();
        let expected: Vec<String> = (6..=25).rev().map(|i| i.to_string()).collect();
        assert_eq!(table_lines, expected);

        assert_eq!(dashboard.chart.x_bounds, [6.0, 25.0]);
    }

    #[test]
    fn test_table_passes_through_extra_fields() {
        let content = concat!(
            "{\"temperature\": 21.0, \"moisture\": 40.0, \"deviceId\": \"simDevice01\"}\n",
            "{\"temperature\": 22.5, \"moisture\": 41.0, \"battery\": 88, \"note\": null}\n",
        );
        let dashboard = dashboard_for(content);

        assert_eq!(
            dashboard.table.columns,
            vec!["line", "temperature", "moisture", "battery", "deviceId", "note"]
        );
        assert_eq!(dashboard.table.rows[0], vec!["2", "22.5", "41.0", "88", "", ""]);
        assert_eq!(
            dashboard.table.rows[1],
            vec!["1", "21.0", "40.0", "", "simDevice01", ""]
        );
    }

    #[test]
    fn test_chart_bounds_cover_both_series() {
        let content = concat!(
            "{\"temperature\": 21.0, \"moisture\": 40.0}\n",
            "{\"temperature\": 23.0, \"moisture\": 60.0}\n",
        );
        let dashboard = dashboard_for(content);

        let [lo, hi] = dashboard.chart.y_bounds;
        assert!(lo <= 21.0);
        assert!(hi >= 60.0);
        assert_eq!(dashboard.chart.x_bounds, [1.0, 2.0]);
    }

    #[test]
    fn test_single_point_chart_has_width() {
        let dashboard = dashboard_for("{\"temperature\": 25.0, \"moisture\": 25.0}\n");
        assert_eq!(dashboard.chart.x_bounds, [0.0, 2.0]);
        let [lo, hi] = dashboard.chart.y_bounds;
        assert!(lo < 25.0 && hi > 25.0);
    }

    #[test]
    fn test_outcome_serializes_with_state_tag() {
        let json = serde_json::to_value(outcome_for("")).unwrap();
        assert_eq!(json["state"], "no_data");

        let json =
            serde_json::to_value(outcome_for("{\"temperature\": 36.5, \"moisture\": 45.0}\n"))
                .unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["metrics"][0]["value"], "36.50");
        assert_eq!(json["alerts"][0]["kind"], "high_temperature");
    }
}
