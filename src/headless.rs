//! Log-only display for running without a terminal UI.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::data::{PassOutcome, Tone};
use crate::driver::RenderTarget;

/// A display that writes each pass to the log instead of drawing it.
///
/// Metrics go out at `info`, firing alerts at `warn`, failed passes at
/// `error`.
#[derive(Debug, Default)]
pub struct LogTarget {
    passes: u64,
}

impl LogTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of passes shown so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

impl RenderTarget for LogTarget {
    fn show(&mut self, outcome: PassOutcome) -> Result<()> {
        self.passes += 1;

        let Some(dashboard) = outcome.dashboard() else {
            if let Some(notice) = outcome.notice() {
                match notice.tone {
                    Tone::Error => error!(pass = self.passes, "{}", notice.text),
                    _ => info!(pass = self.passes, "{}", notice.text),
                }
            }
            return Ok(());
        };

        let metrics: Vec<String> = dashboard
            .metrics
            .iter()
            .map(|m| format!("{}={}", m.label, m.value))
            .collect();
        info!(
            pass = self.passes,
            chart_points = dashboard.chart.temperature.points.len(),
            table_rows = dashboard.table.rows.len(),
            "{}",
            metrics.join(" | ")
        );

        for message in &dashboard.status {
            match message.tone {
                Tone::Error | Tone::Warning => warn!(pass = self.passes, "{}", message.text),
                _ => info!(pass = self.passes, "{}", message.text),
            }
        }

        Ok(())
    }
}
