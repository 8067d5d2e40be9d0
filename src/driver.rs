//! The polling loop: read, compute, hand off to a display, wait, repeat.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::data::{DashboardConfig, PassOutcome};
use crate::source::DataSource;

/// A display that receives the outcome of each pass.
///
/// Implementations decide how to draw; the driver only supplies values and
/// ordering.
pub trait RenderTarget {
    /// Show the outcome of the latest pass, replacing whatever was shown before.
    fn show(&mut self, outcome: PassOutcome) -> Result<()>;
}

/// Runs single passes over a data source.
#[derive(Debug)]
pub struct Driver {
    source: Box<dyn DataSource>,
    config: DashboardConfig,
}

impl Driver {
    /// Create a driver for the given source and dashboard settings.
    pub fn new(source: Box<dyn DataSource>, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read the source and compute this pass's outcome.
    ///
    /// Every call starts from scratch; nothing from a previous pass is used.
    pub fn run_pass(&self) -> PassOutcome {
        let read = self.source.read();
        match &read {
            Ok(readings) => debug!(count = readings.len(), "Read readings"),
            Err(e) if e.is_not_ready() => debug!("Data file not present yet"),
            Err(e) => warn!(error = %e, "Pass failed"),
        }
        PassOutcome::from_read(read, &self.config)
    }
}

/// Run passes forever (or `max_passes` times), sleeping `interval` after each.
///
/// The sleep only starts once the pass has been fully shown. Returns the
/// number of passes run.
pub async fn run_scheduled<T: RenderTarget>(
    driver: &Driver,
    target: &mut T,
    interval: Duration,
    max_passes: Option<u64>,
) -> Result<u64> {
    info!(
        source = driver.source_description(),
        interval_secs = interval.as_secs_f64(),
        "Starting polling loop"
    );

    let mut passes = 0u64;
    loop {
        let outcome = driver.run_pass();
        debug!(pass = passes + 1, state = outcome.label(), "Pass complete");
        target.show(outcome)?;
        passes += 1;

        if max_passes.is_some_and(|max| passes >= max) {
            return Ok(passes);
        }
        tokio::time::sleep(interval).await;
    }
}

/// Run one pass and write its outcome to `path` as pretty JSON.
pub fn export_pass(driver: &Driver, path: &Path) -> Result<PassOutcome> {
    let outcome = driver.run_pass();
    let json = serde_json::to_string_pretty(&outcome)?;
    std::fs::write(path, json)?;
    Ok(outcome)
}
