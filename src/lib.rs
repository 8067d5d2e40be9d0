//! # soilwatch
//!
//! A terminal dashboard for soil telemetry.
//!
//! An external process appends one JSON reading per line to a data file.
//! This crate polls that file on a fixed interval, derives the latest
//! metrics, evaluates two threshold alerts, and draws a trend chart and a
//! raw data preview. Each pass re-reads the whole file; nothing is carried
//! from one pass to the next.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         driver loop                          │
//! │  ┌─────────┐    ┌──────────┐    ┌──────────────────────────┐ │
//! │  │ source  │───▶│   data   │───▶│ RenderTarget             │ │
//! │  │ (read)  │    │ (compute)│    │  App + ui  | LogTarget   │ │
//! │  └─────────┘    └──────────┘    └──────────────────────────┘ │
//! │        ▲                                     │               │
//! │        └──────────── sleep(refresh) ◀────────┘               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: the [`DataSource`] trait and [`FileSource`], which reads
//!   line-delimited JSON into an ordered [`ReadingSet`]
//! - **[`data`]**: pure computation - [`Snapshot`] aggregation, threshold
//!   [`alerts`](data::alerts), and the [`Dashboard`] handed to displays
//! - **[`driver`]**: single passes ([`Driver`]) and the timed loop
//!   ([`run_scheduled`])
//! - **[`ui`]** / **[`app`]**: the ratatui dashboard
//! - **[`headless`]**: a display that writes each pass to the log
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch processed_data.json in the current directory
//! soilwatch
//!
//! # Watch another file, logging to a file
//! soilwatch --file /var/lib/farm/readings.json --log-file soilwatch.log
//!
//! # No terminal UI: log every pass to stderr
//! soilwatch --headless
//! ```
//!
//! ### As a library
//!
//! ```
//! use soilwatch::{DashboardConfig, Driver, FileSource, PassOutcome};
//!
//! let driver = Driver::new(
//!     Box::new(FileSource::new("processed_data.json")),
//!     DashboardConfig::default(),
//! );
//! match driver.run_pass() {
//!     PassOutcome::Ready(dashboard) => {
//!         for metric in &dashboard.metrics {
//!             println!("{}: {}", metric.label, metric.value);
//!         }
//!     }
//!     other => println!("{:?}", other.notice()),
//! }
//! ```
//!
//! ### Running the loop with a custom display
//!
//! ```
//! use std::time::Duration;
//! use soilwatch::{run_scheduled, DashboardConfig, Driver, FileSource, LogTarget};
//!
//! # tokio_test::block_on(async {
//! let driver = Driver::new(
//!     Box::new(FileSource::new("processed_data.json")),
//!     DashboardConfig::default(),
//! );
//! let mut target = LogTarget::new();
//! let passes = run_scheduled(&driver, &mut target, Duration::from_millis(10), Some(2))
//!     .await
//!     .unwrap();
//! assert_eq!(passes, 2);
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod driver;
pub mod error;
pub mod events;
pub mod headless;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    Alert, Dashboard, DashboardConfig, Metric, PassOutcome, Snapshot, StatusMessage, Thresholds,
    Tone,
};
pub use driver::{export_pass, run_scheduled, Driver, RenderTarget};
pub use error::SourceError;
pub use headless::LogTarget;
pub use source::{DataSource, FileSource, Reading, ReadingSet};
