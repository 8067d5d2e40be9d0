//! Data models and processing for telemetry readings.
//!
//! This module turns the raw readings of one pass into display-ready
//! values. Nothing here performs I/O or keeps state between passes.
//!
//! ## Submodules
//!
//! - [`snapshot`]: Aggregation of a reading set ([`Snapshot`]: total, latest, window)
//! - [`alerts`]: Threshold rules and status messages ([`Thresholds`], [`Alert`])
//! - [`dashboard`]: Metrics, trend chart and preview table ([`Dashboard`], [`PassOutcome`])
//!
//! ## Data Flow
//!
//! ```text
//! Result<ReadingSet, SourceError>
//!        │
//!        ▼
//! PassOutcome::from_read()
//!        │
//!        ├──▶ FileNotReady / NoData / Failed (single notice)
//!        │
//!        └──▶ Snapshot::from_readings() ──▶ Dashboard::compute()
//!                                             ├──▶ metrics
//!                                             ├──▶ alerts::evaluate()
//!                                             ├──▶ TrendChart
//!                                             └──▶ PreviewTable
//! ```

pub mod alerts;
pub mod dashboard;
pub mod snapshot;

pub use alerts::{Alert, StatusMessage, Thresholds, Tone};
pub use dashboard::{
    Dashboard, DashboardConfig, Metric, PassOutcome, PreviewTable, Series, TrendChart,
};
pub use snapshot::{Snapshot, DEFAULT_WINDOW_SIZE};
