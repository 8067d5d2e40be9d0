//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `SOILWATCH_*` environment variables. Command-line flags are applied on
//! top by the binary.
//!
//! ```toml
//! data_file = "processed_data.json"
//! refresh_secs = 3
//! skip_incomplete_tail = true
//! log_level = "info"
//! log_file = "soilwatch.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Default path of the line-delimited telemetry file.
pub const DEFAULT_DATA_FILE: &str = "processed_data.json";

/// Default delay between passes, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the telemetry file to poll.
    pub data_file: PathBuf,
    /// Delay between passes, in seconds.
    pub refresh_secs: u64,
    /// Skip an unterminated final line that fails to decode.
    pub skip_incomplete_tail: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Where to write logs. In the terminal UI, logs are dropped without one.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            refresh_secs: DEFAULT_REFRESH_SECS,
            skip_incomplete_tail: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus `SOILWATCH_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix("SOILWATCH").try_parsing(true))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        ensure!(settings.refresh_secs > 0, "refresh_secs must be at least 1");
        Ok(settings)
    }

    /// Delay between passes.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}
