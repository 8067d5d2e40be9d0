//! Telemetry record types.
//!
//! These types match the line format written by the external telemetry
//! processor: one JSON object per line, each carrying at least a numeric
//! `temperature` and `moisture`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single telemetry sample.
///
/// Fields other than `temperature` and `moisture` are kept verbatim in
/// `extra` so they can be shown in the raw data preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,

    /// Soil moisture as a percentage (0-100).
    pub moisture: f64,

    /// Any other fields present on the line, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reading {
    /// Create a reading with no pass-through fields.
    pub fn new(temperature: f64, moisture: f64) -> Self {
        Self {
            temperature,
            moisture,
            extra: Map::new(),
        }
    }
}

/// All readings in the file for one pass, in file line order.
pub type ReadingSet = Vec<Reading>;
