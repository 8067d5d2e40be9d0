//! Data source abstraction for reading telemetry.
//!
//! This module provides a trait-based abstraction over where readings come
//! from, with a file-backed implementation for the line-delimited output of
//! the external telemetry processor.

mod file;
mod reading;

pub use file::{parse_lines, FileSource};
pub use reading::{Reading, ReadingSet};

use std::fmt::Debug;

use crate::error::SourceError;

/// Trait for reading the current set of telemetry readings.
///
/// Every call returns the full, freshly read set in source order. No state
/// is carried from one call to the next.
///
/// # Example
///
/// ```
/// use soilwatch::{DataSource, FileSource};
///
/// let source = FileSource::new("processed_data.json");
/// match source.read() {
///     Ok(readings) => println!("Got {} readings", readings.len()),
///     Err(e) if e.is_not_ready() => println!("Waiting for data"),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Read all readings currently available.
    fn read(&self) -> Result<ReadingSet, SourceError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
