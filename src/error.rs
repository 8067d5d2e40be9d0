//! Error types for reading telemetry files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when a data source reads its readings.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file does not exist yet.
    ///
    /// The external writer has not produced anything; callers treat this as
    /// a waiting state rather than a failure.
    #[error("Data file not found: {}", .0.display())]
    FileNotReady(PathBuf),

    /// The file exists but could not be read.
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded as a reading.
    #[error("Parse error on line {line}: {source}")]
    Decode {
        /// 1-based line number in the file.
        line: usize,
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Returns true if this error only means the file has not been written yet.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, SourceError::FileNotReady(_))
    }
}
