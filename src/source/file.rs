//! File-based data source.
//!
//! Reads a line-delimited JSON file of readings on every poll.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DataSource, Reading, ReadingSet};
use crate::error::SourceError;

/// A data source that reads telemetry from a line-delimited JSON file.
///
/// The file is owned by an external writer. It is opened, read to the end
/// and closed on every call to [`DataSource::read`]; nothing is cached
/// between reads.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    skip_incomplete_tail: bool,
}

impl FileSource {
    /// Create a new file source for the given path.
    ///
    /// An unterminated final line that fails to decode is skipped by default,
    /// since the writer may still be in the middle of appending it.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            skip_incomplete_tail: true,
        }
    }

    /// Set whether an unterminated, undecodable final line is skipped.
    ///
    /// With `false`, every malformed line fails the read.
    pub fn skip_incomplete_tail(mut self, skip: bool) -> Self {
        self.skip_incomplete_tail = skip;
        self
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn read(&self) -> Result<ReadingSet, SourceError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::FileNotReady(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        parse_lines(&content, self.skip_incomplete_tail)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Decode line-delimited readings, preserving line order.
///
/// Each line is trimmed and decoded on its own. When `skip_incomplete_tail`
/// is set, a final line with no trailing newline that fails to decode is
/// dropped instead of failing the whole read. Lines are decoded from raw
/// bytes, so a tail cut inside a multibyte character is treated the same way.
pub fn parse_lines(
    content: impl AsRef<[u8]>,
    skip_incomplete_tail: bool,
) -> Result<ReadingSet, SourceError> {
    let content = content.as_ref();
    let (body, terminated) = match content.strip_suffix(b"\n") {
        Some(body) => (body, true),
        None => (content, false),
    };
    let lines: Vec<&[u8]> = if content.is_empty() {
        Vec::new()
    } else {
        body.split(|&b| b == b'\n').collect()
    };
    let last = lines.len();

    let mut readings = Vec::with_capacity(last);
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = idx + 1;
        match serde_json::from_slice::<Reading>(raw.trim_ascii()) {
            Ok(reading) => readings.push(reading),
            Err(e) if skip_incomplete_tail && !terminated && line == last => {
                debug!(line, error = %e, "Skipping incomplete trailing line");
            }
            Err(source) => return Err(SourceError::Decode { line, source }),
        }
    }

    Ok(readings)
}
