//! Aggregation of a pass's readings into display-ready values.

use crate::source::{Reading, ReadingSet};

/// Number of most recent readings kept for the trend chart and preview.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// The aggregate of one pass over the data file.
///
/// Built fresh from every read; never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    total: usize,
    latest: Reading,
    window: Vec<Reading>,
    /// 0-based file position of the first reading in `window`.
    window_start: usize,
}

impl Snapshot {
    /// Aggregate a set of readings.
    ///
    /// Returns `None` when the set is empty: there is nothing to show yet.
    pub fn from_readings(mut readings: ReadingSet, window_size: usize) -> Option<Self> {
        let latest = readings.last()?.clone();
        let total = readings.len();
        let window_start = total.saturating_sub(window_size);
        let window = readings.split_off(window_start);

        Some(Self {
            total,
            latest,
            window,
            window_start,
        })
    }

    /// Count of all readings in the file, not just the window.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The most recent reading.
    pub fn latest(&self) -> &Reading {
        &self.latest
    }

    /// The trailing window, oldest first.
    pub fn window(&self) -> &[Reading] {
        &self.window
    }

    /// Window readings paired with their 1-based file line numbers, oldest first.
    pub fn window_rows(&self) -> impl DoubleEndedIterator<Item = (usize, &Reading)> + '_ {
        self.window
            .iter()
            .enumerate()
            .map(move |(i, reading)| (self.window_start + i + 1, reading))
    }

    /// Window readings newest first, for the tabular preview.
    pub fn latest_first(&self) -> impl Iterator<Item = (usize, &Reading)> + '_ {
        self.window_rows().rev()
    }
}
