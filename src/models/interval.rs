//! Half-open time interval.
//!
//! # Time Model
//! Times are integer hours. The consumer defines what hour 0 means; the
//! planner uses hours since the start of the week for deadlines and hour of
//! day for course slots.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end. Two intervals that
/// merely touch (`a.end == b.start`) do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (inclusive).
    pub start: i64,
    /// Interval end (exclusive).
    pub end: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of this interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Whether a time point falls within this interval.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(other.end <= self.start || self.end <= other.start)
    }
}
