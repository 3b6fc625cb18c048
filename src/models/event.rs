//! Event model.
//!
//! An event is a candidate for the timetable: a named time slot that recurs
//! on one or more tracks (weekdays). Accepting an event occupies its slot on
//! every one of its tracks at once.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Interval;

/// A weekly recurring event (e.g., a course meeting).
///
/// Identity for conflict purposes is the slot and the tracks only; `name`
/// is carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name, unique within a scheduling call.
    pub name: String,
    /// Start hour (inclusive).
    pub start: i64,
    /// End hour (exclusive). Must be greater than `start`.
    pub end: i64,
    /// Tracks (e.g., weekday names) occupied by this event.
    pub tracks: BTreeSet<String>,
}

impl Event {
    /// Creates a new event with no tracks.
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            tracks: BTreeSet::new(),
        }
    }

    /// Adds a track.
    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.tracks.insert(track.into());
        self
    }

    /// Adds several tracks.
    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks.extend(tracks.into_iter().map(Into::into));
        self
    }

    /// The half-open slot `[start, end)`.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Length of the slot in hours.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this event occupies the given track.
    pub fn occupies(&self, track: &str) -> bool {
        self.tracks.contains(track)
    }

    /// Whether this event and `other` share a track and overlap in time.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.interval().overlaps(&other.interval())
            && self.tracks.iter().any(|t| other.tracks.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let e = Event::new("Calculus I", 8, 10)
            .with_track("Monday")
            .with_tracks(["Wednesday", "Monday"]);

        assert_eq!(e.name, "Calculus I");
        assert_eq!(e.interval(), Interval::new(8, 10));
        assert_eq!(e.duration(), 2);
        assert_eq!(e.tracks.len(), 2);
        assert!(e.occupies("Monday"));
        assert!(e.occupies("Wednesday"));
        assert!(!e.occupies("Friday"));
    }

    #[test]
    fn test_conflicts_with() {
        let a = Event::new("A", 8, 10).with_tracks(["Tue", "Thu"]);
        let b = Event::new("B", 9, 11).with_track("Thu");
        let c = Event::new("C", 9, 11).with_track("Mon");
        let d = Event::new("D", 10, 12).with_track("Thu");

        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
        assert!(!a.conflicts_with(&c)); // no shared track
        assert!(!a.conflicts_with(&d)); // touching
    }

    #[test]
    fn test_event_serde_shape() {
        let e = Event::new("A", 8, 10).with_track("Mon");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["start"], 8);
        assert_eq!(json["end"], 10);
        assert_eq!(json["tracks"][0], "Mon");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }
}
