//! Per-track occupancy built during one selection call.

use std::collections::{BTreeSet, HashMap};

use crate::models::{Event, Interval};

/// Accepted intervals per track.
///
/// When a track universe is set, only tracks inside it are constrained;
/// an event's tracks outside the universe never conflict.
#[derive(Debug, Clone, Default)]
pub struct TrackOccupancy {
    universe: Option<BTreeSet<String>>,
    tracks: HashMap<String, Vec<Interval>>,
}

impl TrackOccupancy {
    /// Creates an occupancy where every track is constrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an occupancy constrained to a fixed track universe.
    pub fn with_universe(universe: BTreeSet<String>) -> Self {
        Self {
            universe: Some(universe),
            tracks: HashMap::new(),
        }
    }

    /// Whether conflicts on `track` are checked.
    pub fn is_constrained(&self, track: &str) -> bool {
        self.universe
            .as_ref()
            .is_none_or(|universe| universe.contains(track))
    }

    /// First constrained track on which `event` overlaps an accepted interval.
    pub fn first_conflict<'e>(&self, event: &'e Event) -> Option<&'e str> {
        let slot = event.interval();
        event
            .tracks
            .iter()
            .filter(|t| self.is_constrained(t))
            .find(|t| {
                self.tracks
                    .get(t.as_str())
                    .is_some_and(|busy| busy.iter().any(|w| w.overlaps(&slot)))
            })
            .map(String::as_str)
    }

    /// Whether `event` is free on every one of its constrained tracks.
    pub fn is_free(&self, event: &Event) -> bool {
        self.first_conflict(event).is_none()
    }

    /// Records `event` on every one of its constrained tracks.
    pub fn occupy(&mut self, event: &Event) {
        let slot = event.interval();
        for track in &event.tracks {
            if self.is_constrained(track) {
                self.tracks.entry(track.clone()).or_default().push(slot);
            }
        }
    }

    /// Accepted intervals on a track, in acceptance order.
    pub fn intervals(&self, track: &str) -> &[Interval] {
        self.tracks.get(track).map(Vec::as_slice).unwrap_or(&[])
    }
}
