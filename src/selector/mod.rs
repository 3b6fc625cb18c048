//! Greedy multi-track interval selection.
//!
//! Picks a conflict-free subset of events, each of which may recur on
//! several independent tracks (weekdays).
//!
//! # Algorithm
//!
//! 1. Validate the input (see [`crate::validation::validate_events`]).
//! 2. Stable-sort events by end time; ties keep input order.
//! 3. For each event, accept it iff its `[start, end)` slot is free on
//!    every one of its tracks, then mark the slot busy on all of them.
//!
//! With a single shared track this is the classic earliest-finish-time
//! greedy and yields a maximum-cardinality set. With events spanning
//! several tracks it is a heuristic: accepting a two-track event early can
//! block two single-track events that would together have fit.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n * k) overlap checks, where k is the
//! number of events already accepted on a track.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

mod occupancy;

pub use occupancy::TrackOccupancy;

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::models::{Event, SelectionResult};
use crate::validation::validate_events;

/// Multi-track interval selector.
///
/// # Example
///
/// ```
/// use u_timetable::models::Event;
/// use u_timetable::selector::IntervalSelector;
///
/// let events = vec![
///     Event::new("D", 8, 10).with_tracks(["Tue", "Thu"]),
///     Event::new("E", 9, 11).with_track("Thu"),
/// ];
/// let result = IntervalSelector::new().select(&events).unwrap();
/// assert_eq!(result.accepted_names(), vec!["D"]);
/// assert_eq!(result.rejected_names(), vec!["E"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntervalSelector {
    universe: Option<BTreeSet<String>>,
}

impl IntervalSelector {
    /// Creates a selector that constrains every track it sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts conflict checks to a fixed track universe.
    ///
    /// Tracks outside the universe are treated as unconstrained and never
    /// cause a conflict, so callers must pass the full set of tracks.
    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.universe = Some(tracks.into_iter().map(Into::into).collect());
        self
    }

    /// Selects a conflict-free subset of `events`.
    ///
    /// # Errors
    /// Returns [`crate::TimetableError::Validation`] listing every event
    /// with `start >= end` or an empty track set. Nothing is selected in
    /// that case.
    pub fn select(&self, events: &[Event]) -> Result<SelectionResult> {
        validate_events(events)?;

        let mut order: Vec<usize> = (0..events.len()).collect();
        order.sort_by_key(|&i| events[i].end);

        let mut occupancy = match &self.universe {
            Some(universe) => TrackOccupancy::with_universe(universe.clone()),
            None => TrackOccupancy::new(),
        };
        let mut accepted = Vec::new();
        let mut is_rejected = vec![false; events.len()];

        for idx in order {
            let event = &events[idx];
            match occupancy.first_conflict(event) {
                Some(track) => {
                    debug!(
                        event = %event.name,
                        %track,
                        start = event.start,
                        end = event.end,
                        "event rejected"
                    );
                    is_rejected[idx] = true;
                }
                None => {
                    debug!(
                        event = %event.name,
                        start = event.start,
                        end = event.end,
                        "event accepted"
                    );
                    occupancy.occupy(event);
                    accepted.push(event.clone());
                }
            }
        }

        let rejected = events
            .iter()
            .zip(&is_rejected)
            .filter(|(_, rejected)| **rejected)
            .map(|(e, _)| e.clone())
            .collect();

        Ok(SelectionResult { accepted, rejected })
    }
}

/// Selects with a default [`IntervalSelector`] (every track constrained).
pub fn select(events: &[Event]) -> Result<SelectionResult> {
    IntervalSelector::new().select(events)
}
