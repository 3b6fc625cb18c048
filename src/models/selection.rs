//! Selection (interval selector output) model.

use serde::{Deserialize, Serialize};

use super::Event;

/// Partition of candidate events into accepted and rejected.
///
/// `accepted` is in greedy acceptance order (ascending end time);
/// `rejected` keeps the relative input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Conflict-free events.
    pub accepted: Vec<Event>,
    /// Events that conflicted with an earlier-accepted event.
    pub rejected: Vec<Event>,
}

impl SelectionResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no events were evaluated.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }

    /// Number of events evaluated.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Names of accepted events, in acceptance order.
    pub fn accepted_names(&self) -> Vec<&str> {
        self.accepted.iter().map(|e| e.name.as_str()).collect()
    }

    /// Names of rejected events, in input order.
    pub fn rejected_names(&self) -> Vec<&str> {
        self.rejected.iter().map(|e| e.name.as_str()).collect()
    }

    /// Accepted events occupying a given track.
    pub fn accepted_on(&self, track: &str) -> Vec<&Event> {
        self.accepted.iter().filter(|e| e.occupies(track)).collect()
    }

    /// Finds an accepted event by name.
    pub fn find_accepted(&self, name: &str) -> Option<&Event> {
        self.accepted.iter().find(|e| e.name == name)
    }

    /// Whether an event with this name was accepted.
    pub fn is_accepted(&self, name: &str) -> bool {
        self.find_accepted(name).is_some()
    }

    /// Whether no two accepted events overlap on a shared track.
    pub fn is_conflict_free(&self) -> bool {
        self.accepted
            .iter()
            .enumerate()
            .all(|(i, a)| self.accepted[i + 1..].iter().all(|b| !a.conflicts_with(b)))
    }
}
