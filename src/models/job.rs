//! Job model.
//!
//! A job is a unit of study work to be run on the single implicit resource
//! (the student). Jobs are independent: no precedence, no release times,
//! no preemption.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.2

use serde::{Deserialize, Serialize};

/// A job to be sequenced.
///
/// Duration and deadline share one linear time unit (hours since the
/// scheduling epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job name.
    pub name: String,
    /// Processing time. Must be positive.
    pub duration: i64,
    /// Due time. May be negative or already unreachable.
    pub deadline: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(name: impl Into<String>, duration: i64, deadline: i64) -> Self {
        Self {
            name: name.into(),
            duration,
            deadline,
        }
    }
}

/// A job placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// Job name.
    pub name: String,
    /// Processing time.
    pub duration: i64,
    /// Due time.
    pub deadline: i64,
    /// Start time.
    pub start: i64,
    /// Completion time (`start + duration`).
    pub finish: i64,
    /// `max(0, finish - deadline)`.
    pub lateness: i64,
}

impl ScheduledJob {
    /// Places `job` at `start`.
    ///
    /// Arithmetic saturates at the `i64` bounds, so an extreme deadline
    /// yields an extreme lateness rather than wrapping.
    pub fn place(job: &Job, start: i64) -> Self {
        let finish = start.saturating_add(job.duration);
        Self {
            name: job.name.clone(),
            duration: job.duration,
            deadline: job.deadline,
            start,
            finish,
            lateness: finish.saturating_sub(job.deadline).max(0),
        }
    }

    /// Whether the job completes by its deadline.
    #[inline]
    pub fn is_on_time(&self) -> bool {
        self.lateness == 0
    }

    /// Time left between completion and the deadline (0 if late).
    #[inline]
    pub fn slack(&self) -> i64 {
        self.deadline.saturating_sub(self.finish).max(0)
    }
}
