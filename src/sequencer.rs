//! Earliest-due-date sequencing on a single resource.
//!
//! # Algorithm
//!
//! 1. Validate the input (see [`crate::validation::validate_jobs`]).
//! 2. Stable-sort jobs by deadline; ties keep input order.
//! 3. Run them back-to-back from the clock origin:
//!    `start = clock`, `finish = start + duration`, `clock = finish`.
//!
//! For one resource with no preemption and no release times, EDD minimizes
//! maximum lateness: swapping any adjacent pair where the later deadline
//! runs first never increases the larger of the two latenesses.
//!
//! # Complexity
//! O(n log n), dominated by the sort.
//!
//! # Reference
//! Jackson (1955), "Scheduling a Production Line to Minimize Maximum Tardiness"

use tracing::debug;

use crate::error::Result;
use crate::models::{Job, ScheduledJob, SequenceResult};
use crate::validation::validate_jobs;

/// Single-resource EDD sequencer.
///
/// # Example
///
/// ```
/// use u_timetable::models::Job;
/// use u_timetable::sequencer::DeadlineSequencer;
///
/// let jobs = vec![
///     Job::new("reading", 2, 5),
///     Job::new("essay", 3, 4),
///     Job::new("quiz", 1, 10),
/// ];
/// let result = DeadlineSequencer::new().sequence(&jobs).unwrap();
/// assert_eq!(result.names(), vec!["essay", "reading", "quiz"]);
/// assert_eq!(result.max_lateness, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeadlineSequencer {
    start_time: i64,
}

impl DeadlineSequencer {
    /// Creates a sequencer whose clock starts at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clock origin.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Clock origin.
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// Orders `jobs` by earliest deadline and places them back-to-back.
    ///
    /// # Errors
    /// Returns [`crate::TimetableError::Validation`] listing every job with
    /// a non-positive duration.
    pub fn sequence(&self, jobs: &[Job]) -> Result<SequenceResult> {
        validate_jobs(jobs)?;

        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by_key(|&i| jobs[i].deadline);

        let ordered: Vec<&Job> = indices.iter().map(|&i| &jobs[i]).collect();
        let result = self.place_all(ordered);

        debug!(
            jobs = result.len(),
            max_lateness = result.max_lateness,
            "jobs sequenced"
        );
        Ok(result)
    }

    /// Places `jobs` back-to-back in the given order, without reordering.
    ///
    /// Useful for comparing an alternative order against [`Self::sequence`].
    pub fn schedule_in_order(&self, jobs: &[Job]) -> SequenceResult {
        self.place_all(jobs.iter())
    }

    fn place_all<'a>(&self, jobs: impl IntoIterator<Item = &'a Job>) -> SequenceResult {
        let mut clock = self.start_time;
        let scheduled = jobs
            .into_iter()
            .map(|job| {
                let placed = ScheduledJob::place(job, clock);
                clock = placed.finish;
                debug!(
                    job = %placed.name,
                    start = placed.start,
                    finish = placed.finish,
                    lateness = placed.lateness,
                    "job placed"
                );
                placed
            })
            .collect();

        SequenceResult::from_jobs(scheduled)
    }
}

/// Sequences with a default [`DeadlineSequencer`] (clock starts at 0).
pub fn sequence(jobs: &[Job]) -> Result<SequenceResult> {
    DeadlineSequencer::new().sequence(jobs)
}
