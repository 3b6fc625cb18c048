//! Sequence (deadline sequencer output) model.
//!
//! Holds the run-order timeline and the lateness measures derived from it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Maximum Lateness (L_max) | Largest `max(0, finish - deadline)` |
//! | Total Lateness | Sum of per-job lateness |
//! | Makespan (C_max) | Latest finish time |
//! | On-Time Rate | Fraction finishing by their deadline |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use super::ScheduledJob;

/// An ordered single-resource schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceResult {
    /// Jobs in run order.
    pub jobs: Vec<ScheduledJob>,
    /// Maximum lateness across `jobs` (0 if all on time or empty).
    pub max_lateness: i64,
}

impl SequenceResult {
    /// Builds a result from jobs already in run order.
    pub fn from_jobs(jobs: Vec<ScheduledJob>) -> Self {
        let max_lateness = jobs.iter().map(|j| j.lateness).max().unwrap_or(0);
        Self { jobs, max_lateness }
    }

    /// Whether there is nothing scheduled.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Latest finish time (`None` if empty).
    pub fn makespan(&self) -> Option<i64> {
        self.jobs.iter().map(|j| j.finish).max()
    }

    /// Sum of lateness across all jobs.
    pub fn total_lateness(&self) -> i64 {
        self.jobs
            .iter()
            .fold(0i64, |acc, j| acc.saturating_add(j.lateness))
    }

    /// Jobs that miss their deadline, in run order.
    pub fn late_jobs(&self) -> Vec<&ScheduledJob> {
        self.jobs.iter().filter(|j| !j.is_on_time()).collect()
    }

    /// Fraction of jobs finishing on time (1.0 when empty).
    pub fn on_time_rate(&self) -> f64 {
        if self.jobs.is_empty() {
            return 1.0;
        }
        let on_time = self.jobs.iter().filter(|j| j.is_on_time()).count();
        on_time as f64 / self.jobs.len() as f64
    }

    /// Finds a scheduled job by name.
    pub fn job(&self, name: &str) -> Option<&ScheduledJob> {
        self.jobs.iter().find(|j| j.name == name)
    }

    /// Job names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.jobs.iter().map(|j| j.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn sample() -> SequenceResult {
        SequenceResult::from_jobs(vec![
            ScheduledJob::place(&Job::new("J1", 4, 2), 0),  // finish 4, late 2
            ScheduledJob::place(&Job::new("J2", 2, 10), 4), // finish 6, on time
            ScheduledJob::place(&Job::new("J3", 3, 7), 6),  // finish 9, late 2
        ])
    }

    #[test]
    fn test_from_jobs_max_lateness() {
        let s = sample();
        assert_eq!(s.max_lateness, 2);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_sequence_metrics() {
        let s = sample();
        assert_eq!(s.makespan(), Some(9));
        assert_eq!(s.total_lateness(), 4);
        assert_eq!(s.late_jobs().len(), 2);
        assert!((s.on_time_rate() - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_job_lookup() {
        let s = sample();
        assert_eq!(s.job("J2").unwrap().start, 4);
        assert!(s.job("J99").is_none());
        assert_eq!(s.names(), vec!["J1", "J2", "J3"]);
    }

    #[test]
    fn test_empty_sequence() {
        let s = SequenceResult::from_jobs(Vec::new());
        assert_eq!(s.max_lateness, 0);
        assert_eq!(s.makespan(), None);
        assert_eq!(s.total_lateness(), 0);
        assert!((s.on_time_rate() - 1.0).abs() < 1e-10);
        assert_eq!(s, SequenceResult::default());
    }
}
