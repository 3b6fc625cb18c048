//! Input validation for timetable problems.
//!
//! Checks structural integrity of events and jobs before they reach the
//! algorithms. Detects:
//! - Empty or inverted intervals (`start >= end`)
//! - Events with no tracks
//! - Jobs with non-positive duration
//!
//! Every problem is reported; validation does not stop at the first one.

use crate::models::{Event, Job};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An event (or course) has `start >= end`.
    InvalidInterval,
    /// A job (or study task) has `duration <= 0`.
    InvalidDuration,
    /// An event (or course) occupies no tracks.
    EmptyTrackSet,
    /// Two catalog entries share a name.
    DuplicateName,
    /// A weekday is not part of the configured week.
    UnknownTrack,
    /// An hour lies outside `0..=24`.
    InvalidHour,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates candidate events for the interval selector.
///
/// Checks:
/// 1. Every event has `start < end`
/// 2. Every event occupies at least one track
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();

    for event in events {
        if !event.interval().is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Event '{}' has invalid interval [{}, {})",
                    event.name, event.start, event.end
                ),
            ));
        }

        if event.tracks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTrackSet,
                format!("Event '{}' occupies no tracks", event.name),
            ));
        }
    }

    into_result(errors)
}

/// Validates jobs for the deadline sequencer.
///
/// Checks that every job has a positive duration. Deadlines are not
/// checked: any value is allowed, including ones already in the past.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let errors: Vec<ValidationError> = jobs
        .iter()
        .filter(|job| job.duration <= 0)
        .map(|job| {
            ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Job '{}' has non-positive duration {}", job.name, job.duration),
            )
        })
        .collect();

    into_result(errors)
}

pub(crate) fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
