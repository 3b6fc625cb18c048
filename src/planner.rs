//! End-to-end timetable planning.
//!
//! # Flow
//!
//! 1. Resolve the selected course names against the catalog.
//! 2. Select a conflict-free subset of the courses (tracks = weekdays).
//! 3. Turn the accepted courses' study tasks into jobs.
//! 4. Sequence the jobs by earliest deadline.
//! 5. Project the accepted courses onto the weekly grid.
//!
//! Empty outcomes ("nothing selected", "no valid combination", "nothing to
//! schedule") are successful plans, reported through [`PlanStatus`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::Course;
use crate::config::PlannerConfig;
use crate::error::{Result, TimetableError};
use crate::grid::Timetable;
use crate::models::{Event, Job, SelectionResult, SequenceResult};
use crate::selector::IntervalSelector;
use crate::sequencer::DeadlineSequencer;

/// Outcome classification of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    /// No known course was selected.
    NothingSelected,
    /// Courses were selected but none could be accepted.
    NoValidCombination,
    /// At least one course was accepted.
    Scheduled,
}

impl PlanStatus {
    /// Classifies a selection over `selected` candidate events.
    ///
    /// The selector always accepts the first candidate by end time, so
    /// [`Planner::plan`] never yields `NoValidCombination`. It is reported
    /// for selections built or filtered by the caller.
    pub fn classify(selected: usize, selection: &SelectionResult) -> Self {
        if selected == 0 {
            Self::NothingSelected
        } else if selection.accepted.is_empty() {
            Self::NoValidCombination
        } else {
            Self::Scheduled
        }
    }
}

/// Result of one planning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Outcome classification.
    pub status: PlanStatus,
    /// Accepted/rejected courses.
    pub selection: SelectionResult,
    /// Study tasks of the accepted courses, in run order.
    pub sequence: SequenceResult,
    /// Weekly grid of the accepted courses.
    pub timetable: Timetable,
    /// Selected names not found in the catalog (lenient mode only).
    pub unknown: Vec<String>,
}

impl Plan {
    /// Whether there are study tasks to work through.
    pub fn has_tasks(&self) -> bool {
        !self.sequence.is_empty()
    }
}

/// Timetable planner over a validated catalog.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    strict: bool,
}

impl Planner {
    /// Creates a planner, validating the configuration.
    ///
    /// # Errors
    /// Returns [`TimetableError::Validation`] if the catalog or grid
    /// settings are malformed.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            strict: false,
        })
    }

    /// In strict mode an unknown course name fails the call instead of
    /// being skipped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a week for the selected course names.
    ///
    /// Selecting a course more than once is the same as selecting it once.
    pub fn plan<S: AsRef<str>>(&self, selected: &[S]) -> Result<Plan> {
        let (courses, unknown) = self.resolve(selected)?;
        let events: Vec<Event> = courses.iter().map(|c| c.to_event()).collect();

        let selection = IntervalSelector::new()
            .with_tracks(self.config.grid.weekdays.iter().cloned())
            .select(&events)?;

        let jobs = self.jobs_for(&selection);
        let sequence = DeadlineSequencer::new()
            .with_start_time(self.config.sequence_start)
            .sequence(&jobs)?;

        let grid = &self.config.grid;
        let timetable = Timetable::build(
            &selection,
            grid.first_hour,
            grid.last_hour,
            grid.weekdays.iter().cloned(),
        );

        let status = PlanStatus::classify(events.len(), &selection);

        info!(
            ?status,
            selected = events.len(),
            accepted = selection.accepted.len(),
            rejected = selection.rejected.len(),
            tasks = sequence.len(),
            max_lateness = sequence.max_lateness,
            "plan built"
        );

        Ok(Plan {
            status,
            selection,
            sequence,
            timetable,
            unknown,
        })
    }

    fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Result<(Vec<&Course>, Vec<String>)> {
        let mut seen = HashSet::new();
        let mut courses = Vec::new();
        let mut unknown = Vec::new();

        for name in selected {
            let name: &str = name.as_ref();
            if !seen.insert(name) {
                continue;
            }
            match self.config.course(name) {
                Some(course) => courses.push(course),
                None if self.strict => {
                    return Err(TimetableError::UnknownCourse(name.to_string()));
                }
                None => {
                    warn!(course = %name, "unknown course skipped");
                    unknown.push(name.to_string());
                }
            }
        }

        Ok((courses, unknown))
    }

    fn jobs_for(&self, selection: &SelectionResult) -> Vec<Job> {
        let weekdays = &self.config.grid.weekdays;
        selection
            .accepted
            .iter()
            .filter_map(|event| self.config.course(&event.name))
            .flat_map(|course| {
                // Due days were checked by `PlannerConfig::validate`.
                course.to_jobs(weekdays).unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StudyTask;
    use crate::config::GridConfig;
    use crate::validation::ValidationErrorKind;

    fn catalog() -> PlannerConfig {
        PlannerConfig::new(vec![
            Course::new("Calculus I", 8, 10)
                .with_day("Monday")
                .with_task(StudyTask::new("Problem set", 3, "Wednesday", 8)),
            Course::new("Linear Algebra", 9, 11)
                .with_day("Monday")
                .with_task(StudyTask::new("Exercises", 2, "Tuesday", 8)),
            Course::new("Physics I", 10, 12)
                .with_day("Monday")
                .with_day("Wednesday")
                .with_task(StudyTask::new("Lab report", 4, "Monday", 2))
                .with_task(StudyTask::new("Reading", 1, "Friday", 12)),
            Course::new("Databases", 8, 10).with_day("Friday"),
        ])
    }

    #[test]
    fn test_plan_end_to_end() {
        let planner = Planner::new(catalog()).unwrap();
        let plan = planner
            .plan(&["Calculus I", "Linear Algebra", "Physics I", "Databases"])
            .unwrap();

        assert_eq!(plan.status, PlanStatus::Scheduled);
        assert_eq!(
            plan.selection.accepted_names(),
            vec!["Calculus I", "Databases", "Physics I"]
        );
        assert_eq!(plan.selection.rejected_names(), vec!["Linear Algebra"]);

        // Lab report (Mon 02:00) → Problem set (Wed 08:00 = 56) → Reading (Fri 12:00 = 108)
        assert_eq!(
            plan.sequence.names(),
            vec!["Physics I: Lab report", "Calculus I: Problem set", "Physics I: Reading"]
        );
        assert_eq!(plan.sequence.max_lateness, 2);
        assert!(plan.has_tasks());

        assert_eq!(plan.timetable.cell("Monday", 8).as_deref(), Some("Calculus I"));
        assert_eq!(plan.timetable.cell("Wednesday", 11).as_deref(), Some("Physics I"));
        assert_eq!(plan.timetable.cell("Monday", 9).as_deref(), Some("Calculus I"));
        assert!(plan.unknown.is_empty());
    }

    #[test]
    fn test_nothing_selected() {
        let planner = Planner::new(catalog()).unwrap();
        let plan = planner.plan::<&str>(&[]).unwrap();
        assert_eq!(plan.status, PlanStatus::NothingSelected);
        assert!(plan.selection.is_empty());
        assert!(!plan.has_tasks());
        assert_eq!(plan.sequence.max_lateness, 0);
        assert_eq!(plan.timetable.occupied_cells(), 0);
    }

    #[test]
    fn test_classify_status() {
        let empty = SelectionResult::default();
        assert_eq!(PlanStatus::classify(0, &empty), PlanStatus::NothingSelected);

        let all_rejected = SelectionResult {
            accepted: Vec::new(),
            rejected: vec![
                Event::new("A", 8, 10).with_track("Monday"),
                Event::new("B", 9, 11).with_track("Monday"),
            ],
        };
        assert_eq!(
            PlanStatus::classify(2, &all_rejected),
            PlanStatus::NoValidCombination
        );

        let some_accepted = SelectionResult {
            accepted: vec![Event::new("A", 8, 10).with_track("Monday")],
            rejected: vec![Event::new("B", 9, 11).with_track("Monday")],
        };
        assert_eq!(PlanStatus::classify(2, &some_accepted), PlanStatus::Scheduled);
    }

    #[test]
    fn test_course_without_tasks_has_nothing_to_schedule() {
        let planner = Planner::new(catalog()).unwrap();
        let plan = planner.plan(&["Databases"]).unwrap();
        assert_eq!(plan.status, PlanStatus::Scheduled);
        assert!(!plan.has_tasks());
    }

    #[test]
    fn test_unknown_course_lenient() {
        let planner = Planner::new(catalog()).unwrap();
        let plan = planner.plan(&["Astronomy", "Databases"]).unwrap();
        assert_eq!(plan.unknown, vec!["Astronomy"]);
        assert_eq!(plan.selection.accepted_names(), vec!["Databases"]);

        let only_unknown = planner.plan(&["Astronomy"]).unwrap();
        assert_eq!(only_unknown.status, PlanStatus::NothingSelected);
    }

    #[test]
    fn test_unknown_course_strict() {
        let planner = Planner::new(catalog()).unwrap().with_strict(true);
        let err = planner.plan(&["Databases", "Astronomy"]).unwrap_err();
        assert!(matches!(err, TimetableError::UnknownCourse(ref n) if n == "Astronomy"));
    }

    #[test]
    fn test_repeated_selection_counts_once() {
        let planner = Planner::new(catalog()).unwrap();
        let plan = planner.plan(&["Databases", "Databases"]).unwrap();
        assert_eq!(plan.selection.accepted.len(), 1);
        assert!(plan.selection.rejected.is_empty());
    }

    #[test]
    fn test_sequence_start_offset() {
        let config = catalog().with_sequence_start(48);
        let planner = Planner::new(config).unwrap();
        let plan = planner.plan(&["Calculus I"]).unwrap();
        let job = plan.sequence.job("Calculus I: Problem set").unwrap();
        assert_eq!(job.start, 48);
        assert_eq!(job.finish, 51);
        assert_eq!(job.lateness, 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlannerConfig::new(vec![Course::new("Ghost", 8, 10)]);
        let err = Planner::new(config).unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::EmptyTrackSet);
    }

    #[test]
    fn test_grid_follows_config() {
        let config = catalog().with_grid(GridConfig {
            first_hour: 8,
            last_hour: 12,
            weekdays: vec![
                "Monday".into(),
                "Tuesday".into(),
                "Wednesday".into(),
                "Thursday".into(),
                "Friday".into(),
            ],
        });
        let planner = Planner::new(config).unwrap();
        let plan = planner.plan(&["Physics I"]).unwrap();
        assert_eq!(plan.timetable.row_count(), 4);
        assert_eq!(plan.timetable.occupied_cells(), 4);
    }
}
