//! Planner configuration.
//!
//! The course catalog and display settings are injected as data, loaded
//! from TOML:
//!
//! ```toml
//! sequence_start = 0
//!
//! [grid]
//! first_hour = 7
//! last_hour = 18
//! weekdays = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
//!
//! [[courses]]
//! name = "Calculus I"
//! start = 8
//! end = 10
//! day = "Monday"
//!
//! [[courses.tasks]]
//! name = "Problem set 1"
//! duration = 3
//! due_day = "Wednesday"
//! due_hour = 8
//! ```
//!
//! The configured weekdays are the full track universe: course days and
//! task due days must come from it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::catalog::Course;
use crate::error::Result;
use crate::validation::{into_result, ValidationError, ValidationErrorKind, ValidationResult};

/// Latest hour of day accepted anywhere in the configuration.
pub const MAX_HOUR: i64 = 24;

/// Timetable grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First displayed hour (inclusive).
    pub first_hour: i64,
    /// Last displayed hour (exclusive).
    pub last_hour: i64,
    /// Weekdays, in display order. Also the selector's track universe.
    pub weekdays: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: 7,
            last_hour: 18,
            weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

/// Full planner configuration: grid settings plus the course catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Sequencer clock origin, in hours since the start of the week.
    pub sequence_start: i64,
    /// Grid settings.
    pub grid: GridConfig,
    /// Course catalog.
    pub courses: Vec<Course>,
}

impl PlannerConfig {
    /// Creates a configuration with default grid settings.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Default::default()
        }
    }

    /// Sets the grid settings.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the sequencer clock origin.
    pub fn with_sequence_start(mut self, hours: i64) -> Self {
        self.sequence_start = hours;
        self
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        info!(
            courses = config.courses.len(),
            weekdays = config.grid.weekdays.len(),
            "catalog loaded"
        );
        Ok(config)
    }

    /// Reads, parses, and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Finds a course by name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// Validates grid settings and the catalog.
    ///
    /// Checks:
    /// 1. Grid hours lie in `0..=24` with `first_hour < last_hour`
    /// 2. Weekdays are non-empty and distinct
    /// 3. Course names are distinct
    /// 4. Every course has a valid slot within the day and at least one
    ///    configured weekday
    /// 5. Every task has a positive duration and a due time on a
    ///    configured weekday
    ///
    /// # Returns
    /// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let grid = &self.grid;

        if !valid_hour(grid.first_hour) || !valid_hour(grid.last_hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHour,
                format!(
                    "Grid hours [{}, {}) must lie within 0..={MAX_HOUR}",
                    grid.first_hour, grid.last_hour
                ),
            ));
        }
        if grid.first_hour >= grid.last_hour {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Grid range [{}, {}) is empty",
                    grid.first_hour, grid.last_hour
                ),
            ));
        }
        if grid.weekdays.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTrackSet,
                "Grid defines no weekdays",
            ));
        }
        let mut weekdays = HashSet::new();
        for day in &grid.weekdays {
            if !weekdays.insert(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!("Duplicate weekday: {day}"),
                ));
            }
        }

        let mut names = HashSet::new();
        for course in &self.courses {
            if !names.insert(course.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!("Duplicate course name: {}", course.name),
                ));
            }
            validate_course(course, &weekdays, &mut errors);
        }

        into_result(errors)
    }
}

fn valid_hour(hour: i64) -> bool {
    (0..=MAX_HOUR).contains(&hour)
}

fn validate_course(
    course: &Course,
    weekdays: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    if !valid_hour(course.start) || !valid_hour(course.end) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHour,
            format!(
                "Course '{}' hours [{}, {}) must lie within 0..={MAX_HOUR}",
                course.name, course.start, course.end
            ),
        ));
    }
    if course.start >= course.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInterval,
            format!(
                "Course '{}' has invalid interval [{}, {})",
                course.name, course.start, course.end
            ),
        ));
    }
    if course.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTrackSet,
            format!("Course '{}' names no day", course.name),
        ));
    }
    for day in &course.days {
        if !weekdays.contains(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTrack,
                format!("Course '{}' meets on unknown day '{day}'", course.name),
            ));
        }
    }

    for task in &course.tasks {
        if task.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Task '{}' of course '{}' has non-positive duration {}",
                    task.name, course.name, task.duration
                ),
            ));
        }
        if !weekdays.contains(task.due_day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTrack,
                format!(
                    "Task '{}' of course '{}' is due on unknown day '{}'",
                    task.name, course.name, task.due_day
                ),
            ));
        }
        if !valid_hour(task.due_hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHour,
                format!(
                    "Task '{}' of course '{}' is due at invalid hour {}",
                    task.name, course.name, task.due_hour
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StudyTask;
    use crate::TimetableError;

    const SAMPLE: &str = r#"
sequence_start = 8

[grid]
first_hour = 8
last_hour = 20
weekdays = ["Mon", "Tue", "Wed"]

[[courses]]
name = "Calculus I"
start = 8
end = 10
day = "Mon"

[[courses.tasks]]
name = "Problem set"
duration = 3
due_day = "Wed"
due_hour = 8

[[courses]]
name = "Physics I"
start = 10
end = 12
days = ["Mon", "Wed"]
"#;

    fn kinds(err: &TimetableError) -> Vec<ValidationErrorKind> {
        err.validation_errors().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_parse_sample() {
        let config = PlannerConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.sequence_start, 8);
        assert_eq!(config.grid.first_hour, 8);
        assert_eq!(config.grid.last_hour, 20);
        assert_eq!(config.grid.weekdays, vec!["Mon", "Tue", "Wed"]);
        assert_eq!(config.courses.len(), 2);

        let calc = config.course("Calculus I").unwrap();
        assert_eq!(calc.days, vec!["Mon"]);
        assert_eq!(calc.tasks[0], StudyTask::new("Problem set", 3, "Wed", 8));

        let physics = config.course("Physics I").unwrap();
        assert_eq!(physics.days, vec!["Mon", "Wed"]);
        assert!(physics.tasks.is_empty());
        assert!(config.course("Biology").is_none());
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config.sequence_start, 0);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.grid.weekdays.len(), 5);
        assert_eq!((config.grid.first_hour, config.grid.last_hour), (7, 18));
        assert!(config.courses.is_empty());
    }

    #[test]
    fn test_partial_grid_uses_defaults() {
        let config = PlannerConfig::from_toml_str("[grid]\nlast_hour = 22\n").unwrap();
        assert_eq!(config.grid.first_hour, 7);
        assert_eq!(config.grid.last_hour, 22);
        assert_eq!(config.grid.weekdays[0], "Monday");
    }

    #[test]
    fn test_syntax_error() {
        let err = PlannerConfig::from_toml_str("[[courses]\nname = ").unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err =
            PlannerConfig::from_toml_str("[[courses]]\nname = \"A\"\nstart = 8\n").unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
    }

    #[test]
    fn test_course_without_day_rejected() {
        let text = "[[courses]]\nname = \"A\"\nstart = 8\nend = 10\n";
        let err = PlannerConfig::from_toml_str(text).unwrap_err();
        assert_eq!(kinds(&err), vec![ValidationErrorKind::EmptyTrackSet]);
    }

    #[test]
    fn test_catalog_errors_collected() {
        let config = PlannerConfig::new(vec![
            Course::new("A", 10, 8).with_day("Monday"),
            Course::new("A", 8, 10).with_day("Sunday"),
            Course::new("B", 8, 30)
                .with_day("Friday")
                .with_task(StudyTask::new("t", 0, "Funday", 25)),
        ]);

        let errors = config.validate().unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidInterval,
                ValidationErrorKind::DuplicateName,
                ValidationErrorKind::UnknownTrack,
                ValidationErrorKind::InvalidHour,
                ValidationErrorKind::InvalidDuration,
                ValidationErrorKind::UnknownTrack,
                ValidationErrorKind::InvalidHour,
            ]
        );
    }

    #[test]
    fn test_grid_errors() {
        let config = PlannerConfig::default().with_grid(GridConfig {
            first_hour: 18,
            last_hour: 7,
            weekdays: vec!["Mon".into(), "Mon".into()],
        });
        let errors = config.validate().unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::InvalidInterval, ValidationErrorKind::DuplicateName]
        );

        let empty = PlannerConfig::default().with_grid(GridConfig {
            weekdays: Vec::new(),
            ..GridConfig::default()
        });
        assert!(empty
            .validate()
            .unwrap_err()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTrackSet));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlannerConfig::load("/nonexistent/u-timetable/catalog.toml").unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::new(vec![Course::new("A", 8, 10).with_day("Monday")])
            .with_sequence_start(24);
        assert_eq!(config.sequence_start, 24);
        assert!(config.validate().is_ok());
    }
}
