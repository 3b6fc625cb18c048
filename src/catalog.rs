//! Course catalog model.
//!
//! A course is a weekly slot on one or more weekdays plus the study tasks
//! that come with it. Courses become [`Event`]s for the selector; their
//! tasks become [`Job`]s for the sequencer once the course is accepted.
//!
//! # Ingestion
//! Catalog records may name their weekdays with `day` (one) and/or `days`
//! (several). Both are merged once, at deserialization, into the canonical
//! `days` list; nothing downstream looks at the raw fields.

use serde::{Deserialize, Serialize};

use crate::models::{Event, Job};

/// Hours per weekday in the linear deadline scale.
pub const HOURS_PER_DAY: i64 = 24;

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CourseRecord")]
pub struct Course {
    /// Course name, unique within the catalog.
    pub name: String,
    /// Start hour of day (inclusive).
    pub start: i64,
    /// End hour of day (exclusive).
    pub end: i64,
    /// Weekdays the course meets on, in declaration order, without repeats.
    pub days: Vec<String>,
    /// Study tasks attached to the course.
    pub tasks: Vec<StudyTask>,
}

/// A study task attached to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Task name.
    pub name: String,
    /// Effort in hours.
    pub duration: i64,
    /// Weekday the task is due on.
    pub due_day: String,
    /// Hour of day the task is due at.
    pub due_hour: i64,
}

/// Raw catalog record as written in configuration files.
#[derive(Debug, Clone, Deserialize)]
struct CourseRecord {
    name: String,
    start: i64,
    end: i64,
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    days: Vec<String>,
    #[serde(default)]
    tasks: Vec<StudyTask>,
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        let mut course = Course::new(record.name, record.start, record.end);
        for day in record.days.into_iter().chain(record.day) {
            course = course.with_day(day);
        }
        course.tasks = record.tasks;
        course
    }
}

impl Course {
    /// Creates a course with no days and no tasks.
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            days: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Adds a meeting day (ignored if already present).
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        let day = day.into();
        if !self.days.contains(&day) {
            self.days.push(day);
        }
        self
    }

    /// Adds a study task.
    pub fn with_task(mut self, task: StudyTask) -> Self {
        self.tasks.push(task);
        self
    }

    /// Whether the course meets on more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.days.len() > 1
    }

    /// The selector event for this course.
    pub fn to_event(&self) -> Event {
        Event::new(&self.name, self.start, self.end).with_tracks(self.days.iter().cloned())
    }

    /// Sequencer jobs for this course's tasks.
    ///
    /// Returns `None` if a task is due on a day not in `weekdays`.
    pub fn to_jobs(&self, weekdays: &[String]) -> Option<Vec<Job>> {
        self.tasks
            .iter()
            .map(|task| task.to_job(&self.name, weekdays))
            .collect()
    }

    /// Human-readable slot, e.g. `Monday, Wednesday 08:00-10:00`.
    pub fn describe_slot(&self) -> String {
        format!("{} {:02}:00-{:02}:00", self.days.join(", "), self.start, self.end)
    }
}

impl StudyTask {
    /// Creates a study task.
    pub fn new(
        name: impl Into<String>,
        duration: i64,
        due_day: impl Into<String>,
        due_hour: i64,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            due_day: due_day.into(),
            due_hour,
        }
    }

    /// Deadline in hours since the start of the week:
    /// `weekday_index * 24 + due_hour`.
    ///
    /// Returns `None` if `due_day` is not in `weekdays`.
    pub fn deadline(&self, weekdays: &[String]) -> Option<i64> {
        let index = weekdays.iter().position(|d| *d == self.due_day)?;
        Some(index as i64 * HOURS_PER_DAY + self.due_hour)
    }

    /// The sequencer job for this task, named `"<course>: <task>"`.
    pub fn to_job(&self, course: &str, weekdays: &[String]) -> Option<Job> {
        let deadline = self.deadline(weekdays)?;
        Some(Job::new(
            format!("{course}: {}", self.name),
            self.duration,
            deadline,
        ))
    }
}
