//! Timetable planning for students.
//!
//! Assigns selected courses to weekly time slots without overlap, then
//! sequences the study tasks of the accepted courses to minimize the
//! worst-case deadline overrun.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `Event`, `Job`,
//!   `SelectionResult`, `ScheduledJob`, `SequenceResult`
//! - **`selector`**: Greedy multi-track interval selection
//! - **`sequencer`**: Earliest-due-date sequencing on a single resource
//! - **`validation`**: Input integrity checks (intervals, durations, track sets)
//! - **`grid`**: Hour-by-weekday projection of a selection
//! - **`catalog`**: Courses and their study tasks
//! - **`config`**: Planner settings and catalog loading (TOML)
//! - **`planner`**: End-to-end flow from selected course names to a plan
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Event, Job};
//! use u_timetable::{selector, sequencer};
//!
//! let events = vec![
//!     Event::new("A", 8, 10).with_track("Mon"),
//!     Event::new("B", 9, 11).with_track("Mon"),
//!     Event::new("C", 10, 12).with_track("Mon"),
//! ];
//! let selection = selector::select(&events).unwrap();
//! assert_eq!(selection.accepted_names(), vec!["A", "C"]);
//!
//! let jobs = vec![Job::new("essay", 4, 2), Job::new("quiz", 2, 10)];
//! let result = sequencer::sequence(&jobs).unwrap();
//! assert_eq!(result.max_lateness, 2);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Scheduling)
//! - Jackson (1955), "Scheduling a Production Line to Minimize Maximum Tardiness"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod planner;
pub mod selector;
pub mod sequencer;
pub mod validation;

pub use error::{Result, TimetableError};
