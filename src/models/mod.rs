//! Timetable domain models.
//!
//! Plain data exchanged between the caller and the two algorithms. All
//! values are created fresh per call and carry no persisted state.
//!
//! # Domain Mappings
//!
//! | u-timetable | Student planner | Room booking | Shift rota |
//! |-------------|-----------------|--------------|------------|
//! | Event | Course meeting | Booking | Shift |
//! | Track | Weekday | Room | Worker |
//! | Job | Study task | Cleaning job | Errand |

mod event;
mod interval;
mod job;
mod selection;
mod sequence;

pub use event::Event;
pub use interval::Interval;
pub use job::{Job, ScheduledJob};
pub use selection::SelectionResult;
pub use sequence::SequenceResult;
