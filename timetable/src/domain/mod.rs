//! Domain types for the course timetable.
//!
//! This module contains the value types the timetable is built from. All
//! types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod bell;
mod course;
mod error;
mod minute;
mod time_slot;

pub use bell::BellSchedule;
pub use course::{Course, CourseId};
pub use error::DomainError;
pub use minute::{MINUTES_PER_DAY, MinuteOfDay};
pub use time_slot::{TimeSlot, parse_weekday};

#[cfg(test)]
pub(crate) use time_slot::proptests as strategies;
