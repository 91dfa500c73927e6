//! Timetable store: durable persistence of one user's enrolled courses.
//!
//! The store knows nothing about conflicts. It persists whatever the
//! timetable hands it, and the timetable only hands it courses that have
//! already passed the conflict check.

mod json_file;
mod memory;

use crate::domain::{Course, CourseId};
use crate::record::ParseError;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Error from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data could not be parsed
    #[error("store data is corrupt: {0}")]
    Corrupt(#[from] ParseError),

    /// Courses could not be serialized
    #[error("failed to serialize timetable: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The course is already persisted
    #[error("course {0} is already stored")]
    AlreadyStored(CourseId),
}

/// Durable, per-user list of enrolled courses.
pub trait TimetableStore {
    /// The persisted courses, in stable order.
    fn all(&self) -> Result<Vec<Course>, StoreError>;

    /// Persist one additional course.
    fn add(&mut self, course: &Course) -> Result<(), StoreError>;

    /// Remove the persisted course with `id`. Absent ids are a no-op.
    fn remove(&mut self, id: CourseId) -> Result<(), StoreError>;
}
