//! Volatile store, for tests and one-off sessions.

use super::{StoreError, TimetableStore};
use crate::domain::{Course, CourseId};

/// Store that keeps enrolled courses in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: Vec<Course>,
}

impl MemoryStore {
    /// Create a store pre-populated with `courses`.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The stored courses.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

impl TimetableStore for MemoryStore {
    fn all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.clone())
    }

    fn add(&mut self, course: &Course) -> Result<(), StoreError> {
        if self.courses.contains(course) {
            return Err(StoreError::AlreadyStored(course.id()));
        }
        self.courses.push(course.clone());
        Ok(())
    }

    fn remove(&mut self, id: CourseId) -> Result<(), StoreError> {
        self.courses.retain(|c| c.id() != id);
        Ok(())
    }
}
