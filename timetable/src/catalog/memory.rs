//! In-memory catalog with a start-time index.

use std::collections::HashMap;
use std::path::Path;

use chrono::Weekday;
use tracing::debug;

use super::{CatalogError, CourseCatalog};
use crate::domain::{Course, CourseId, MinuteOfDay};
use crate::record::parse_courses;

/// Catalog held entirely in memory.
///
/// Courses keep the order they were supplied in. Two indexes are built at
/// construction: one by id, and one from each slot's `(weekday, begin)` to
/// the courses starting there, so period lookups are O(1).
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    courses: Vec<Course>,

    /// Map from id -> position in `courses`.
    by_id: HashMap<CourseId, usize>,

    /// Map from slot start -> positions in `courses`, ascending.
    by_start: HashMap<(Weekday, MinuteOfDay), Vec<usize>>,
}

impl MemoryCatalog {
    /// Build a catalog from courses. Duplicate ids are rejected.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(courses.len());
        let mut by_start: HashMap<(Weekday, MinuteOfDay), Vec<usize>> = HashMap::new();

        for (idx, course) in courses.iter().enumerate() {
            if by_id.insert(course.id(), idx).is_some() {
                return Err(CatalogError::DuplicateId(course.id()));
            }

            for slot in course.time_slots() {
                let entry = by_start.entry((slot.day(), slot.begin())).or_default();
                // A course with two slots starting together is listed once
                if entry.last() != Some(&idx) {
                    entry.push(idx);
                }
            }
        }

        debug!(
            courses = courses.len(),
            start_times = by_start.len(),
            "built course catalog"
        );

        Ok(Self {
            courses,
            by_id,
            by_start,
        })
    }

    /// Parse a catalog from a JSON array of course records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::new(parse_courses(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading course catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseCatalog for MemoryCatalog {
    fn all(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }

    fn get_by_id(&self, id: CourseId) -> Result<Course, CatalogError> {
        self.by_id
            .get(&id)
            .map(|&idx| self.courses[idx].clone())
            .ok_or(CatalogError::NotFound(id))
    }

    fn get_by_period(
        &self,
        day: Weekday,
        begin: MinuteOfDay,
    ) -> Result<Vec<Course>, CatalogError> {
        Ok(self
            .by_start
            .get(&(day, begin))
            .map(|positions| {
                positions
                    .iter()
                    .map(|&idx| self.courses[idx].clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}
