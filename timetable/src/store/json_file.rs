//! Store backed by a single JSON file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{StoreError, TimetableStore};
use crate::domain::{Course, CourseId};
use crate::record::{courses_to_json, parse_courses};

/// Store persisting one user's timetable as a JSON array of course records.
///
/// The file is read once on open. Every mutation rewrites the whole file
/// through a temporary file in the same directory followed by a rename, so
/// readers never observe a half-written timetable.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    courses: Vec<Course>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty timetable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let courses = match std::fs::read_to_string(&path) {
            Ok(json) => parse_courses(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), courses = courses.len(), "opened timetable store");
        Ok(Self { path, courses })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically replace the file contents with `courses`.
    fn write(&self, courses: &[Course]) -> Result<(), StoreError> {
        let json = courses_to_json(courses)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), courses = courses.len(), "wrote timetable store");
        Ok(())
    }
}

impl TimetableStore for JsonFileStore {
    fn all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.clone())
    }

    fn add(&mut self, course: &Course) -> Result<(), StoreError> {
        if self.courses.contains(course) {
            return Err(StoreError::AlreadyStored(course.id()));
        }

        let mut next = self.courses.clone();
        next.push(course.clone());
        self.write(&next)?;
        self.courses = next;
        Ok(())
    }

    fn remove(&mut self, id: CourseId) -> Result<(), StoreError> {
        if !self.courses.iter().any(|c| c.id() == id) {
            return Ok(());
        }

        let next: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| c.id() != id)
            .cloned()
            .collect();
        self.write(&next)?;
        self.courses = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MinuteOfDay, TimeSlot};
    use chrono::Weekday;

    fn course(id: u32, day: Weekday) -> Course {
        let slot = TimeSlot::new(
            day,
            MinuteOfDay::from_hm(9, 0).unwrap(),
            MinuteOfDay::from_hm(10, 30).unwrap(),
        )
        .unwrap();
        Course::new(CourseId(id), format!("Course {id}"), vec![slot]).unwrap()
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("me.json")).unwrap();
        assert!(store.all().unwrap().is_empty());
        // Opening alone does not create the file
        assert!(!store.path().exists());
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.add(&course(1, Weekday::Mon)).unwrap();
        store.add(&course(2, Weekday::Tue)).unwrap();
        store.add(&course(3, Weekday::Wed)).unwrap();
        store.remove(CourseId(2)).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let courses = reopened.all().unwrap();
        assert_eq!(courses, vec![course(1, Weekday::Mon), course(3, Weekday::Wed)]);
        assert_eq!(courses[1].time_slots()[0].day(), Weekday::Wed);
    }

    #[test]
    fn remove_absent_does_not_touch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.remove(CourseId(9)).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn duplicate_add_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("me.json")).unwrap();
        store.add(&course(1, Weekday::Mon)).unwrap();
        assert!(matches!(
            store.add(&course(1, Weekday::Fri)),
            Err(StoreError::AlreadyStored(CourseId(1)))
        ));
    }

    #[test]
    fn corrupt_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the temp file cannot be created
        let path = dir.path().join("missing").join("me.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        assert!(matches!(
            store.add(&course(1, Weekday::Mon)),
            Err(StoreError::Io(_))
        ));
        assert!(store.all().unwrap().is_empty());
    }
}
