//! The enrolled-course set and its no-overlap invariant.

use std::fmt;

use chrono::{NaiveDateTime, Weekday};
use tracing::{debug, info, warn};

use super::error::{ConflictKind, TimetableError};
use crate::catalog::CourseCatalog;
use crate::domain::{BellSchedule, Course, CourseId, MinuteOfDay, TimeSlot};
use crate::store::TimetableStore;

/// A user's enrolled courses.
///
/// No two enrolled courses have overlapping time slots. Every mutation
/// checks that against the in-memory set, writes through to the store, and
/// only then updates memory, so a failed store write leaves the timetable
/// exactly as it was.
///
/// Mutations take `&mut self`. Sharing one timetable across threads needs
/// an external lock around it.
pub struct Timetable<S, C> {
    /// Enrolled courses, in store order followed by additions.
    courses: Vec<Course>,
    store: S,
    catalog: C,
}

impl<S: TimetableStore, C: CourseCatalog> Timetable<S, C> {
    /// Load the enrolled courses from `store`.
    ///
    /// The timetable keeps its own copy of what the store returns; later
    /// changes made directly on the store are not reflected here.
    pub fn load(store: S, catalog: C) -> Result<Self, TimetableError> {
        let stored = store.all()?;
        debug!(courses = stored.len(), "loaded timetable");

        // Enrollment is unique by id: keep the first stored copy
        let mut courses: Vec<Course> = Vec::with_capacity(stored.len());
        for course in stored {
            if courses.contains(&course) {
                warn!(course = %course.id(), "dropping repeated stored course");
                continue;
            }
            courses.push(course);
        }

        // Persisted data is trusted, but report anything that slipped past
        for (i, a) in courses.iter().enumerate() {
            for b in &courses[i + 1..] {
                if a.overlaps_with(b) {
                    warn!(first = %a.id(), second = %b.id(), "stored courses conflict");
                }
            }
        }

        Ok(Self {
            courses,
            store,
            catalog,
        })
    }

    /// Enrolled courses in enrollment order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of enrolled courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if no course is enrolled.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a course with `id` is enrolled.
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.iter().any(|c| c.id() == id)
    }

    /// The first enrolled course that blocks `course`, and why.
    pub fn conflict_with(&self, course: &Course) -> Option<(&Course, ConflictKind)> {
        self.courses.iter().find_map(|existing| {
            if existing == course {
                Some((existing, ConflictKind::AlreadyEnrolled))
            } else if existing.overlaps_with(course) {
                Some((existing, ConflictKind::Overlap))
            } else {
                None
            }
        })
    }

    /// Whether `course` could be added without a conflict.
    pub fn is_available(&self, course: &Course) -> bool {
        self.conflict_with(course).is_none()
    }

    /// Enroll in `course`.
    ///
    /// Fails with [`TimetableError::Conflict`] if the course is already
    /// enrolled or overlaps an enrolled course, and with
    /// [`TimetableError::Store`] if persisting fails. Either way the
    /// timetable is unchanged.
    pub fn add_course(&mut self, course: Course) -> Result<&Course, TimetableError> {
        if let Some((existing, kind)) = self.conflict_with(&course) {
            debug!(course = %course.id(), existing = %existing.id(), ?kind, "enrollment rejected");
            return Err(TimetableError::Conflict {
                course: course.id(),
                existing: existing.id(),
                kind,
            });
        }

        self.store.add(&course)?;
        info!(course = %course.id(), name = course.name(), "enrolled");

        let idx = self.courses.len();
        self.courses.push(course);
        Ok(&self.courses[idx])
    }

    /// Look `id` up in the catalog and enroll in it.
    pub fn add_course_by_id(&mut self, id: CourseId) -> Result<&Course, TimetableError> {
        let course = self.catalog.get_by_id(id)?;
        self.add_course(course)
    }

    /// Drop the enrolled course equal to `course`.
    ///
    /// Returns the removed course, or `None` if it was not enrolled. Removing
    /// a course that is not enrolled is not an error and touches nothing.
    pub fn remove_course(&mut self, course: &Course) -> Result<Option<Course>, TimetableError> {
        self.remove_course_by_id(course.id())
    }

    /// Drop the enrolled course with `id`. See [`Timetable::remove_course`].
    pub fn remove_course_by_id(&mut self, id: CourseId) -> Result<Option<Course>, TimetableError> {
        let Some(idx) = self.courses.iter().position(|c| c.id() == id) else {
            debug!(course = %id, "not enrolled, nothing to remove");
            return Ok(None);
        };

        self.store.remove(id)?;
        let removed = self.courses.remove(idx);
        self.courses.retain(|c| c.id() != id);
        info!(course = %id, name = removed.name(), "unenrolled");
        Ok(Some(removed))
    }

    /// The slot in session at `timestamp`, if any.
    ///
    /// Enrolled courses never overlap, so at most one slot matches. Should
    /// that ever fail to hold, the earliest enrolled course wins.
    pub fn ongoing_time_slot(&self, timestamp: NaiveDateTime) -> Option<&TimeSlot> {
        self.ongoing_course(timestamp).map(|(_, slot)| slot)
    }

    /// The course in session at `timestamp` together with its slot.
    pub fn ongoing_course(&self, timestamp: NaiveDateTime) -> Option<(&Course, &TimeSlot)> {
        self.courses.iter().find_map(|course| {
            course
                .ongoing_time_slot(timestamp)
                .map(|slot| (course, slot))
        })
    }

    /// Every enrolled slot on `day`, grouped by course in enrollment order.
    pub fn time_slots_on(&self, day: Weekday) -> impl Iterator<Item = &TimeSlot> {
        self.courses
            .iter()
            .flat_map(move |course| course.time_slots_on(day))
    }

    /// Catalog courses that could be added without a conflict.
    pub fn available_courses(&self) -> Result<Vec<Course>, TimetableError> {
        let candidates = self.catalog.all()?;
        let total = candidates.len();
        let available: Vec<Course> = candidates
            .into_iter()
            .filter(|c| self.is_available(c))
            .collect();
        debug!(total, available = available.len(), "filtered catalog");
        Ok(available)
    }

    /// Catalog courses starting at `(day, begin)` that could be added
    /// without a conflict.
    pub fn available_courses_by_period(
        &self,
        day: Weekday,
        begin: MinuteOfDay,
    ) -> Result<Vec<Course>, TimetableError> {
        let candidates = self.catalog.get_by_period(day, begin)?;
        let total = candidates.len();
        let available: Vec<Course> = candidates
            .into_iter()
            .filter(|c| self.is_available(c))
            .collect();
        debug!(%day, %begin, total, available = available.len(), "filtered period");
        Ok(available)
    }

    /// Like [`Timetable::available_courses_by_period`], with the start given
    /// as a period number on `bells`.
    pub fn available_courses_in_period(
        &self,
        day: Weekday,
        period: u8,
        bells: &BellSchedule,
    ) -> Result<Vec<Course>, TimetableError> {
        let (begin, _) = bells.period_window(period)?;
        self.available_courses_by_period(day, begin)
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The catalog enrollments are resolved against.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Give back the store and catalog.
    pub fn into_parts(self) -> (S, C) {
        (self.store, self.catalog)
    }
}

impl<S, C> fmt::Display for Timetable<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, course) in self.courses.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{course}")?;
        }
        Ok(())
    }
}

impl<S, C> fmt::Debug for Timetable<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timetable")
            .field("courses", &self.courses)
            .finish_non_exhaustive()
    }
}
