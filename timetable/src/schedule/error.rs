//! Timetable error types.

use std::fmt;

use crate::catalog::CatalogError;
use crate::domain::{CourseId, DomainError};
use crate::store::StoreError;

/// Why a course cannot join the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A course with the same id is already enrolled
    AlreadyEnrolled,

    /// A slot of the course overlaps a slot of an enrolled course
    Overlap,
}

/// Errors from timetable operations.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// The candidate duplicates or overlaps an enrolled course
    #[error("cannot enroll in {course}: {}", describe_conflict(.kind, .existing))]
    Conflict {
        course: CourseId,
        existing: CourseId,
        kind: ConflictKind,
    },

    /// No course with this id exists
    #[error("course {0} not found")]
    NotFound(CourseId),

    /// A query argument was invalid
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The catalog failed for a reason other than a missing id
    #[error(transparent)]
    Catalog(CatalogError),

    /// The store failed; the timetable is unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CatalogError> for TimetableError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => TimetableError::NotFound(id),
            other => TimetableError::Catalog(other),
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::AlreadyEnrolled => f.write_str("already enrolled"),
            ConflictKind::Overlap => f.write_str("overlaps"),
        }
    }
}

fn describe_conflict(kind: &ConflictKind, existing: &CourseId) -> String {
    match kind {
        ConflictKind::AlreadyEnrolled => kind.to_string(),
        ConflictKind::Overlap => format!("{kind} enrolled course {existing}"),
    }
}
