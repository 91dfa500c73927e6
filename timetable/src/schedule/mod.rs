//! The timetable: a user's enrolled courses, free of time conflicts.
//!
//! This module holds the only non-trivial logic in the crate. The
//! [`Timetable`] checks every candidate course against what is already
//! enrolled, persists accepted changes through a
//! [`TimetableStore`](crate::store::TimetableStore), and answers schedule
//! queries by scanning its own copy of the enrolled set or by filtering a
//! [`CourseCatalog`](crate::catalog::CourseCatalog).

mod error;
mod timetable;


pub use error::{ConflictKind, TimetableError};
pub use timetable::Timetable;
