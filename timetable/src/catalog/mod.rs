//! Course catalog: the read-only source of every course on offer.
//!
//! The timetable never owns catalog data. It resolves ids and filters
//! candidates through the [`CourseCatalog`] trait, which lets tests swap
//! in a fake without touching timetable logic.

mod memory;

use chrono::Weekday;

use crate::domain::{Course, CourseId, MinuteOfDay};
use crate::record::ParseError;

pub use memory::MemoryCatalog;

/// Error from a catalog lookup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No course with this id exists
    #[error("course {0} not found in catalog")]
    NotFound(CourseId),

    /// Two catalog entries share an id
    #[error("duplicate course id {0} in catalog")]
    DuplicateId(CourseId),

    /// Catalog data could not be read
    #[error("failed to load catalog: {0}")]
    Load(#[from] std::io::Error),

    /// Catalog data is malformed
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ParseError),
}

/// Read-only lookup of all possible courses.
pub trait CourseCatalog {
    /// Every known course, in catalog order.
    fn all(&self) -> Result<Vec<Course>, CatalogError>;

    /// The course with `id`, or [`CatalogError::NotFound`].
    fn get_by_id(&self, id: CourseId) -> Result<Course, CatalogError>;

    /// Every course having at least one slot that starts at `(day, begin)`.
    fn get_by_period(&self, day: Weekday, begin: MinuteOfDay)
    -> Result<Vec<Course>, CatalogError>;
}

impl<C: CourseCatalog + ?Sized> CourseCatalog for &C {
    fn all(&self) -> Result<Vec<Course>, CatalogError> {
        (**self).all()
    }

    fn get_by_id(&self, id: CourseId) -> Result<Course, CatalogError> {
        (**self).get_by_id(id)
    }

    fn get_by_period(
        &self,
        day: Weekday,
        begin: MinuteOfDay,
    ) -> Result<Vec<Course>, CatalogError> {
        (**self).get_by_period(day, begin)
    }
}
