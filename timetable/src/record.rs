//! JSON wire format for courses.
//!
//! Catalog files and timetable store files share one record shape:
//!
//! ```json
//! {"id": 7, "name": "Compilers", "slots": [{"day": "Mon", "begin": "09:00", "end": "10:30"}]}
//! ```
//!
//! Records are plain serde types; conversion into domain types validates
//! every field, so a malformed file fails to load rather than producing
//! a course that breaks the timetable's invariants.

use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseId, DomainError, MinuteOfDay, TimeSlot, parse_weekday};

/// A course as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: u32,
    pub name: String,
    pub slots: Vec<SlotRecord>,
}

/// A time slot as stored on disk. Times are "HH:MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub day: String,
    pub begin: String,
    pub end: String,
}

/// A record that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid course record {id}: {source}")]
pub struct RecordError {
    pub id: CourseId,
    #[source]
    pub source: DomainError,
}

impl TryFrom<SlotRecord> for TimeSlot {
    type Error = DomainError;

    fn try_from(record: SlotRecord) -> Result<Self, Self::Error> {
        let day = parse_weekday(&record.day)?;
        let begin = MinuteOfDay::parse_hhmm(&record.begin)?;
        let end = MinuteOfDay::parse_hhmm(&record.end)?;
        TimeSlot::new(day, begin, end)
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = RecordError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let id = CourseId(record.id);
        let with_id = |source| RecordError { id, source };

        let slots = record
            .slots
            .into_iter()
            .map(TimeSlot::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(with_id)?;

        Course::new(id, record.name, slots).map_err(with_id)
    }
}

impl From<&TimeSlot> for SlotRecord {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            day: slot.day().to_string(),
            begin: slot.begin().to_string(),
            end: slot.end().to_string(),
        }
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().0,
            name: course.name().to_string(),
            slots: course.time_slots().iter().map(SlotRecord::from).collect(),
        }
    }
}

/// Parse a JSON array of course records into validated courses.
pub fn parse_courses(json: &str) -> Result<Vec<Course>, ParseError> {
    let records: Vec<CourseRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|r| Course::try_from(r).map_err(ParseError::from))
        .collect()
}

/// Serialize courses as a pretty-printed JSON array of records.
pub fn courses_to_json(courses: &[Course]) -> Result<String, serde_json::Error> {
    let records: Vec<CourseRecord> = courses.iter().map(CourseRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

/// Failure to turn JSON text into courses.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Text is not a JSON array of records
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but is not a valid course
    #[error(transparent)]
    Invalid(#[from] RecordError),
}
