//! Courses and their identifiers.

use chrono::{NaiveDateTime, Weekday};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::DomainError;
use super::time_slot::TimeSlot;

/// Stable course identifier issued by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        CourseId(id)
    }
}

/// A course offering with a fixed weekly set of meeting times.
///
/// Courses compare and hash by id alone: two values with the same id are
/// the same course even if their slots differ.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use timetable::domain::{Course, CourseId, MinuteOfDay, TimeSlot};
///
/// let hm = |s| MinuteOfDay::parse_hhmm(s).unwrap();
/// let slot = TimeSlot::new(Weekday::Mon, hm("09:00"), hm("10:30")).unwrap();
/// let course = Course::new(CourseId(1), "Compilers", vec![slot]).unwrap();
/// assert_eq!(course.to_string(), "#1 Compilers [Mon 09:00-10:30]");
///
/// // A course must meet at least once a week
/// assert!(Course::new(CourseId(2), "Reading week", vec![]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    name: String,
    time_slots: Vec<TimeSlot>,
}

impl Course {
    /// Create a course. `time_slots` must not be empty.
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        time_slots: Vec<TimeSlot>,
    ) -> Result<Self, DomainError> {
        if time_slots.is_empty() {
            return Err(DomainError::EmptyCourse(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            time_slots,
        })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Meeting times in declaration order.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Whether any slot of this course overlaps any slot of `other`.
    pub fn overlaps_with(&self, other: &Course) -> bool {
        self.time_slots
            .iter()
            .any(|mine| other.time_slots.iter().any(|theirs| mine.overlaps_with(theirs)))
    }

    /// The first slot (in declaration order) in session at `timestamp`.
    pub fn ongoing_time_slot(&self, timestamp: NaiveDateTime) -> Option<&TimeSlot> {
        self.time_slots
            .iter()
            .find(|slot| slot.contains_instant(timestamp))
    }

    /// All slots on `day`, in declaration order.
    pub fn time_slots_on(&self, day: Weekday) -> impl Iterator<Item = &TimeSlot> {
        self.time_slots.iter().filter(move |slot| slot.day() == day)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [", self.id, self.name)?;
        for (i, slot) in self.time_slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MinuteOfDay;
    use chrono::NaiveDate;

    fn slot(day: Weekday, begin: &str, end: &str) -> TimeSlot {
        TimeSlot::new(
            day,
            MinuteOfDay::parse_hhmm(begin).unwrap(),
            MinuteOfDay::parse_hhmm(end).unwrap(),
        )
        .unwrap()
    }

    fn course(id: u32, slots: Vec<TimeSlot>) -> Course {
        Course::new(CourseId(id), format!("Course {id}"), slots).unwrap()
    }

    /// 2024-03-18 is a Monday.
    fn at(day_offset: u32, time: &str) -> NaiveDateTime {
        let date = NaiveDate::from_ymd_opt(2024, 3, 18 + day_offset).unwrap();
        date.and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    #[test]
    fn empty_course_rejected() {
        assert_eq!(
            Course::new(CourseId(3), "Nothing", vec![]).unwrap_err(),
            DomainError::EmptyCourse(CourseId(3))
        );
    }

    #[test]
    fn equality_by_id_only() {
        let a = course(1, vec![slot(Weekday::Mon, "09:00", "10:00")]);
        let b = Course::new(CourseId(1), "Renamed", vec![slot(Weekday::Fri, "14:00", "15:00")])
            .unwrap();
        let c = course(2, vec![slot(Weekday::Mon, "09:00", "10:00")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(course(1, vec![slot(Weekday::Mon, "09:00", "10:00")]));
        assert!(set.contains(&course(1, vec![slot(Weekday::Tue, "11:00", "12:00")])));
        assert!(!set.contains(&course(2, vec![slot(Weekday::Mon, "09:00", "10:00")])));
    }

    #[test]
    fn overlap_any_slot_pair() {
        let a = course(
            1,
            vec![
                slot(Weekday::Mon, "09:00", "10:30"),
                slot(Weekday::Wed, "09:00", "10:30"),
            ],
        );
        let b = course(
            2,
            vec![
                slot(Weekday::Tue, "09:00", "10:30"),
                slot(Weekday::Wed, "10:00", "11:00"),
            ],
        );
        let c = course(3, vec![slot(Weekday::Wed, "10:30", "12:00")]);
        assert!(a.overlaps_with(&b));
        assert!(b.overlaps_with(&a));
        assert!(!a.overlaps_with(&c));
    }

    #[test]
    fn ongoing_slot() {
        let a = course(
            1,
            vec![
                slot(Weekday::Mon, "09:00", "10:30"),
                slot(Weekday::Tue, "13:00", "14:30"),
            ],
        );
        assert_eq!(
            a.ongoing_time_slot(at(1, "13:45")),
            Some(&slot(Weekday::Tue, "13:00", "14:30"))
        );
        assert_eq!(a.ongoing_time_slot(at(0, "10:30")), None);
        assert_eq!(a.ongoing_time_slot(at(2, "09:30")), None);
    }

    #[test]
    fn ongoing_slot_prefers_declaration_order() {
        // Malformed: two slots of the same course cover 09:30 on Monday
        let first = slot(Weekday::Mon, "09:00", "10:00");
        let second = slot(Weekday::Mon, "09:30", "11:00");
        let a = course(1, vec![first, second]);
        assert_eq!(a.ongoing_time_slot(at(0, "09:45")), Some(&first));
    }

    #[test]
    fn slots_on_day_preserve_order() {
        let late = slot(Weekday::Thu, "15:00", "16:00");
        let early = slot(Weekday::Thu, "08:00", "09:00");
        let a = course(1, vec![late, slot(Weekday::Fri, "08:00", "09:00"), early]);
        let thursday: Vec<_> = a.time_slots_on(Weekday::Thu).copied().collect();
        assert_eq!(thursday, vec![late, early]);
        assert_eq!(a.time_slots_on(Weekday::Sun).count(), 0);
    }

    #[test]
    fn display() {
        let a = Course::new(
            CourseId(42),
            "Operating Systems",
            vec![
                slot(Weekday::Mon, "09:00", "10:30"),
                slot(Weekday::Thu, "11:00", "12:30"),
            ],
        )
        .unwrap();
        assert_eq!(
            a.to_string(),
            "#42 Operating Systems [Mon 09:00-10:30, Thu 11:00-12:30]"
        );
    }
}
