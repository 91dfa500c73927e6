//! Weekly recurring time slots.

use chrono::{Datelike, NaiveDateTime, Weekday};
use std::fmt;

use super::error::DomainError;
use super::minute::MinuteOfDay;

/// One weekly recurring interval at which a course meets.
///
/// A slot covers the half-open range `[begin, end)` on its weekday, so a
/// slot ending at 10:30 and another beginning at 10:30 on the same day do
/// not overlap.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use timetable::domain::{MinuteOfDay, TimeSlot};
///
/// let hm = |s| MinuteOfDay::parse_hhmm(s).unwrap();
/// let first = TimeSlot::new(Weekday::Mon, hm("09:00"), hm("10:30")).unwrap();
/// let second = TimeSlot::new(Weekday::Mon, hm("10:30"), hm("12:00")).unwrap();
/// let clash = TimeSlot::new(Weekday::Mon, hm("10:00"), hm("11:00")).unwrap();
///
/// assert!(!first.overlaps_with(&second));
/// assert!(first.overlaps_with(&clash));
///
/// // Empty and reversed ranges are rejected
/// assert!(TimeSlot::new(Weekday::Mon, hm("10:00"), hm("10:00")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    day: Weekday,
    begin: MinuteOfDay,
    end: MinuteOfDay,
}

impl TimeSlot {
    /// Create a slot. `begin` must be strictly before `end`.
    pub fn new(day: Weekday, begin: MinuteOfDay, end: MinuteOfDay) -> Result<Self, DomainError> {
        if begin >= end {
            return Err(DomainError::InvalidTimeSlot { begin, end });
        }
        Ok(Self { day, begin, end })
    }

    /// Returns the weekday this slot recurs on.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Returns the first minute covered by the slot.
    pub fn begin(&self) -> MinuteOfDay {
        self.begin
    }

    /// Returns the exclusive end of the slot.
    pub fn end(&self) -> MinuteOfDay {
        self.end
    }

    /// Length of the slot in minutes.
    pub fn duration_mins(&self) -> u16 {
        self.end.get() - self.begin.get()
    }

    /// Whether both slots fall on the same weekday with intersecting ranges.
    pub fn overlaps_with(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.begin < other.end && other.begin < self.end
    }

    /// Whether `timestamp` falls within this slot in any week.
    pub fn contains_instant(&self, timestamp: NaiveDateTime) -> bool {
        if timestamp.weekday() != self.day {
            return false;
        }
        let position = MinuteOfDay::of(timestamp.time());
        self.begin <= position && position < self.end
    }

    /// Whether the slot begins at exactly `(day, begin)`.
    pub fn starts_at(&self, day: Weekday, begin: MinuteOfDay) -> bool {
        self.day == day && self.begin == begin
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.begin, self.end)
    }
}

/// Parse a weekday name such as "Mon" or "monday".
pub fn parse_weekday(s: &str) -> Result<Weekday, DomainError> {
    s.parse::<Weekday>()
        .map_err(|_| DomainError::InvalidWeekday(s.to_string()))
}


#[cfg(test)]
pub(crate) mod proptests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn weekday() -> impl Strategy<Value = Weekday> {
        prop::sample::select(vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ])
    }

    /// Strategy for valid slots: begin strictly before end, within one day.
    pub(crate) fn time_slot() -> impl Strategy<Value = TimeSlot> {
        (weekday(), 0u16..1440)
            .prop_flat_map(|(day, begin)| (Just(day), Just(begin), (begin + 1)..=1440))
            .prop_map(|(day, begin, end)| {
                TimeSlot::new(
                    day,
                    MinuteOfDay::new(begin).unwrap(),
                    MinuteOfDay::new(end).unwrap(),
                )
                .unwrap()
            })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in time_slot(), b in time_slot()) {
            prop_assert_eq!(a.overlaps_with(&b), b.overlaps_with(&a));
        }

        #[test]
        fn overlap_is_reflexive(a in time_slot()) {
            prop_assert!(a.overlaps_with(&a));
        }

        /// Two slots overlap iff some minute is covered by both.
        #[test]
        fn overlap_matches_shared_minute(a in time_slot(), b in time_slot()) {
            let shared = a.day() == b.day()
                && (a.begin().get()..a.end().get())
                    .any(|m| b.begin().get() <= m && m < b.end().get());
            prop_assert_eq!(a.overlaps_with(&b), shared);
        }

        #[test]
        fn back_to_back_slots_are_disjoint(
            day in weekday(),
            begin in 0u16..1320,
            len1 in 1u16..60,
            len2 in 1u16..60,
        ) {
            let at = |m: u16| MinuteOfDay::new(m).unwrap();
            let mid = begin + len1;
            let first = TimeSlot::new(day, at(begin), at(mid)).unwrap();
            let second = TimeSlot::new(day, at(mid), at(mid + len2)).unwrap();
            prop_assert!(!first.overlaps_with(&second));
            prop_assert!(!second.overlaps_with(&first));
        }
    }
}
