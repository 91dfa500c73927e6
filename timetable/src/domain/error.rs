//! Domain error types.
//!
//! These errors represent validation failures when building courses and
//! time slots. They are distinct from catalog and storage errors.

use super::{CourseId, MinuteOfDay};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Minute count is past the end of the day
    #[error("invalid minute of day: {0} (must be at most 1440)")]
    InvalidMinute(u32),

    /// Clock string is not a valid "HH:MM" time
    #[error("invalid clock time: {0:?} (expected HH:MM)")]
    InvalidClock(String),

    /// Slot does not begin strictly before it ends
    #[error("invalid time slot: begin {begin} is not before end {end}")]
    InvalidTimeSlot { begin: MinuteOfDay, end: MinuteOfDay },

    /// Course has no meeting times
    #[error("course {0} has no time slots")]
    EmptyCourse(CourseId),

    /// Period number is outside the bell schedule
    #[error("invalid period: {period} is outside 1..={periods_per_day}")]
    PeriodOutOfRange { period: u8, periods_per_day: u8 },

    /// Period would end after midnight
    #[error("invalid period: {0} runs past midnight")]
    PeriodPastMidnight(u8),

    /// Multi-period range ends before it starts
    #[error("invalid period range: last period {last} is before first period {first}")]
    PeriodsReversed { first: u8, last: u8 },

    /// Weekday name could not be recognised
    #[error("invalid weekday: {0:?}")]
    InvalidWeekday(String),
}
