//! Positions within a day.
//!
//! Every time slot is described by a pair of positions measured in minutes
//! since midnight. Midnight at the *end* of the day (1440) is representable
//! so that a slot may run until the end of the day as an exclusive bound.

use chrono::{NaiveTime, Timelike};
use std::fmt;

use super::error::DomainError;

/// Number of minutes in a day, and the largest valid [`MinuteOfDay`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A position within a day, in minutes since midnight.
///
/// Valid values are `0..=1440`. The value 1440 only makes sense as the
/// exclusive end of a slot.
///
/// # Examples
///
/// ```
/// use timetable::domain::MinuteOfDay;
///
/// let m = MinuteOfDay::parse_hhmm("09:30").unwrap();
/// assert_eq!(m.get(), 570);
/// assert_eq!(m.to_string(), "09:30");
///
/// assert!(MinuteOfDay::parse_hhmm("24:00").is_ok());
/// assert!(MinuteOfDay::parse_hhmm("24:01").is_err());
/// assert!(MinuteOfDay::parse_hhmm("930").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Midnight at the end of the day.
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Create a position from a raw minute count.
    pub fn new(minutes: u16) -> Result<Self, DomainError> {
        if minutes > MINUTES_PER_DAY {
            return Err(DomainError::InvalidMinute(minutes.into()));
        }
        Ok(Self(minutes))
    }

    /// Create a position, clamping anything past the end of the day.
    pub const fn saturating(minutes: u16) -> Self {
        if minutes > MINUTES_PER_DAY {
            Self(MINUTES_PER_DAY)
        } else {
            Self(minutes)
        }
    }

    /// Create a position from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if minute > 59 {
            return Err(DomainError::InvalidMinute(
                hour.saturating_mul(60).saturating_add(minute),
            ));
        }
        let total = hour
            .checked_mul(60)
            .and_then(|h| h.checked_add(minute))
            .ok_or(DomainError::InvalidMinute(u32::MAX))?;
        let total = u16::try_from(total).map_err(|_| DomainError::InvalidMinute(total))?;
        Self::new(total)
    }

    /// Parse a position from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidClock(s.to_string());

        // Must be exactly 5 characters: HH:MM
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or_else(invalid)?;
        let minute = parse_two_digits(&bytes[3..5]).ok_or_else(invalid)?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }

    /// The position of a wall-clock time. Seconds are truncated.
    pub fn of(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60, so this never exceeds 1439
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Returns the raw minute count.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the hour (0-24).
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute within the hour (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add a number of minutes, returning `None` past the end of the day.
    pub fn checked_add(self, minutes: u16) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        Self::new(total).ok()
    }
}

impl fmt::Debug for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinuteOfDay({self})")
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a @ b'0'..=b'9', b @ b'0'..=b'9'] => Some(u32::from(a - b'0') * 10 + u32::from(b - b'0')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(MinuteOfDay::parse_hhmm("00:00").unwrap().get(), 0);
        assert_eq!(MinuteOfDay::parse_hhmm("09:05").unwrap().get(), 545);
        assert_eq!(MinuteOfDay::parse_hhmm("23:59").unwrap().get(), 1439);
        assert_eq!(MinuteOfDay::parse_hhmm("24:00").unwrap(), MinuteOfDay::END_OF_DAY);
    }

    #[test]
    fn parse_invalid_format() {
        assert!(MinuteOfDay::parse_hhmm("").is_err());
        assert!(MinuteOfDay::parse_hhmm("9:00").is_err());
        assert!(MinuteOfDay::parse_hhmm("09-00").is_err());
        assert!(MinuteOfDay::parse_hhmm("0900").is_err());
        assert!(MinuteOfDay::parse_hhmm("ab:cd").is_err());
        assert!(MinuteOfDay::parse_hhmm("+9:00").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(MinuteOfDay::parse_hhmm("25:00").is_err());
        assert!(MinuteOfDay::parse_hhmm("24:01").is_err());
        assert!(MinuteOfDay::parse_hhmm("12:60").is_err());
    }

    #[test]
    fn new_rejects_past_end_of_day() {
        assert!(MinuteOfDay::new(1440).is_ok());
        assert_eq!(
            MinuteOfDay::new(1441).unwrap_err(),
            DomainError::InvalidMinute(1441)
        );
    }

    #[test]
    fn from_naive_time_truncates_seconds() {
        let t = NaiveTime::from_hms_opt(10, 15, 59).unwrap();
        assert_eq!(MinuteOfDay::of(t).to_string(), "10:15");
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(MinuteOfDay::saturating(600).get(), 600);
        assert_eq!(MinuteOfDay::saturating(5000), MinuteOfDay::END_OF_DAY);
    }

    #[test]
    fn checked_add() {
        let m = MinuteOfDay::parse_hhmm("23:00").unwrap();
        assert_eq!(m.checked_add(60), Some(MinuteOfDay::END_OF_DAY));
        assert_eq!(m.checked_add(61), None);
    }

    #[test]
    fn display_and_debug() {
        let m = MinuteOfDay::from_hm(7, 5).unwrap();
        assert_eq!(format!("{m}"), "07:05");
        assert_eq!(format!("{m:?}"), "MinuteOfDay(07:05)");
    }

    #[test]
    fn ordering() {
        let a = MinuteOfDay::parse_hhmm("08:00").unwrap();
        let b = MinuteOfDay::parse_hhmm("08:01").unwrap();
        assert!(a < b);
    }
}
