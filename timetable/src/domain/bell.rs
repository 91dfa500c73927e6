//! Bell schedule: mapping class periods onto clock minutes.
//!
//! Institutions usually describe meetings as "periods 2-3 on Tuesday"
//! rather than clock times. A [`BellSchedule`] turns period numbers into
//! [`TimeSlot`]s so the rest of the crate only ever deals in minutes.

use chrono::{NaiveTime, Weekday};

use super::error::DomainError;
use super::minute::MinuteOfDay;
use super::time_slot::TimeSlot;

/// Configuration of the daily period grid.
///
/// Periods are numbered from 1. Period `n` begins
/// `(n - 1) * (period_mins + break_mins)` minutes after the first period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellSchedule {
    /// Start of period 1.
    pub first_period_start: MinuteOfDay,

    /// Length of one period (minutes).
    pub period_mins: u16,

    /// Gap between consecutive periods (minutes).
    pub break_mins: u16,

    /// Number of periods in a day.
    pub periods_per_day: u8,
}

impl BellSchedule {
    /// Create a new bell schedule with the given parameters.
    pub fn new(
        first_period_start: MinuteOfDay,
        period_mins: u16,
        break_mins: u16,
        periods_per_day: u8,
    ) -> Self {
        Self {
            first_period_start,
            period_mins,
            break_mins,
            periods_per_day,
        }
    }

    /// Returns `[begin, end)` of period `n`.
    pub fn period_window(&self, n: u8) -> Result<(MinuteOfDay, MinuteOfDay), DomainError> {
        if n == 0 || n > self.periods_per_day {
            return Err(DomainError::PeriodOutOfRange {
                period: n,
                periods_per_day: self.periods_per_day,
            });
        }

        let stride = u32::from(self.period_mins) + u32::from(self.break_mins);
        let offset = u32::from(n - 1) * stride;
        let past_midnight = || DomainError::PeriodPastMidnight(n);

        let offset = u16::try_from(offset).map_err(|_| past_midnight())?;
        let begin = self
            .first_period_start
            .checked_add(offset)
            .ok_or_else(past_midnight)?;
        let end = begin
            .checked_add(self.period_mins)
            .ok_or_else(past_midnight)?;
        Ok((begin, end))
    }

    /// Build a slot covering periods `first..=last` on `day`.
    pub fn slot(&self, day: Weekday, first: u8, last: u8) -> Result<TimeSlot, DomainError> {
        if last < first {
            return Err(DomainError::PeriodsReversed { first, last });
        }
        let (begin, _) = self.period_window(first)?;
        let (_, end) = self.period_window(last)?;
        TimeSlot::new(day, begin, end)
    }

    /// The period in session at `time`, if any. Breaks belong to no period.
    pub fn period_at(&self, time: NaiveTime) -> Option<u8> {
        let position = MinuteOfDay::of(time);
        (1..=self.periods_per_day).find(|&n| {
            self.period_window(n)
                .is_ok_and(|(begin, end)| begin <= position && position < end)
        })
    }
}

impl Default for BellSchedule {
    fn default() -> Self {
        Self {
            first_period_start: MinuteOfDay::saturating(9 * 60),
            period_mins: 90,
            break_mins: 10,
            periods_per_day: 6,
        }
    }
}
