//! Time slot model definition and overlap detection.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Weekday};
use crate::error::{Result, TimetableError};

/// A weekday plus a start/end time pair defining a half-open interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Day of the week the slot falls on
    pub day: Weekday,

    /// Inclusive start of the interval
    #[serde(rename = "start_time")]
    pub start: ClockTime,

    /// Exclusive end of the interval
    #[serde(rename = "end_time")]
    pub end: ClockTime,
}

impl TimeSlot {
    /// Creates a time slot, enforcing that the start is strictly before the
    /// end. Overnight wraparound slots are not representable.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(TimetableError::InvalidTimeOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { day, start, end })
    }

    /// Half-open interval overlap test.
    ///
    /// Two slots overlap iff they fall on the same day and their intervals
    /// `[start, end)` intersect. Slots that merely touch at an endpoint
    /// (one ends exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}
