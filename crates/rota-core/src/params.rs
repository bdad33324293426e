//! Parameter structures for rota operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces without framework-specific derives or dependencies.
//! Interface layers (the CLI today) define their own wrapper structs with
//! framework derives and convert into these core types via `From` impls:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Manager
//! ```
//!
//! Field-level validation (weekday names, `HH:MM` tokens, time ordering)
//! lives here next to the raw fields; collection-level rules (id
//! uniqueness, double-booking) stay in the manager.

use serde::{Deserialize, Serialize};

use crate::{
    models::{ClockTime, TimeSlot, Weekday},
    Result,
};

/// Generic parameters for operations requiring just an entry ID.
///
/// Used for find_by_id, show and delete operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the entry to operate on
    pub id: String,
}

/// Parameters for listing entries.
///
/// Controls the optional weekday filter applied to the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEntries {
    /// Restrict the listing to a single weekday (any capitalization)
    #[serde(default)]
    pub day: Option<String>,
}

impl ListEntries {
    /// Parse the optional day filter into a typed weekday.
    ///
    /// # Errors
    ///
    /// * `TimetableError::InvalidDay` - When the filter is present but not a
    ///   weekday name
    pub fn day_filter(&self) -> Result<Option<Weekday>> {
        self.day
            .as_deref()
            .map(|day| day.parse::<Weekday>())
            .transpose()
    }
}

/// Parameters for creating a new timetable entry.
///
/// All fields arrive as raw text; [`AddEntry::validate`] turns the
/// day/time tokens into a typed [`TimeSlot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEntry {
    /// Name of the class or course (required)
    pub subject: String,
    /// Teacher giving the class (required)
    pub teacher: String,
    /// Room the class takes place in (required)
    pub room: String,
    /// Weekday name, any capitalization (required)
    pub day: String,
    /// Start of the interval as HH:MM 24-hour (required)
    pub start_time: String,
    /// End of the interval as HH:MM 24-hour (required)
    pub end_time: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl AddEntry {
    /// Validate the day and time fields and build the entry's time slot.
    ///
    /// # Errors
    ///
    /// * `TimetableError::InvalidDay` - When the day is not a weekday name
    /// * `TimetableError::InvalidTimeFormat` - When a time token is not
    ///   strict HH:MM
    /// * `TimetableError::InvalidTimeOrder` - When the start is not strictly
    ///   before the end
    pub fn validate(&self) -> Result<TimeSlot> {
        let day: Weekday = self.day.parse()?;
        let start: ClockTime = self.start_time.parse()?;
        let end: ClockTime = self.end_time.parse()?;
        TimeSlot::new(day, start, end)
    }
}

/// Parameters for updating an existing entry.
///
/// Allows partial updates: `None` keeps the current value of a field. The
/// notes field is the one place where an explicit empty string is
/// meaningful: `Some(String::new())` clears the notes, while omitting the
/// field leaves them untouched. The subject likewise only changes when an
/// explicit value is provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// Entry ID to update (required)
    pub id: String,
    /// Updated subject
    pub subject: Option<String>,
    /// Updated teacher
    pub teacher: Option<String>,
    /// Updated room
    pub room: Option<String>,
    /// Updated weekday name, any capitalization
    pub day: Option<String>,
    /// Updated start time as HH:MM 24-hour
    pub start_time: Option<String>,
    /// Updated end time as HH:MM 24-hour
    pub end_time: Option<String>,
    /// Updated notes; an empty string clears them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateEntry {
    /// Whether the update changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.teacher.is_none()
            && self.room.is_none()
            && self.day.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.notes.is_none()
    }
}
