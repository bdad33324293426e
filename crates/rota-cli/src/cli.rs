//! Command-line argument definitions using clap
//!
//! This module defines the per-command argument structures using clap's
//! derive API, implementing the parameter wrapper pattern for clean
//! separation between CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Manager
//! ```
//!
//! Each argument struct carries the clap-specific attributes (flags, help
//! text, aliases) and converts into the matching core parameter type via a
//! `From` impl, so the core stays free of CLI framework derives and the
//! conversion is verified at compile time.

use clap::Args;
use rota_core::params::{AddEntry, Id, ListEntries, UpdateEntry};

/// Add a new timetable entry
///
/// The day accepts any capitalization ("monday" becomes "Monday") and the
/// times must be zero-padded HH:MM in 24-hour format. The entry is
/// rejected if the teacher or the room is already booked in an overlapping
/// slot on the same day.
#[derive(Args)]
pub struct AddEntryArgs {
    /// Name of the class or course
    pub subject: String,
    /// Teacher giving the class
    pub teacher: String,
    /// Room the class takes place in
    pub room: String,
    /// Day of the week (e.g. Monday)
    pub day: String,
    /// Start time (HH:MM 24-hour)
    pub start: String,
    /// End time (HH:MM 24-hour)
    pub end: String,
    /// Optional free-form notes for the entry
    #[arg(short, long, help = "Optional free-form notes for the entry")]
    pub notes: Option<String>,
}

impl From<AddEntryArgs> for AddEntry {
    fn from(val: AddEntryArgs) -> Self {
        AddEntry {
            subject: val.subject,
            teacher: val.teacher,
            room: val.room,
            day: val.day,
            start_time: val.start,
            end_time: val.end,
            notes: val.notes.unwrap_or_default(),
        }
    }
}

/// List timetable entries
///
/// Shows one summary line per entry in insertion order. Use --day to
/// restrict the listing to a single weekday.
#[derive(Args, Default)]
pub struct ListEntriesArgs {
    /// Only show entries on this weekday
    #[arg(long, help = "Only show entries on this weekday (any capitalization)")]
    pub day: Option<String>,
}

impl From<ListEntriesArgs> for ListEntries {
    fn from(val: ListEntriesArgs) -> Self {
        ListEntries { day: val.day }
    }
}

/// Show details of a specific entry
///
/// Displays the full entry: subject, teacher, room, day, time range and
/// notes. Entry IDs are printed by `add` and `list`.
#[derive(Args)]
pub struct ShowEntryArgs {
    /// ID of the entry to display
    #[arg(help = "Unique identifier of the entry to show details for")]
    pub id: String,
}

impl From<ShowEntryArgs> for Id {
    fn from(val: ShowEntryArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update an entry's fields
///
/// Only the fields passed on the command line are changed; everything
/// else keeps its current value. Passing an empty string to --notes
/// clears the notes. Day and time changes are re-validated against the
/// rest of the timetable exactly like a new entry.
#[derive(Args)]
pub struct UpdateEntryArgs {
    /// ID of the entry to update
    #[arg(help = "Unique identifier of the entry to update")]
    pub id: String,
    /// Updated subject
    #[arg(long, help = "Updated subject name")]
    pub subject: Option<String>,
    /// Updated teacher
    #[arg(long, help = "Updated teacher name")]
    pub teacher: Option<String>,
    /// Updated room
    #[arg(long, help = "Updated room")]
    pub room: Option<String>,
    /// Updated day of the week
    #[arg(long, help = "Updated day of the week (any capitalization)")]
    pub day: Option<String>,
    /// Updated start time (HH:MM 24-hour)
    #[arg(long, help = "Updated start time (HH:MM 24-hour)")]
    pub start: Option<String>,
    /// Updated end time (HH:MM 24-hour)
    #[arg(long, help = "Updated end time (HH:MM 24-hour)")]
    pub end: Option<String>,
    /// Updated notes; pass an empty string to clear them
    #[arg(long, help = "Updated notes; pass an empty string to clear them")]
    pub notes: Option<String>,
}

impl From<UpdateEntryArgs> for UpdateEntry {
    fn from(val: UpdateEntryArgs) -> Self {
        UpdateEntry {
            id: val.id,
            subject: val.subject,
            teacher: val.teacher,
            room: val.room,
            day: val.day,
            start_time: val.start,
            end_time: val.end,
            notes: val.notes,
        }
    }
}

/// Delete an entry permanently
#[derive(Args)]
pub struct DeleteEntryArgs {
    /// ID of the entry to delete
    #[arg(help = "Unique identifier of the entry to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteEntryArgs> for Id {
    fn from(val: DeleteEntryArgs) -> Self {
        Id { id: val.id }
    }
}
