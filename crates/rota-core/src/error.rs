//! Error types for the timetable library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all timetable operations.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// Day token is not one of the seven weekday names
    #[error("Invalid day '{value}'. Expected one of: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday")]
    InvalidDay { value: String },
    /// Time token does not parse as HH:MM
    #[error("Invalid time '{value}'. Expected HH:MM in 24-hour format")]
    InvalidTimeFormat { value: String },
    /// Start time is not strictly before end time
    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeOrder { start: String, end: String },
    /// Overlapping interval with the same teacher or room on the same day
    #[error("Time conflict on {day}: {resource} is already booked in this time range")]
    TimeConflict { day: String, resource: String },
    /// Entry not found for the given ID
    #[error("Entry with ID {id} not found")]
    EntryNotFound { id: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl TimetableError {
    /// Creates a time conflict error naming the clashing teacher.
    pub fn teacher_conflict(day: impl Into<String>, teacher: &str) -> Self {
        Self::TimeConflict {
            day: day.into(),
            resource: format!("teacher '{teacher}'"),
        }
    }

    /// Creates a time conflict error naming the clashing room.
    pub fn room_conflict(day: impl Into<String>, room: &str) -> Self {
        Self::TimeConflict {
            day: day.into(),
            resource: format!("room '{room}'"),
        }
    }
}

/// Extension trait for mapping `std::io` Results into filesystem errors
/// carrying the offending path.
pub trait FileResultExt<T> {
    /// Attach the path that the I/O operation touched.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| TimetableError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, TimetableError>;
