//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so the data structures stay
//! free of presentation concerns. The entry display is the detail view
//! used by `show` and after mutations; the one-line summary used in
//! listings lives in [`crate::display::collections`].

use std::fmt;

use crate::models::{Entry, TimeSlot, Weekday};

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.subject, self.id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Teacher: {}", self.teacher)?;
        writeln!(f, "- Room: {}", self.room)?;
        writeln!(f, "- Time: {}", self.timeslot)?;

        // Notes as a paragraph
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        Ok(())
    }
}
