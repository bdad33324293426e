//! Collection wrapper types for displaying groups of entries.

use std::fmt;

use crate::models::Entry;

/// Newtype wrapper for displaying a collection of entries as a listing.
///
/// Formats one summary line per entry and handles the empty collection
/// gracefully. Consumers handle headings separately.
pub struct Entries(pub Vec<Entry>);

impl Entries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No entries found.")
        } else {
            for entry in &self.0 {
                writeln!(
                    f,
                    "- [{}] {} | {} | {} | {}",
                    entry.id, entry.timeslot, entry.subject, entry.teacher, entry.room
                )?;
            }
            Ok(())
        }
    }
}
