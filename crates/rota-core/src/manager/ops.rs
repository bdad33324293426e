//! CRUD operations and conflict checks for the TimetableManager.

use log::debug;

use super::TimetableManager;
use crate::{
    error::{Result, TimetableError},
    models::{entry::generate_id, Entry, TimeSlot},
    params::{AddEntry, Id, ListEntries, UpdateEntry},
};

/// Treats a partial-update field as provided only when it carries a
/// non-empty trimmed value; blank input falls back to the current value.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl TimetableManager {
    /// Returns a snapshot copy of the current collection, optionally
    /// restricted to a single weekday. Callers cannot mutate the manager's
    /// state through the returned entries.
    ///
    /// # Errors
    ///
    /// * `TimetableError::InvalidDay` - When the day filter is not a
    ///   weekday name
    pub fn list_entries(&self, params: &ListEntries) -> Result<Vec<Entry>> {
        let filter = params.day_filter()?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| filter.map_or(true, |day| entry.timeslot.day == day))
            .cloned()
            .collect())
    }

    /// Looks up a single entry by id. This is a lookup, not a validated
    /// command: a missing id is `None`, not an error.
    pub fn find_by_id(&self, params: &Id) -> Option<Entry> {
        self.entries
            .iter()
            .find(|entry| entry.id == params.id)
            .cloned()
    }

    /// Creates a new entry from the given parameters.
    ///
    /// The day is normalized to its canonical capitalization, the times
    /// are parsed as strict HH:MM, and the tentative slot is checked
    /// against every existing entry on the same day. On success the entry
    /// is appended with a fresh id, all text fields trimmed, and the full
    /// collection is persisted.
    ///
    /// # Errors
    ///
    /// * `TimetableError::InvalidDay` / `InvalidTimeFormat` /
    ///   `InvalidTimeOrder` - Field validation failures
    /// * `TimetableError::TimeConflict` - When an overlapping entry shares
    ///   the teacher or the room (case-insensitive)
    pub fn add_entry(&mut self, params: &AddEntry) -> Result<Entry> {
        let timeslot = params.validate()?;
        let teacher = params.teacher.trim();
        let room = params.room.trim();
        self.check_conflicts(&timeslot, teacher, room, None)?;

        let entry = Entry {
            id: self.fresh_id(),
            subject: params.subject.trim().to_string(),
            teacher: teacher.to_string(),
            room: room.to_string(),
            timeslot,
            notes: params.notes.trim().to_string(),
        };
        debug!(
            "adding entry {} ({} {}-{})",
            entry.id, entry.timeslot.day.as_str(), entry.timeslot.start, entry.timeslot.end
        );

        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Applies a partial update to an existing entry.
    ///
    /// Omitted (or blank) day/time/teacher/room fields keep their current
    /// values; the subject changes only on an explicit non-empty value,
    /// and notes are replaced whenever the field is present (an empty
    /// string clears them). The tentative slot is re-validated exactly
    /// like an add and re-checked for conflicts against all *other*
    /// entries, so an update that keeps its own day and times never
    /// trips over itself.
    ///
    /// # Errors
    ///
    /// * `TimetableError::EntryNotFound` - When the id does not exist
    /// * `TimetableError::InvalidDay` / `InvalidTimeFormat` /
    ///   `InvalidTimeOrder` - Field validation failures
    /// * `TimetableError::TimeConflict` - When the tentative slot clashes
    ///   with another entry
    pub fn update_entry(&mut self, params: &UpdateEntry) -> Result<Entry> {
        let index = self.index_of(&params.id)?;
        let current = &self.entries[index];

        // Tentative values: provided-or-current.
        let day = match provided(&params.day) {
            Some(day) => day.parse()?,
            None => current.timeslot.day,
        };
        let start = match provided(&params.start_time) {
            Some(start) => start.parse()?,
            None => current.timeslot.start,
        };
        let end = match provided(&params.end_time) {
            Some(end) => end.parse()?,
            None => current.timeslot.end,
        };
        let timeslot = TimeSlot::new(day, start, end)?;

        let teacher = provided(&params.teacher)
            .unwrap_or(&current.teacher)
            .to_string();
        let room = provided(&params.room).unwrap_or(&current.room).to_string();

        self.check_conflicts(&timeslot, &teacher, &room, Some(&params.id))?;

        let entry = &mut self.entries[index];
        if let Some(subject) = provided(&params.subject) {
            entry.subject = subject.to_string();
        }
        entry.teacher = teacher;
        entry.room = room;
        entry.timeslot = timeslot;
        if let Some(notes) = &params.notes {
            entry.notes = notes.trim().to_string();
        }
        let updated = entry.clone();
        debug!("updated entry {}", updated.id);

        self.persist()?;
        Ok(updated)
    }

    /// Removes the entry with the given id and persists the collection.
    ///
    /// Returns the removed entry so callers can echo what was deleted.
    ///
    /// # Errors
    ///
    /// * `TimetableError::EntryNotFound` - When the id does not exist; the
    ///   collection is left unchanged
    pub fn delete_entry(&mut self, params: &Id) -> Result<Entry> {
        let index = self.index_of(&params.id)?;
        let removed = self.entries.remove(index);
        debug!("deleted entry {}", removed.id);

        self.persist()?;
        Ok(removed)
    }

    /// Position of an entry in the collection by id.
    fn index_of(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| TimetableError::EntryNotFound { id: id.to_string() })
    }

    /// Scans the collection for a double-booking of the teacher or the
    /// room within the tentative slot. `exclude_id` skips the entry being
    /// updated so it cannot conflict with itself.
    fn check_conflicts(
        &self,
        timeslot: &TimeSlot,
        teacher: &str,
        room: &str,
        exclude_id: Option<&str>,
    ) -> Result<()> {
        let teacher_key = teacher.to_lowercase();
        let room_key = room.to_lowercase();

        for existing in &self.entries {
            if exclude_id.is_some_and(|id| existing.id == id) {
                continue;
            }
            if !existing.timeslot.overlaps(timeslot) {
                continue;
            }
            if existing.teacher.to_lowercase() == teacher_key {
                return Err(TimetableError::teacher_conflict(
                    timeslot.day.as_str(),
                    &existing.teacher,
                ));
            }
            if existing.room.to_lowercase() == room_key {
                return Err(TimetableError::room_conflict(
                    timeslot.day.as_str(),
                    &existing.room,
                ));
            }
        }
        Ok(())
    }

    /// Generates an id not currently present in the collection. Ids of
    /// deleted entries are never handed out again within a process because
    /// every id is freshly random.
    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.entries.iter().any(|entry| entry.id == id) {
                return id;
            }
        }
    }
}
