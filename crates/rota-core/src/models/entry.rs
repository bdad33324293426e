//! Entry model definition and id generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeSlot;

/// One scheduled class occupying a day and time range.
///
/// Identity is the `id`; every other field may be replaced through the
/// manager's update operation. The serde derives define the mapping form
/// used by the snapshot file, with the timeslot nested as a sub-mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Opaque unique identifier, generated at creation and never reused
    pub id: String,

    /// Name of the class or course
    pub subject: String,

    /// Teacher giving the class
    pub teacher: String,

    /// Room the class takes place in
    pub room: String,

    /// Day and time range the class occupies (exclusively owned)
    pub timeslot: TimeSlot,

    /// Free-form notes, may be empty
    #[serde(default)]
    pub notes: String,
}

/// Generates a fresh entry id: eight lowercase hex characters drawn from a
/// v4 UUID. Uniqueness within a collection is the manager's responsibility.
pub(crate) fn generate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..8].to_string()
}
