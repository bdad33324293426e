//! High-level manager API for the timetable entry collection.
//!
//! This module provides the main [`TimetableManager`] interface for
//! interacting with the rota timetable system. The manager owns the
//! authoritative in-memory entry collection, validates every proposed
//! mutation against the business rules, and keeps the persisted snapshot
//! synchronized with memory:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │    Manager      │    │    JsonStore    │
//! │     (CLI)       │───▶│ (validation +   │───▶│  (snapshot      │
//! │                 │    │  CRUD)          │    │   load/save)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`TimetableManager`] instances
//! - [`ops`]: The CRUD operations and conflict checks
//!
//! All operations are synchronous and run to completion on the caller's
//! thread; validation happens strictly before any state change, so a
//! failed mutation leaves both memory and disk untouched.

// Module declarations
pub mod builder;
pub mod ops;


// Re-export the main types
pub use builder::TimetableBuilder;

use crate::{error::Result, models::Entry, store::JsonStore};

/// Main manager interface owning the entry collection and its store.
pub struct TimetableManager {
    store: JsonStore,
    entries: Vec<Entry>,
}

impl TimetableManager {
    /// Creates a manager around the given store, loading the persisted
    /// snapshot into memory.
    pub(crate) fn new(store: JsonStore) -> Result<Self> {
        let entries = store.load_entries()?;
        Ok(Self { store, entries })
    }

    /// Writes the full in-memory collection back to the store.
    fn persist(&self) -> Result<()> {
        self.store.save_entries(&self.entries)
    }
}
