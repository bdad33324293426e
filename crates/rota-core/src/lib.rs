//! Core library for the rota class timetable application.
//!
//! This crate provides the core business logic for managing scheduled
//! class entries: the data models, field validation, the double-booking
//! conflict rules, and JSON snapshot persistence.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting
//! output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual formatting
//!   for collections and operation results
//!
//! This separation allows the same data to be formatted differently
//! depending on context (listings vs. detail views, creation results vs.
//! updates) while keeping output consistent.
//!
//! # Quick Start
//!
//! ```rust
//! use rota_core::{params::AddEntry, TimetableBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a manager instance
//! let mut manager = TimetableBuilder::new()
//!     .with_data_path(Some("timetable.json"))
//!     .build()?;
//!
//! // Add an entry using manager methods
//! let params = AddEntry {
//!     subject: "Mathematics".to_string(),
//!     teacher: "Ms. Hill".to_string(),
//!     room: "101".to_string(),
//!     day: "monday".to_string(),
//!     start_time: "09:00".to_string(),
//!     end_time: "10:00".to_string(),
//!     notes: String::new(),
//! };
//!
//! let entry = manager.add_entry(&params)?;
//! println!("Added entry: {}", entry);
//!
//! // List the collection
//! use rota_core::params::ListEntries;
//! let entries = manager.list_entries(&ListEntries::default())?;
//! for entry in &entries {
//!     println!("{}: {}", entry.id, entry.subject);
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod manager;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, Entries, UpdateResult};
pub use error::{Result, TimetableError};
pub use manager::{TimetableBuilder, TimetableManager};
pub use models::{ClockTime, Entry, TimeSlot, Weekday};
pub use params::{AddEntry, Id, ListEntries, UpdateEntry};
pub use store::JsonStore;
