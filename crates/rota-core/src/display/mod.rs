//! Display formatting for domain models and operation results.
//!
//! This module combines direct Display implementations on the domain
//! models with newtype wrappers for collections and operation outcomes,
//! so the same data can be formatted consistently whether it is echoed
//! after a mutation or rendered as a listing:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Entry, Slot)   │───▶│ (Entries,       │───▶│    Output       │
//! │                 │    │  *Result)       │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types ([`Entries`])
//! - [`results`]: Operation result types ([`CreateResult`],
//!   [`UpdateResult`], [`DeleteResult`])
//!
//! All formatters produce markdown for rich terminal display.

pub mod collections;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::Entries;
pub use results::{CreateResult, DeleteResult, UpdateResult};
