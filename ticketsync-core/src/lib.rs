//! Core types for the ticketsync pipeline.
//!
//! This crate provides the types shared by the sync binary:
//! - `Event`, `Venue` and `Attendee` as returned by the Eventbrite API
//! - `Order` grouping and per-order aggregates for ticket sales
//! - `dates` for parsing the timestamps Eventbrite emits
//! - `SyncError` for everything that can go wrong talking to either API

pub mod attendee;
pub mod dates;
pub mod error;
pub mod event;
pub mod order;

// Re-export the main types at crate root for convenience
pub use attendee::*;
pub use error::{SyncError, SyncResult};
pub use event::*;
pub use order::*;
