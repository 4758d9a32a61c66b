//! Library surface of the ticketsync binary.
//!
//! The binary itself is a thin wrapper around [`sync::run`]; exposing the
//! modules as a library keeps the full pipeline reachable from the
//! integration tests in `tests/`.

pub mod airtable;
pub mod config;
pub mod eventbrite;
pub mod sync;
