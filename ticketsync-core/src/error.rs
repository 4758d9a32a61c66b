//! Error types for the ticketsync pipeline.

use thiserror::Error;

/// Errors that can occur while talking to Eventbrite or Airtable.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("No organizations found for this account/token")]
    MissingOrganization,

    /// The remote API answered with a non-success status.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Unparseable timestamp: {0}")]
    Timestamp(String),
}

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
