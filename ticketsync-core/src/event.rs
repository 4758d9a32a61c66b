//! Event, venue and organization records as returned by the Eventbrite API.
//!
//! Only the fields the sync reads are modeled; everything else in the API
//! payloads is ignored during deserialization.

use serde::Deserialize;

/// A single event from `GET /v3/organizations/{id}/events/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: EventName,
    #[serde(default)]
    pub start: EventStart,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub venue_id: Option<String>,
}

impl Event {
    /// Display name, used as the dedup key in Airtable.
    pub fn name_text(&self) -> &str {
        &self.name.text
    }

    /// Venue reference, if the event has one. Eventbrite sometimes sends
    /// an empty string instead of null; both count as "no venue".
    pub fn venue_ref(&self) -> Option<&str> {
        self.venue_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Localized event title.
#[derive(Debug, Clone, Deserialize)]
pub struct EventName {
    #[serde(default)]
    pub text: String,
}

/// Start time of an event. `local` is an ISO-like wall-clock timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventStart {
    #[serde(default)]
    pub local: String,
}

/// An organization owned by the current credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A venue from `GET /v3/venues/{id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: VenueAddress,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Venue address; only the preformatted display string is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueAddress {
    #[serde(default)]
    pub localized_address_display: String,
}
