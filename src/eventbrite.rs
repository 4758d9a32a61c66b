//! Read-only client for the Eventbrite REST API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ticketsync_core::{Attendee, Event, Organization, SyncError, SyncResult, Venue};

use crate::config::Config;

pub struct EventbriteClient {
    client: Client,
    token: String,
    api_base: String,
}

// Listing envelopes; the API wraps each collection in a named field next
// to pagination metadata we don't read.

#[derive(Debug, Deserialize)]
struct OrganizationList {
    #[serde(default)]
    organizations: Vec<Organization>,
}

#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct AttendeeList {
    #[serde(default)]
    attendees: Vec<Attendee>,
}

impl EventbriteClient {
    pub fn new(config: &Config) -> Self {
        EventbriteClient {
            client: Client::new(),
            token: config.eventbrite_token.clone(),
            api_base: config.eventbrite_api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = format!("{}{}", self.api_base, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SyncError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))
    }

    pub async fn organizations(&self) -> SyncResult<Vec<Organization>> {
        let list: OrganizationList = self.get("/users/me/organizations/").await?;
        Ok(list.organizations)
    }

    /// Resolve the organization to sync: logs every organization on the
    /// account and picks the first one.
    pub async fn first_organization_id(&self) -> SyncResult<String> {
        let organizations = self.organizations().await?;

        for org in &organizations {
            println!("Organization: {} - ID: {}", org.name, org.id);
        }

        organizations
            .into_iter()
            .next()
            .map(|org| org.id)
            .ok_or(SyncError::MissingOrganization)
    }

    /// All non-canceled events of an organization, in API order.
    pub async fn events(&self, organization_id: &str) -> SyncResult<Vec<Event>> {
        let path = format!("/organizations/{}/events/?status=all", organization_id);
        let list: EventList = self.get(&path).await?;

        let events: Vec<Event> = list
            .events
            .into_iter()
            .filter(|event| event.status != "canceled")
            .collect();

        println!(
            "Retrieved {} events from Eventbrite (excluding canceled)",
            events.len()
        );

        Ok(events)
    }

    pub async fn venue(&self, venue_id: &str) -> SyncResult<Venue> {
        self.get(&format!("/venues/{}/", venue_id)).await
    }

    pub async fn attendees(&self, event_id: &str) -> SyncResult<Vec<Attendee>> {
        let list: AttendeeList = self.get(&format!("/events/{}/attendees/", event_id)).await?;
        Ok(list.attendees)
    }
}
