//! One full Eventbrite -> Airtable pass: venues, events, ticket sales.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use ticketsync_core::{dates, group_by_order, Event, SyncError, Venue};

use crate::airtable::{AirtableClient, EVENTS_TABLE, TICKET_SALES_TABLE, VENUES_TABLE};
use crate::config::Config;
use crate::eventbrite::EventbriteClient;

/// Sales channel written to every ticket-sale record.
const CHANNEL: &str = "Eventbrite";

/// Run one full sync pass.
///
/// Event listing failures abort the run; everything after that is
/// isolated per event, so one broken event never stops the others.
pub async fn run(config: &Config) -> Result<()> {
    let eventbrite = EventbriteClient::new(config);
    let airtable = AirtableClient::new(config);

    let organization_id = eventbrite.first_organization_id().await?;
    let events = eventbrite.events(&organization_id).await?;

    for event in &events {
        if let Err(e) = sync_event(&eventbrite, &airtable, event).await {
            println!(
                "{}",
                format!("Error processing '{}': {}", event.name_text(), e).red()
            );
        }
    }

    Ok(())
}

/// Venue -> event -> ticket sales, in order, for a single event.
async fn sync_event(
    eventbrite: &EventbriteClient,
    airtable: &AirtableClient,
    event: &Event,
) -> Result<()> {
    let venue_record_id = match event.venue_ref() {
        Some(venue_id) => {
            let venue = eventbrite.venue(venue_id).await?;
            Some(find_or_create_venue(airtable, &venue).await?)
        }
        None => {
            println!(
                "'{}' has no venue ID - continuing without venue.",
                event.name_text()
            );
            None
        }
    };

    upsert_event(airtable, event, venue_record_id.as_deref()).await?;
    sync_ticket_sales(eventbrite, airtable, event).await?;

    Ok(())
}

/// Airtable record id for a venue, inserting the venue on first sight.
async fn find_or_create_venue(airtable: &AirtableClient, venue: &Venue) -> Result<String> {
    if let Some(record_id) = airtable
        .find_record(VENUES_TABLE, "Venue Name", &venue.name)
        .await?
    {
        return Ok(record_id);
    }

    // Airtable accepts "" where the capacity is unknown.
    let capacity = match venue.capacity {
        Some(capacity) => json!(capacity),
        None => json!(""),
    };

    let record_id = airtable
        .create_record(
            VENUES_TABLE,
            json!({
                "Venue Name": venue.name,
                "Address": venue.address.localized_address_display,
                "Capacity": capacity,
                "Contact Name": "",
                "Contact Email": "",
                "Contact Phone": "",
            }),
        )
        .await?;

    println!("{}", format!("Created new venue: {}", venue.name).green());

    Ok(record_id)
}

/// Create the event record unless one with the same name already exists.
async fn upsert_event(
    airtable: &AirtableClient,
    event: &Event,
    venue_record_id: Option<&str>,
) -> Result<()> {
    let name = event.name_text();
    let date = dates::parse_event_date(&event.start.local)?;

    if airtable
        .find_record(EVENTS_TABLE, "Event Name", name)
        .await?
        .is_some()
    {
        println!("Event '{}' already exists in Airtable. Skipping.", name);
        return Ok(());
    }

    let mut fields = json!({
        "Event Name": name,
        "Event Date": dates::format_event_date(date),
    });
    if let Some(venue_record_id) = venue_record_id {
        fields["Venue"] = json!([venue_record_id]);
    }

    match airtable.create_record(EVENTS_TABLE, fields).await {
        Ok(_) => {
            println!("{}", format!("Event '{}' created.", name).green());
            Ok(())
        }
        Err(SyncError::Api { status, body }) => {
            println!("{}", format!("Airtable Error: {} - {}", status, body).red());
            Err(SyncError::Api { status, body }.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Insert one ticket-sale record per order of the event's attendees.
///
/// Soft-skips the whole event when Airtable has no matching event record.
/// A rejected order insert is logged and the loop continues; transport
/// failures still abort this event's ticket sync.
async fn sync_ticket_sales(
    eventbrite: &EventbriteClient,
    airtable: &AirtableClient,
    event: &Event,
) -> Result<()> {
    let event_name = event.name_text();

    let event_record_id = match airtable
        .find_record(EVENTS_TABLE, "Event Name", event_name)
        .await?
    {
        Some(record_id) => record_id,
        None => {
            println!(
                "No Airtable match for Event '{}' - skipping ticket sales.",
                event_name
            );
            return Ok(());
        }
    };

    let attendees = eventbrite.attendees(&event.id).await?;

    for order in group_by_order(attendees) {
        if !order.is_syncable() {
            continue;
        }

        if airtable
            .find_record(TICKET_SALES_TABLE, "Order ID", &order.id)
            .await?
            .is_some()
        {
            continue;
        }

        let buyer = order.buyer();
        let quantity = order.quantity();
        let price = order.total_price();

        let fields = json!({
            "Order ID": order.id,
            "First Name": buyer.first_name,
            "Last Name": buyer.last_name,
            "Email": buyer.email,
            "Event": [event_record_id],
            "Ticket Type": order.ticket_type(),
            "Price": price,
            "Quantity": quantity,
            "Channel": CHANNEL,
        });

        match airtable.create_record(TICKET_SALES_TABLE, fields).await {
            Ok(_) => println!(
                "Synced order {}: {} {} - {} tickets for ${:.2}",
                order.id, buyer.first_name, buyer.last_name, quantity, price
            ),
            Err(SyncError::Api { status, body }) => {
                println!(
                    "{}",
                    format!("Ticket Sync Error: {} - {}", status, body).red()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
