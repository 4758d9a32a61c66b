//! Attendee records from the Eventbrite attendees endpoint.

use serde::Deserialize;

/// One attendee of an event. Attendees bought in the same checkout share
/// an `order_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub ticket_class_name: Option<String>,
    #[serde(default)]
    pub costs: Option<Costs>,
}

impl Attendee {
    /// Gross cost of this attendee's ticket in minor currency units.
    /// Missing cost information counts as zero.
    pub fn gross_minor_units(&self) -> i64 {
        self.costs
            .as_ref()
            .and_then(|c| c.gross.as_ref())
            .map(|g| g.value)
            .unwrap_or(0)
    }
}

/// Buyer profile attached to an attendee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Cost breakdown for a single attendee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Costs {
    #[serde(default)]
    pub gross: Option<Money>,
}

/// A monetary amount in minor currency units (e.g. cents).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub value: i64,
}
