//! Grouping attendees into orders and computing per-order aggregates.

use std::collections::HashMap;

use crate::attendee::{Attendee, Profile};

/// A group of attendees sharing an order id.
///
/// Groups built by [`group_by_order`] always contain at least one
/// attendee. The first attendee in API-returned order is the
/// representative: its profile and ticket class label the synchronized
/// ticket-sale record.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub attendees: Vec<Attendee>,
}

impl Order {
    /// The first attendee in source order.
    pub fn representative(&self) -> &Attendee {
        &self.attendees[0]
    }

    /// Buyer profile of the representative attendee.
    pub fn buyer(&self) -> &Profile {
        &self.representative().profile
    }

    /// Number of tickets in the order.
    pub fn quantity(&self) -> usize {
        self.attendees.len()
    }

    /// Total gross for the order in major currency units.
    pub fn total_price(&self) -> f64 {
        let minor: i64 = self.attendees.iter().map(Attendee::gross_minor_units).sum();
        minor as f64 / 100.0
    }

    /// Ticket class of the representative attendee.
    pub fn ticket_type(&self) -> &str {
        self.representative()
            .ticket_class_name
            .as_deref()
            .unwrap_or("Unknown")
    }

    /// Orders without an id or without a buyer email are never synced.
    pub fn is_syncable(&self) -> bool {
        !self.id.is_empty() && !self.buyer().email.is_empty()
    }
}

/// Group attendees by order id, preserving both the first-seen order of
/// groups and the source order of attendees within each group.
pub fn group_by_order(attendees: Vec<Attendee>) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for attendee in attendees {
        match index.get(&attendee.order_id) {
            Some(&i) => orders[i].attendees.push(attendee),
            None => {
                index.insert(attendee.order_id.clone(), orders.len());
                orders.push(Order {
                    id: attendee.order_id.clone(),
                    attendees: vec![attendee],
                });
            }
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendee::{Costs, Money};

    fn make_attendee(order_id: &str, email: &str, gross: Option<i64>) -> Attendee {
        Attendee {
            order_id: order_id.to_string(),
            profile: Profile {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: email.to_string(),
            },
            ticket_class_name: Some("General Admission".to_string()),
            costs: gross.map(|value| Costs {
                gross: Some(Money { value }),
            }),
        }
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let attendees = vec![
            make_attendee("O2", "a@example.com", Some(100)),
            make_attendee("O1", "b@example.com", Some(200)),
            make_attendee("O2", "c@example.com", Some(300)),
        ];

        let orders = group_by_order(attendees);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "O2");
        assert_eq!(orders[0].quantity(), 2);
        assert_eq!(orders[1].id, "O1");
        assert_eq!(orders[1].quantity(), 1);
    }

    #[test]
    fn test_representative_is_first_in_source_order() {
        let mut first = make_attendee("O1", "first@example.com", None);
        first.ticket_class_name = Some("VIP".to_string());
        let second = make_attendee("O1", "second@example.com", None);

        let orders = group_by_order(vec![first, second]);

        assert_eq!(orders[0].buyer().email, "first@example.com");
        assert_eq!(orders[0].ticket_type(), "VIP");
    }

    #[test]
    fn test_total_price_sums_gross_in_minor_units() {
        let attendees = vec![
            make_attendee("O1", "a@example.com", Some(1000)),
            make_attendee("O1", "b@example.com", Some(500)),
        ];

        let orders = group_by_order(attendees);

        assert_eq!(orders[0].quantity(), 2);
        assert_eq!(orders[0].total_price(), 15.0);
    }

    #[test]
    fn test_missing_costs_default_to_zero() {
        let attendees = vec![
            make_attendee("O1", "a@example.com", None),
            make_attendee("O1", "b@example.com", Some(250)),
        ];

        let orders = group_by_order(attendees);

        assert_eq!(orders[0].total_price(), 2.5);
    }

    #[test]
    fn test_ticket_type_defaults_to_unknown() {
        let mut attendee = make_attendee("O1", "a@example.com", None);
        attendee.ticket_class_name = None;

        let orders = group_by_order(vec![attendee]);

        assert_eq!(orders[0].ticket_type(), "Unknown");
    }

    #[test]
    fn test_orders_without_id_or_email_are_not_syncable() {
        let no_id = group_by_order(vec![make_attendee("", "a@example.com", None)]);
        assert!(!no_id[0].is_syncable());

        let no_email = group_by_order(vec![make_attendee("O1", "", None)]);
        assert!(!no_email[0].is_syncable());

        let ok = group_by_order(vec![make_attendee("O1", "a@example.com", None)]);
        assert!(ok[0].is_syncable());
    }
}
