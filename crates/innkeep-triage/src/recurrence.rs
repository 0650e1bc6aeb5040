//! Recurrence and hotspot detection.
//!
//! Recurrence groups tickets (any status) created inside the trailing
//! recurrence window by (room, asset); a group with more than one member
//! flags every member. Hotspots count per-room tickets created inside the
//! trailing hotspot window against a threshold.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use innkeep_core::config::AnalyticsConfig;
use innkeep_core::model::ticket::Ticket;

fn within_days(created_at: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    now - created_at <= Duration::days(days)
}

/// Precomputed recurrence/hotspot counts for one read of the collection.
#[derive(Debug, Clone)]
pub struct RecurrenceIndex {
    pair_counts: HashMap<(String, String), usize>,
    room_counts: HashMap<String, usize>,
    hotspot_threshold: usize,
}

impl RecurrenceIndex {
    #[must_use]
    pub fn build(tickets: &[Ticket], config: &AnalyticsConfig, now: DateTime<Utc>) -> Self {
        let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
        let mut room_counts: HashMap<String, usize> = HashMap::new();

        for ticket in tickets {
            if within_days(ticket.created_at, now, config.recurrence_window_days) {
                *pair_counts
                    .entry((ticket.room.clone(), ticket.asset.clone()))
                    .or_default() += 1;
            }
            if within_days(ticket.created_at, now, config.hotspot_window_days) {
                *room_counts.entry(ticket.room.clone()).or_default() += 1;
            }
        }

        Self {
            pair_counts,
            room_counts,
            hotspot_threshold: config.hotspot_threshold,
        }
    }

    /// Whether this ticket's (room, asset) pairing repeated inside the
    /// recurrence window.
    #[must_use]
    pub fn ticket_is_recurrent(&self, ticket: &Ticket) -> bool {
        self.pair_counts
            .get(&(ticket.room.clone(), ticket.asset.clone()))
            .is_some_and(|&count| count > 1)
    }

    /// A room is recurrent when any of its active tickets is recurrent.
    #[must_use]
    pub fn room_is_recurrent(&self, room: &str, tickets: &[Ticket]) -> bool {
        tickets
            .iter()
            .filter(|t| t.room == room && t.is_active())
            .any(|t| self.ticket_is_recurrent(t))
    }

    /// Tickets created in the room inside the hotspot window.
    #[must_use]
    pub fn room_recent_count(&self, room: &str) -> usize {
        self.room_counts.get(room).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn room_is_hotspot(&self, room: &str) -> bool {
        self.room_recent_count(room) >= self.hotspot_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::RecurrenceIndex;
    use chrono::{Duration, Utc};
    use innkeep_core::config::AnalyticsConfig;
    use innkeep_core::model::ticket::{Status, Ticket};
    use innkeep_core::model::ticket_id::TicketId;

    fn ticket(id: u64, room: &str, asset: &str, age_days: i64) -> Ticket {
        Ticket {
            id: TicketId::from_seq(id),
            room: room.into(),
            asset: asset.into(),
            created_at: Utc::now() - Duration::days(age_days),
            ..Ticket::default()
        }
    }

    #[test]
    fn pair_repeats_flag_both_members() {
        let now = Utc::now();
        let tickets = vec![
            ticket(1001, "105", "air-conditioning", 0),
            ticket(1002, "105", "air-conditioning", 10),
            ticket(1003, "105", "plumbing", 1),
        ];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), now);

        assert!(index.ticket_is_recurrent(&tickets[0]));
        assert!(index.ticket_is_recurrent(&tickets[1]));
        assert!(!index.ticket_is_recurrent(&tickets[2]), "different asset");
    }

    #[test]
    fn recurrence_counts_tickets_of_any_status() {
        let now = Utc::now();
        let mut closed = ticket(1001, "105", "air-conditioning", 5);
        closed.status = Status::Verified;
        let tickets = vec![closed, ticket(1002, "105", "air-conditioning", 0)];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), now);

        assert!(index.ticket_is_recurrent(&tickets[1]));
    }

    #[test]
    fn old_tickets_fall_out_of_the_window() {
        let now = Utc::now();
        let tickets = vec![
            ticket(1001, "105", "air-conditioning", 45),
            ticket(1002, "105", "air-conditioning", 0),
        ];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), now);

        assert!(!index.ticket_is_recurrent(&tickets[1]));
    }

    #[test]
    fn hotspot_at_exactly_the_threshold() {
        let now = Utc::now();
        let two = vec![
            ticket(1001, "108", "plumbing", 0),
            ticket(1002, "108", "electrical", 3),
        ];
        let index = RecurrenceIndex::build(&two, &AnalyticsConfig::default(), now);
        assert!(!index.room_is_hotspot("108"), "two recent tickets is not hot");

        let mut three = two;
        three.push(ticket(1003, "108", "furniture", 6));
        let index = RecurrenceIndex::build(&three, &AnalyticsConfig::default(), now);
        assert!(index.room_is_hotspot("108"));
        assert_eq!(index.room_recent_count("108"), 3);
    }

    #[test]
    fn hotspot_ignores_tickets_outside_the_window() {
        let now = Utc::now();
        let tickets = vec![
            ticket(1001, "108", "plumbing", 0),
            ticket(1002, "108", "electrical", 1),
            ticket(1003, "108", "furniture", 9),
        ];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), now);
        assert!(!index.room_is_hotspot("108"));
    }

    #[test]
    fn room_recurrence_requires_an_active_recurrent_ticket() {
        let now = Utc::now();
        let mut first = ticket(1001, "105", "air-conditioning", 5);
        first.status = Status::Verified;
        let mut second = ticket(1002, "105", "air-conditioning", 2);
        second.status = Status::Verified;
        let tickets = vec![first, second];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), now);

        // The pair repeats, but no active ticket carries it.
        assert!(!index.room_is_recurrent("105", &tickets));
    }

    #[test]
    fn windows_come_from_config() {
        let now = Utc::now();
        let config = AnalyticsConfig {
            recurrence_window_days: 3,
            ..AnalyticsConfig::default()
        };
        let tickets = vec![
            ticket(1001, "105", "air-conditioning", 5),
            ticket(1002, "105", "air-conditioning", 0),
        ];
        let index = RecurrenceIndex::build(&tickets, &config, now);
        assert!(!index.ticket_is_recurrent(&tickets[1]));
    }
}
