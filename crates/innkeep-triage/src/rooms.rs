//! Per-room rollups for the room map, and asset frequency counts.

use serde::Serialize;
use std::collections::BTreeMap;

use innkeep_core::model::room::Room;
use innkeep_core::model::ticket::Ticket;

use crate::recurrence::RecurrenceIndex;

/// Condition of one room, derived from its active tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCondition {
    Ok,
    Pending,
    Critical,
}

/// One room map cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub number: String,
    pub condition: RoomCondition,
    /// Any active ticket reports the room occupied.
    pub occupied: bool,
    /// Active (non-terminal) ticket count.
    pub active: usize,
    pub hotspot: bool,
    pub recurrent: bool,
}

/// Roll up the catalog against the current collection.
#[must_use]
pub fn room_map(rooms: &[Room], tickets: &[Ticket], index: &RecurrenceIndex) -> Vec<RoomSummary> {
    rooms
        .iter()
        .map(|room| {
            let active: Vec<&Ticket> = tickets
                .iter()
                .filter(|t| t.room == room.number && t.is_active())
                .collect();

            let condition = if active.is_empty() {
                RoomCondition::Ok
            } else if active.iter().any(|t| t.is_critical()) {
                RoomCondition::Critical
            } else {
                RoomCondition::Pending
            };

            RoomSummary {
                number: room.number.clone(),
                condition,
                occupied: active.iter().any(|t| t.occupied),
                active: active.len(),
                hotspot: index.room_is_hotspot(&room.number),
                recurrent: index.room_is_recurrent(&room.number, tickets),
            }
        })
        .collect()
}

/// Ticket counts by asset category, most frequent first (ties
/// alphabetical for a stable rendering order).
#[must_use]
pub fn asset_frequency(tickets: &[Ticket]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ticket in tickets {
        *counts.entry(ticket.asset.as_str()).or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(asset, count)| (asset.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::{asset_frequency, room_map, RoomCondition};
    use chrono::Utc;
    use innkeep_core::config::AnalyticsConfig;
    use innkeep_core::model::room;
    use innkeep_core::model::ticket::{Impact, Status, Ticket, Urgency};
    use crate::recurrence::RecurrenceIndex;

    fn in_room(number: &str, status: Status) -> Ticket {
        Ticket {
            room: number.into(),
            asset: "plumbing".into(),
            status,
            created_at: Utc::now(),
            ..Ticket::default()
        }
    }

    #[test]
    fn room_conditions_follow_active_tickets() {
        let tickets = vec![
            Ticket {
                urgency: Urgency::High,
                ..in_room("101", Status::Open)
            },
            in_room("102", Status::InProgress),
            in_room("103", Status::Verified),
        ];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), Utc::now());
        let map = room_map(&room::catalog(), &tickets, &index);

        let find = |n: &str| map.iter().find(|r| r.number == n).expect("room in map");
        assert_eq!(find("101").condition, RoomCondition::Critical);
        assert_eq!(find("102").condition, RoomCondition::Pending);
        assert_eq!(find("103").condition, RoomCondition::Ok, "verified is inactive");
        assert_eq!(find("104").condition, RoomCondition::Ok);
    }

    #[test]
    fn blocking_impact_is_critical_too() {
        let tickets = vec![Ticket {
            impact: Impact::Blocking,
            ..in_room("105", Status::WaitingPart)
        }];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), Utc::now());
        let map = room_map(&room::catalog(), &tickets, &index);
        let cell = map.iter().find(|r| r.number == "105").expect("room");
        assert_eq!(cell.condition, RoomCondition::Critical);
    }

    #[test]
    fn occupancy_and_count_come_from_active_tickets() {
        let tickets = vec![
            Ticket {
                occupied: true,
                ..in_room("110", Status::Verified)
            },
            in_room("110", Status::Open),
            in_room("110", Status::InProgress),
        ];
        let index = RecurrenceIndex::build(&tickets, &AnalyticsConfig::default(), Utc::now());
        let map = room_map(&room::catalog(), &tickets, &index);
        let cell = map.iter().find(|r| r.number == "110").expect("room");

        assert_eq!(cell.active, 2);
        assert!(!cell.occupied, "occupancy of a closed ticket does not count");
    }

    #[test]
    fn asset_frequency_sorts_by_count_then_name() {
        let mut tickets = vec![
            in_room("101", Status::Open),
            in_room("102", Status::Open),
        ];
        tickets.push(Ticket {
            asset: "electrical".into(),
            ..in_room("103", Status::Open)
        });

        let freq = asset_frequency(&tickets);
        assert_eq!(freq[0], ("plumbing".to_string(), 2));
        assert_eq!(freq[1], ("electrical".to_string(), 1));
    }
}
