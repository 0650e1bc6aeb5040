use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ticket::Role;

/// Immutable record of one state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub at: DateTime<Utc>,
    pub action: String,
    pub actor: Role,
}

impl AuditEvent {
    #[must_use]
    pub fn new(at: DateTime<Utc>, actor: Role, action: impl Into<String>) -> Self {
        Self {
            at,
            action: action.into(),
            actor,
        }
    }
}

/// A ticket's append-only history, in insertion order.
///
/// The vector is private: events can be appended and read, never edited or
/// removed. Deserializing an empty trail is accepted (lenient snapshot
/// loading); the store never produces one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail(Vec<AuditEvent>);

impl AuditTrail {
    /// Start a trail with its creation event.
    #[must_use]
    pub fn seeded(event: AuditEvent) -> Self {
        Self(vec![event])
    }

    /// Build a trail from pre-existing events (seed data).
    #[must_use]
    pub fn from_events(events: Vec<AuditEvent>) -> Self {
        Self(events)
    }

    pub fn append(&mut self, event: AuditEvent) {
        self.0.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&AuditEvent> {
        self.0.last()
    }
}
