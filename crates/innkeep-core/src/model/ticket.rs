use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::audit::AuditTrail;
use super::ticket_id::TicketId;

/// The four reporting/acting roles.
///
/// A role is a client-side label only: it tags audit events and the
/// `created_by` field, and carries no authorization weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Management,
    Reception,
    Cleaning,
    Maintenance,
}

impl Role {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Management => "management",
            Self::Reception => "reception",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Reporter-assessed urgency, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// How much the issue interferes with use of the room, ordered none to
/// blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    None,
    Annoying,
    Blocking,
}

impl Impact {
    const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Annoying => "annoying",
            Self::Blocking => "blocking",
        }
    }
}

/// The six lifecycle statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Open,
    InProgress,
    WaitingPart,
    Vendor,
    Resolved,
    Verified,
}

impl Status {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::WaitingPart => "waiting-part",
            Self::Vendor => "vendor",
            Self::Resolved => "resolved",
            Self::Verified => "verified",
        }
    }

    /// Whether no further transition is permitted out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Validate whether a transition from self to `target` is allowed.
    ///
    /// Valid transitions:
    /// - any non-terminal status -> `in-progress`, `waiting-part`,
    ///   `vendor`, or `resolved`
    /// - `resolved -> verified` (the store additionally gates this on the
    ///   verification checklist)
    /// - `verified` is terminal; nothing leaves it
    /// - `open` is the initial status and is never a transition target
    pub fn can_transition_to(self, target: Status) -> Result<(), InvalidTransition> {
        if self == target {
            return Err(InvalidTransition {
                from: self,
                to: target,
                reason: "no-op transition is not allowed",
            });
        }

        if self.is_terminal() {
            return Err(InvalidTransition {
                from: self,
                to: target,
                reason: "verified is terminal",
            });
        }

        let allowed = match target {
            Status::InProgress | Status::WaitingPart | Status::Vendor | Status::Resolved => true,
            Status::Verified => self == Self::Resolved,
            Status::Open => false,
        };

        if allowed {
            Ok(())
        } else {
            Err(InvalidTransition {
                from: self,
                to: target,
                reason: match target {
                    Status::Verified => "only resolved tickets can be verified",
                    _ => "open is the initial status, not a transition target",
                },
            })
        }
    }
}

/// Error returned when a status transition is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: Status,
    pub to: Status,
    pub reason: &'static str,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot move from {} to {}: {}",
            self.from, self.to, self.reason
        )
    }
}

impl std::error::Error for InvalidTransition {}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

/// One reported maintenance issue tied to a room.
///
/// `priority` is derived state: it is recomputed on load and after every
/// mutation and never trusted as persisted truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: TicketId,
    pub room: String,
    pub occupied: bool,
    pub asset: String,
    pub issue: String,
    pub description: String,
    pub urgency: Urgency,
    pub impact: Impact,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub created_by: Role,
    pub assigned_to: Option<String>,
    pub notes: Vec<String>,
    pub needs_part: bool,
    pub part_name: Option<String>,
    pub needs_vendor: bool,
    pub vendor_type: Option<String>,
    pub verified_by: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub priority: i64,
    pub history: AuditTrail,
}

impl Default for Ticket {
    fn default() -> Self {
        Self {
            id: TicketId::new_unchecked(""),
            room: String::new(),
            occupied: false,
            asset: String::new(),
            issue: String::new(),
            description: String::new(),
            urgency: Urgency::Low,
            impact: Impact::None,
            status: Status::Open,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            created_by: Role::Management,
            assigned_to: None,
            notes: Vec::new(),
            needs_part: false,
            part_name: None,
            needs_vendor: false,
            vendor_type: None,
            verified_by: None,
            closed_at: None,
            priority: 0,
            history: AuditTrail::default(),
        }
    }
}

impl Ticket {
    /// Whether the ticket counts as urgent-or-blocking for KPI purposes.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.urgency == Urgency::High || self.impact == Impact::Blocking
    }

    /// Whether the ticket still needs attention (not verified).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "management" => Ok(Self::Management),
            "reception" => Ok(Self::Reception),
            "cleaning" => Ok(Self::Cleaning),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(ParseEnumError {
                expected: "role",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError {
                expected: "urgency",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Impact {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" => Ok(Self::None),
            "annoying" => Ok(Self::Annoying),
            "blocking" => Ok(Self::Blocking),
            _ => Err(ParseEnumError {
                expected: "impact",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "open" => Ok(Self::Open),
            "in-progress" => Ok(Self::InProgress),
            "waiting-part" => Ok(Self::WaitingPart),
            "vendor" => Ok(Self::Vendor),
            "resolved" => Ok(Self::Resolved),
            "verified" => Ok(Self::Verified),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Impact, InvalidTransition, Role, Status, Urgency};
    use std::str::FromStr;

    #[test]
    fn enum_json_roundtrips() {
        assert_eq!(serde_json::to_string(&Role::Cleaning).unwrap(), "\"cleaning\"");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Impact::Blocking).unwrap(), "\"blocking\"");
        assert_eq!(
            serde_json::to_string(&Status::WaitingPart).unwrap(),
            "\"waiting-part\""
        );

        assert_eq!(
            serde_json::from_str::<Status>("\"in-progress\"").unwrap(),
            Status::InProgress
        );
        assert_eq!(
            serde_json::from_str::<Impact>("\"none\"").unwrap(),
            Impact::None
        );
    }

    #[test]
    fn display_parse_roundtrips() {
        for value in [
            Status::Open,
            Status::InProgress,
            Status::WaitingPart,
            Status::Vendor,
            Status::Resolved,
            Status::Verified,
        ] {
            let rendered = value.to_string();
            assert_eq!(Status::from_str(&rendered).unwrap(), value);
        }

        for value in [Urgency::Low, Urgency::Medium, Urgency::High] {
            assert_eq!(Urgency::from_str(&value.to_string()).unwrap(), value);
        }

        for value in [Impact::None, Impact::Annoying, Impact::Blocking] {
            assert_eq!(Impact::from_str(&value.to_string()).unwrap(), value);
        }

        for value in [
            Role::Management,
            Role::Reception,
            Role::Cleaning,
            Role::Maintenance,
        ] {
            assert_eq!(Role::from_str(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(Status::from_str("pending").is_err());
        assert!(Urgency::from_str("critical").is_err());
        assert!(Impact::from_str("severe").is_err());
        assert!(Role::from_str("guest").is_err());
    }

    #[test]
    fn urgency_and_impact_are_ordered() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
        assert!(Impact::None < Impact::Annoying);
        assert!(Impact::Annoying < Impact::Blocking);
    }

    #[test]
    fn working_statuses_are_reachable_from_any_non_terminal() {
        let sources = [
            Status::Open,
            Status::InProgress,
            Status::WaitingPart,
            Status::Vendor,
            Status::Resolved,
        ];
        let targets = [
            Status::InProgress,
            Status::WaitingPart,
            Status::Vendor,
            Status::Resolved,
        ];

        for from in sources {
            for to in targets {
                if from == to {
                    assert!(from.can_transition_to(to).is_err());
                } else {
                    assert!(from.can_transition_to(to).is_ok(), "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn verified_is_only_reachable_from_resolved() {
        assert!(Status::Resolved.can_transition_to(Status::Verified).is_ok());

        for from in [
            Status::Open,
            Status::InProgress,
            Status::WaitingPart,
            Status::Vendor,
        ] {
            assert!(matches!(
                from.can_transition_to(Status::Verified),
                Err(InvalidTransition {
                    to: Status::Verified,
                    ..
                })
            ));
        }
    }

    #[test]
    fn verified_is_terminal() {
        for to in [
            Status::Open,
            Status::InProgress,
            Status::WaitingPart,
            Status::Vendor,
            Status::Resolved,
        ] {
            assert!(Status::Verified.can_transition_to(to).is_err());
        }
    }

    #[test]
    fn open_is_never_a_transition_target() {
        assert!(Status::InProgress.can_transition_to(Status::Open).is_err());
        assert!(Status::Resolved.can_transition_to(Status::Open).is_err());
    }
}
