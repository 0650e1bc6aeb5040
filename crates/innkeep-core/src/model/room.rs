use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ticket::ParseEnumError;

/// Room categories in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Suite,
    Standard,
    Deluxe,
}

impl RoomCategory {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Suite => "suite",
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suite" => Ok(Self::Suite),
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            _ => Err(ParseEnumError {
                expected: "room category",
                got: s.to_string(),
            }),
        }
    }
}

/// Static reference data for one room. Rooms are never persisted or
/// mutated; the catalog exists to render the room map and compute per-room
/// aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: String,
    pub floor: u8,
    pub category: RoomCategory,
}

/// The fixed 20-room catalog: 101 through 120, all on floor 1.
#[must_use]
pub fn catalog() -> Vec<Room> {
    (0..20u32)
        .map(|i| Room {
            number: (101 + i).to_string(),
            floor: 1,
            category: if i % 3 == 0 {
                RoomCategory::Suite
            } else if i % 2 == 0 {
                RoomCategory::Deluxe
            } else {
                RoomCategory::Standard
            },
        })
        .collect()
}

/// Asset categories offered when reporting an issue. Free-form values are
/// also accepted; these feed CLI hints and the seed data.
pub const ASSETS: [&str; 7] = [
    "air-conditioning",
    "plumbing",
    "electrical",
    "tv-wifi",
    "furniture",
    "locks",
    "other",
];

/// Issue types offered when reporting an issue.
pub const ISSUE_TYPES: [&str; 7] = [
    "wont-turn-on",
    "leaking",
    "strange-noise",
    "broken",
    "dirty",
    "no-signal",
    "bad-odor",
];
