use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket identifier in `T-<n>` form.
///
/// The numeric suffix is assigned monotonically by the store and never
/// reused. Identifiers loaded from a snapshot are accepted verbatim; only
/// the digits matter when computing the next sequence value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Build an identifier from a sequence number.
    #[must_use]
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("T-{seq}"))
    }

    /// Wrap a raw identifier string without validation.
    #[must_use]
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric portion of the identifier, ignoring any non-digit
    /// characters. `None` when the identifier carries no digits at all.
    #[must_use]
    pub fn numeric_suffix(&self) -> Option<u64> {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
