use std::fmt;

use thiserror::Error;

use crate::model::ticket::{InvalidTransition, ParseEnumError};
use crate::model::ticket_id::TicketId;

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    TicketNotFound,
    InvalidStatusTransition,
    VerificationIncomplete,
    InvalidEnumValue,
    SnapshotWriteFailed,
    LockContention,
    ExportFailed,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::TicketNotFound => "E2001",
            Self::InvalidStatusTransition => "E2002",
            Self::VerificationIncomplete => "E2003",
            Self::InvalidEnumValue => "E2005",
            Self::SnapshotWriteFailed => "E5001",
            Self::LockContention => "E5002",
            Self::ExportFailed => "E5003",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::TicketNotFound => "Ticket not found",
            Self::InvalidStatusTransition => "Invalid status transition",
            Self::VerificationIncomplete => "Verification checklist incomplete",
            Self::InvalidEnumValue => "Invalid role/urgency/impact/status value",
            Self::SnapshotWriteFailed => "Snapshot write failed",
            Self::LockContention => "Lock contention",
            Self::ExportFailed => "CSV export failed",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in the innkeep config.toml and retry."),
            Self::TicketNotFound => Some("Use `ik list` to see known ticket ids."),
            Self::InvalidStatusTransition => {
                Some("Follow valid transitions: open -> in-progress/waiting-part/vendor -> resolved -> verified.")
            }
            Self::VerificationIncomplete => {
                Some("Pass both --area-clean and --asset-working to verify a resolved ticket.")
            }
            Self::InvalidEnumValue => Some("Use one of the documented role/urgency/impact/status values."),
            Self::SnapshotWriteFailed => Some("Check disk space and write permissions."),
            Self::LockContention => Some("Retry after the other `ik` process releases its lock."),
            Self::ExportFailed => Some("Check the output path is writable."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors from the snapshot repository layer.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot lock timed out after {waited_ms}ms at {path}")]
    LockTimeout { path: String, waited_ms: u128 },
}

impl SnapshotError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::SnapshotWriteFailed,
            Self::LockTimeout { .. } => ErrorCode::LockContention,
        }
    }
}

/// Errors from ticket store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(TicketId),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("cannot verify '{id}': {missing}")]
    VerificationIncomplete { id: TicketId, missing: &'static str },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidValue(#[from] ParseEnumError),
}

impl StoreError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::TicketNotFound(_) => ErrorCode::TicketNotFound,
            Self::InvalidTransition(_) => ErrorCode::InvalidStatusTransition,
            Self::VerificationIncomplete { .. } => ErrorCode::VerificationIncomplete,
            Self::Snapshot(err) => err.code(),
            Self::Serialize(_) => ErrorCode::SnapshotWriteFailed,
            Self::InvalidValue(_) => ErrorCode::InvalidEnumValue,
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}
