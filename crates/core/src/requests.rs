//! Canonical request lifecycle states.
//!
//! A request starts `pending` and moves to `approved` exactly once, through
//! the approval flow. All comparisons and writes go through [`RequestStatus`]
//! so no case-variant string literals exist anywhere in the system; the
//! database CHECK constraint enforces the same two values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an asset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Initial state: awaiting an HR decision.
    Pending,
    /// Terminal state: granted, stock decremented, assignment recorded.
    Approved,
}

impl RequestStatus {
    /// The canonical wire/storage literal for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
        }
    }

    /// Whether the approval flow may still act on a request in this state.
    pub fn is_approvable(self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            other => Err(format!(
                "Invalid request status '{other}'. Must be one of: pending, approved"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_literals() {
        for status in [RequestStatus::Pending, RequestStatus::Approved] {
            assert_eq!(status.as_str().parse::<RequestStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_case_variants_rejected() {
        // The source system mixed "Pending" and "approved"; only the
        // lowercase canonical forms parse.
        assert!("Pending".parse::<RequestStatus>().is_err());
        assert!("Approved".parse::<RequestStatus>().is_err());
        assert!("".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_only_pending_is_approvable() {
        assert!(RequestStatus::Pending.is_approvable());
        assert!(!RequestStatus::Approved.is_approvable());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&RequestStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }
}
