//! Inventory requests and their status lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::ids::HasIdentifier;

/// Where a request is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting review.
    Pending,
    /// Accepted, waiting to be handed over.
    Approved,
    /// Turned down.
    Rejected,
    /// Handed over to the requester.
    Delivered,
}

impl RequestStatus {
    /// Returns `true` if a request may move from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved | Self::Rejected) | (Self::Approved, Self::Delivered)
        )
    }

    /// Lowercase name used in output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for stock raised by a member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRequest {
    /// Daily identifier, e.g. `REQ-001-01012024`.
    pub id: String,
    /// Requested item.
    pub item: String,
    /// Number of units requested.
    pub quantity: u32,
    /// Who raised the request.
    pub requester: String,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// Free-form remarks.
    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryRequest {
    /// Moves the request to `next`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the lifecycle does not allow the move.
    pub fn transition(&mut self, next: RequestStatus) -> Result<(), String> {
        if !self.status.can_transition_to(next) {
            return Err(format!(
                "Request {} cannot move from {} to {next}",
                self.id, self.status
            ));
        }
        self.status = next;
        Ok(())
    }
}

impl HasIdentifier for InventoryRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> InventoryRequest {
        InventoryRequest {
            id: "REQ-001-01012024".to_string(),
            item: "Pipettes".to_string(),
            quantity: 20,
            requester: "lab-2".to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            notes: None,
        }
    }

    #[test]
    fn pending_can_be_approved_then_delivered() {
        let mut req = pending();
        req.transition(RequestStatus::Approved).unwrap();
        req.transition(RequestStatus::Delivered).unwrap();
        assert_eq!(req.status, RequestStatus::Delivered);
    }

    #[test]
    fn pending_can_be_rejected() {
        let mut req = pending();
        req.transition(RequestStatus::Rejected).unwrap();
        assert_eq!(req.status, RequestStatus::Rejected);
    }

    #[test]
    fn refused_transitions_leave_status_alone() {
        let mut req = pending();
        let err = req.transition(RequestStatus::Delivered).unwrap_err();
        assert!(err.contains("pending to delivered"));
        assert_eq!(req.status, RequestStatus::Pending);

        req.transition(RequestStatus::Rejected).unwrap();
        assert!(req.transition(RequestStatus::Approved).is_err());
        assert!(req.transition(RequestStatus::Rejected).is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let yaml = serde_yaml::to_string(&RequestStatus::Delivered).unwrap();
        assert_eq!(yaml.trim(), "delivered");
    }
}
