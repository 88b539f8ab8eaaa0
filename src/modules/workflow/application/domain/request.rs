use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle of a donation request.
///
/// Transitions only move forward:
///
/// ```text
/// Pending ──▶ Approved ──▶ Assigned ──▶ Delivered
///    └──────▶ Rejected
/// ```
///
/// `Rejected` and `Delivered` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Assigned,
    Delivered,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Assigned => "Assigned",
            RequestStatus::Delivered => "Delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(RequestStatus::Pending),
            "Approved" => Some(RequestStatus::Approved),
            "Rejected" => Some(RequestStatus::Rejected),
            "Assigned" => Some(RequestStatus::Assigned),
            "Delivered" => Some(RequestStatus::Delivered),
            _ => None,
        }
    }

    /// The transition table. Everything not listed here is rejected.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Assigned) | (Assigned, Delivered)
        )
    }
}

/// The admin's call on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Approve,
    Reject,
}

impl RequestDecision {
    /// Parses the `action` form field; anything else is a boundary error.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(RequestDecision::Approve),
            "reject" => Some(RequestDecision::Reject),
            _ => None,
        }
    }

    pub fn target_status(&self) -> RequestStatus {
        match self {
            RequestDecision::Approve => RequestStatus::Approved,
            RequestDecision::Reject => RequestStatus::Rejected,
        }
    }

    /// The verified flag flips to true exactly on approval.
    pub fn verified_flag(&self) -> bool {
        matches!(self, RequestDecision::Approve)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub proof_file: Option<String>,
    pub request_date: DateTime<Utc>,
    pub status: RequestStatus,
    pub verified: bool,
}
