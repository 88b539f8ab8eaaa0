use crate::modules::workflow::application::domain::request::RequestStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The delivery record born from a successful assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub delivery_id: Uuid,
    pub request_id: Uuid,
    pub volunteer_id: Uuid,
    pub pickup_time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum AssignmentError {
    RequestNotFound,
    VolunteerNotFound,
    /// A delivery row already exists for this request.
    AlreadyAssigned,
    /// Only `Approved` requests may be assigned.
    RequestNotApproved { current: RequestStatus },
    /// The linked food item is no longer `Available`.
    FoodUnavailable,
    Database(String),
}

/// The one multi-table transition in the system: insert the delivery, move
/// the request to `Assigned`, and mark the food item `Assigned`, all inside
/// a single transaction that rolls back on any violated guard.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn assign(
        &self,
        req_id: Uuid,
        volunteer_id: Uuid,
        pickup_time: DateTime<Utc>,
    ) -> Result<Assignment, AssignmentError>;
}
