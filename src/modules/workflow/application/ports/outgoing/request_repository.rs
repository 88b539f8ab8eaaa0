use crate::modules::workflow::application::domain::request::{
    Request, RequestDecision, RequestStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewRequest {
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub proof_file: Option<String>,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Why an approve/reject could not be applied.
#[derive(Debug, Clone)]
pub enum DecideError {
    NotFound,
    /// The request has already left `Pending`.
    NotPending { current: RequestStatus },
    Database(String),
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    async fn insert(&self, new: NewRequest) -> Result<Request, RequestRepositoryError>;

    async fn find_by_id(&self, req_id: Uuid) -> Result<Option<Request>, RequestRepositoryError>;

    /// Applies the decision to a still-pending request in one guarded
    /// statement; the food item is untouched at this step.
    async fn apply_decision(
        &self,
        req_id: Uuid,
        decision: RequestDecision,
    ) -> Result<Request, DecideError>;
}
