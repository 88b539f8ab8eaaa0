use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One row of the volunteer dashboard: the delivery plus the request it
/// fulfills and who asked for it.
#[derive(Debug, Clone)]
pub struct DeliveryBoardRow {
    pub delivery_id: Uuid,
    pub status: String,
    pub pickup_time: DateTime<Utc>,
    pub delivery_time: Option<DateTime<Utc>>,
    pub request_id: Uuid,
    pub request_status: Option<String>,
    pub proof_file: Option<String>,
    pub requester_name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeliveryQuery: Send + Sync {
    /// All deliveries, newest pickup first.
    async fn list_deliveries(&self) -> Result<Vec<DeliveryBoardRow>, DeliveryQueryError>;
}
