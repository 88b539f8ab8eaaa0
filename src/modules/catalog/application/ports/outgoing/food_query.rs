use crate::modules::catalog::application::domain::food::FoodItem;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One row of the user dashboard: an available item plus its donor, when
/// the donor row still exists.
#[derive(Debug, Clone)]
pub struct AvailableFoodRow {
    pub food_id: Uuid,
    pub food_name: String,
    pub quantity: String,
    pub posted_at: DateTime<Utc>,
    pub donor_name: Option<String>,
    pub donor_address: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FoodQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FoodQuery: Send + Sync {
    /// Available items with donor info, newest first.
    async fn list_available(&self) -> Result<Vec<AvailableFoodRow>, FoodQueryError>;

    async fn find_by_id(&self, food_id: Uuid) -> Result<Option<FoodItem>, FoodQueryError>;
}
