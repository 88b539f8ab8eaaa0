use crate::modules::feedback::application::domain::entities::Feedback;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub user_id: Uuid,
    pub donor_id: Uuid,
    pub rating: i16,
    pub comments: String,
    pub submitted_on: NaiveDate,
}

#[derive(Debug, Clone)]
pub enum FeedbackRepositoryError {
    /// The donor reference does not exist.
    DonorNotFound,
    DatabaseError(String),
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn insert(&self, new: NewFeedback) -> Result<Feedback, FeedbackRepositoryError>;
}
