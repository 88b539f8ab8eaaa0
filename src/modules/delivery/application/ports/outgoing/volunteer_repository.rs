use crate::modules::delivery::application::domain::entities::Volunteer;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct NewVolunteer {
    pub name: String,
    pub contact_number: String,
    pub ngo_id: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VolunteerRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    async fn insert(&self, new: NewVolunteer) -> Result<Volunteer, VolunteerRepositoryError>;
}
