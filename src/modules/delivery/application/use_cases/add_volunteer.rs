use crate::modules::delivery::application::domain::entities::Volunteer;
use crate::modules::delivery::application::ports::outgoing::volunteer_repository::{
    NewVolunteer, VolunteerRepository, VolunteerRepositoryError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Debug, Clone)]
pub enum AddVolunteerError {
    RepositoryError(String),
}

#[async_trait]
pub trait IAddVolunteerUseCase: Send + Sync {
    async fn execute(&self, new: NewVolunteer) -> Result<Volunteer, AddVolunteerError>;
}

/// Plain insert; volunteers carry no state machine.
pub struct AddVolunteerUseCase<R>
where
    R: VolunteerRepository + Send + Sync,
{
    volunteers: R,
}

impl<R> AddVolunteerUseCase<R>
where
    R: VolunteerRepository + Send + Sync,
{
    pub fn new(volunteers: R) -> Self {
        Self { volunteers }
    }
}

#[async_trait]
impl<R> IAddVolunteerUseCase for AddVolunteerUseCase<R>
where
    R: VolunteerRepository + Send + Sync,
{
    async fn execute(&self, new: NewVolunteer) -> Result<Volunteer, AddVolunteerError> {
        let volunteer = self
            .volunteers
            .insert(new)
            .await
            .map_err(|VolunteerRepositoryError::DatabaseError(e)| {
                AddVolunteerError::RepositoryError(e)
            })?;

        info!(volunteer_id = %volunteer.id, "Volunteer added");
        Ok(volunteer)
    }
}
