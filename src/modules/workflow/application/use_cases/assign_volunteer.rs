use crate::modules::workflow::application::ports::outgoing::assignment::{
    Assignment, AssignmentError, AssignmentRepository,
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait IAssignVolunteerUseCase: Send + Sync {
    async fn execute(
        &self,
        req_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Assignment, AssignmentError>;
}

/// Thin over the transactional port on purpose: the guards live inside the
/// transaction, where they hold under concurrent admins.
pub struct AssignVolunteerUseCase<A>
where
    A: AssignmentRepository + Send + Sync,
{
    assignments: A,
}

impl<A> AssignVolunteerUseCase<A>
where
    A: AssignmentRepository + Send + Sync,
{
    pub fn new(assignments: A) -> Self {
        Self { assignments }
    }
}

#[async_trait]
impl<A> IAssignVolunteerUseCase for AssignVolunteerUseCase<A>
where
    A: AssignmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        req_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Assignment, AssignmentError> {
        let assignment = self
            .assignments
            .assign(req_id, volunteer_id, chrono::Utc::now())
            .await?;

        info!(
            request_id = %assignment.request_id,
            volunteer_id = %assignment.volunteer_id,
            delivery_id = %assignment.delivery_id,
            "Volunteer assigned, delivery created"
        );

        Ok(assignment)
    }
}
