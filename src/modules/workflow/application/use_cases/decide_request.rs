use crate::modules::workflow::application::domain::request::{
    Request, RequestDecision, RequestStatus,
};
use crate::modules::workflow::application::ports::outgoing::request_repository::{
    DecideError, RequestRepository,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum DecideRequestError {
    RequestNotFound,
    /// Approve/reject applies to `Pending` requests only.
    InvalidTransition { current: RequestStatus },
    RepositoryError(String),
}

#[async_trait]
pub trait IDecideRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        req_id: Uuid,
        decision: RequestDecision,
    ) -> Result<Request, DecideRequestError>;
}

pub struct DecideRequestUseCase<R>
where
    R: RequestRepository + Send + Sync,
{
    requests: R,
}

impl<R> DecideRequestUseCase<R>
where
    R: RequestRepository + Send + Sync,
{
    pub fn new(requests: R) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl<R> IDecideRequestUseCase for DecideRequestUseCase<R>
where
    R: RequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        req_id: Uuid,
        decision: RequestDecision,
    ) -> Result<Request, DecideRequestError> {
        match self.requests.apply_decision(req_id, decision).await {
            Ok(request) => Ok(request),
            Err(DecideError::NotFound) => Err(DecideRequestError::RequestNotFound),
            Err(DecideError::NotPending { current }) => {
                Err(DecideRequestError::InvalidTransition { current })
            }
            Err(DecideError::Database(e)) => Err(DecideRequestError::RepositoryError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workflow::application::ports::outgoing::request_repository::{
        NewRequest, RequestRepositoryError,
    };
    use chrono::Utc;
    use std::sync::Mutex;

    /// Single-request store that applies the real transition table.
    struct FakeRequestRepository {
        request: Mutex<Request>,
    }

    impl FakeRequestRepository {
        fn with_status(status: RequestStatus) -> Self {
            Self {
                request: Mutex::new(Request {
                    id: Uuid::new_v4(),
                    user_id: Uuid::new_v4(),
                    food_id: Uuid::new_v4(),
                    proof_file: None,
                    request_date: Utc::now(),
                    status,
                    verified: false,
                }),
            }
        }

        fn id(&self) -> Uuid {
            self.request.lock().unwrap().id
        }
    }

    #[async_trait]
    impl RequestRepository for FakeRequestRepository {
        async fn insert(&self, _new: NewRequest) -> Result<Request, RequestRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            req_id: Uuid,
        ) -> Result<Option<Request>, RequestRepositoryError> {
            let request = self.request.lock().unwrap();
            Ok((request.id == req_id).then(|| request.clone()))
        }

        async fn apply_decision(
            &self,
            req_id: Uuid,
            decision: RequestDecision,
        ) -> Result<Request, DecideError> {
            let mut request = self.request.lock().unwrap();
            if request.id != req_id {
                return Err(DecideError::NotFound);
            }
            if request.status != RequestStatus::Pending {
                return Err(DecideError::NotPending {
                    current: request.status,
                });
            }
            request.status = decision.target_status();
            request.verified = decision.verified_flag();
            Ok(request.clone())
        }
    }

    #[tokio::test]
    async fn test_approving_pending_request_sets_verified() {
        // Arrange
        let repo = FakeRequestRepository::with_status(RequestStatus::Pending);
        let req_id = repo.id();
        let use_case = DecideRequestUseCase::new(repo);

        // Act
        let request = use_case
            .execute(req_id, RequestDecision::Approve)
            .await
            .unwrap();

        // Assert
        assert_eq!(request.status, RequestStatus::Approved);
        assert!(request.verified);
    }

    #[tokio::test]
    async fn test_rejecting_pending_request_leaves_verified_false() {
        // Arrange
        let repo = FakeRequestRepository::with_status(RequestStatus::Pending);
        let req_id = repo.id();
        let use_case = DecideRequestUseCase::new(repo);

        // Act
        let request = use_case
            .execute(req_id, RequestDecision::Reject)
            .await
            .unwrap();

        // Assert
        assert_eq!(request.status, RequestStatus::Rejected);
        assert!(!request.verified);
    }

    #[tokio::test]
    async fn test_deciding_an_already_approved_request_fails() {
        // Arrange
        let repo = FakeRequestRepository::with_status(RequestStatus::Approved);
        let req_id = repo.id();
        let use_case = DecideRequestUseCase::new(repo);

        // Act
        let result = use_case.execute(req_id, RequestDecision::Approve).await;

        // Assert
        assert!(matches!(
            result,
            Err(DecideRequestError::InvalidTransition {
                current: RequestStatus::Approved
            })
        ));
    }

    #[tokio::test]
    async fn test_unknown_request_id() {
        // Arrange
        let repo = FakeRequestRepository::with_status(RequestStatus::Pending);
        let use_case = DecideRequestUseCase::new(repo);

        // Act
        let result = use_case
            .execute(Uuid::new_v4(), RequestDecision::Approve)
            .await;

        // Assert
        assert!(matches!(result, Err(DecideRequestError::RequestNotFound)));
    }
}
