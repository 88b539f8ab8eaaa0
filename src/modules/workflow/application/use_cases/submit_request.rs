use crate::modules::catalog::application::ports::outgoing::food_query::FoodQuery;
use crate::modules::proof::application::ports::outgoing::proof_store::ProofStore;
use crate::modules::workflow::application::domain::request::Request;
use crate::modules::workflow::application::ports::outgoing::request_repository::{
    NewRequest, RequestRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SubmitRequestError {
    FoodNotFound,
    ProofStorageFailed(String),
    QueryError(String),
    RepositoryError(String),
}

/// An uploaded proof-of-need document, still in memory.
#[derive(Debug, Clone)]
pub struct ProofUpload {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SubmitRequestInput {
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub proof: Option<ProofUpload>,
}

#[async_trait]
pub trait ISubmitRequestUseCase: Send + Sync {
    async fn execute(&self, input: SubmitRequestInput) -> Result<Request, SubmitRequestError>;
}

pub struct SubmitRequestUseCase<F, R>
where
    F: FoodQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    food: F,
    requests: R,
    proofs: Arc<dyn ProofStore>,
}

impl<F, R> SubmitRequestUseCase<F, R>
where
    F: FoodQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    pub fn new(food: F, requests: R, proofs: Arc<dyn ProofStore>) -> Self {
        Self {
            food,
            requests,
            proofs,
        }
    }
}

#[async_trait]
impl<F, R> ISubmitRequestUseCase for SubmitRequestUseCase<F, R>
where
    F: FoodQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    async fn execute(&self, input: SubmitRequestInput) -> Result<Request, SubmitRequestError> {
        // Existence is checked; availability is not. Any number of users may
        // hold a Pending request on one item, and the assignment guards pick
        // the winner.
        self.food
            .find_by_id(input.food_id)
            .await
            .map_err(|e| SubmitRequestError::QueryError(e.to_string()))?
            .ok_or(SubmitRequestError::FoodNotFound)?;

        let proof_file = match input.proof {
            Some(upload) => Some(
                self.proofs
                    .save(&upload.original_name, &upload.bytes)
                    .await
                    .map_err(|e| SubmitRequestError::ProofStorageFailed(e.to_string()))?,
            ),
            None => None,
        };

        self.requests
            .insert(NewRequest {
                user_id: input.user_id,
                food_id: input.food_id,
                proof_file,
                request_date: chrono::Utc::now(),
            })
            .await
            .map_err(|e| SubmitRequestError::RepositoryError(e.to_string()))
    }
}
