use crate::modules::catalog::application::ports::outgoing::food_query::{
    AvailableFoodRow, FoodQuery, FoodQueryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListAvailableFoodError {
    QueryError(String),
}

#[async_trait]
pub trait IListAvailableFoodUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AvailableFoodRow>, ListAvailableFoodError>;
}

pub struct ListAvailableFoodUseCase<Q>
where
    Q: FoodQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListAvailableFoodUseCase<Q>
where
    Q: FoodQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListAvailableFoodUseCase for ListAvailableFoodUseCase<Q>
where
    Q: FoodQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AvailableFoodRow>, ListAvailableFoodError> {
        self.query
            .list_available()
            .await
            .map_err(|FoodQueryError::DatabaseError(e)| ListAvailableFoodError::QueryError(e))
    }
}
