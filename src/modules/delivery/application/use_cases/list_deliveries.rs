use crate::modules::delivery::application::ports::outgoing::delivery_query::{
    DeliveryBoardRow, DeliveryQuery, DeliveryQueryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListDeliveriesError {
    QueryError(String),
}

#[async_trait]
pub trait IListDeliveriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DeliveryBoardRow>, ListDeliveriesError>;
}

pub struct ListDeliveriesUseCase<Q>
where
    Q: DeliveryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListDeliveriesUseCase<Q>
where
    Q: DeliveryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListDeliveriesUseCase for ListDeliveriesUseCase<Q>
where
    Q: DeliveryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<DeliveryBoardRow>, ListDeliveriesError> {
        self.query
            .list_deliveries()
            .await
            .map_err(|DeliveryQueryError::DatabaseError(e)| ListDeliveriesError::QueryError(e))
    }
}
