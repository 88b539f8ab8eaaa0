use crate::modules::delivery::application::domain::entities::{Delivery, DeliveryStatus};
use crate::modules::delivery::application::ports::outgoing::delivery_repository::{
    DeliveryRepository, UpdateDeliveryError,
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait IUpdateDeliveryUseCase: Send + Sync {
    async fn execute(
        &self,
        delivery_id: Uuid,
        status: DeliveryStatus,
    ) -> Result<Delivery, UpdateDeliveryError>;
}

pub struct UpdateDeliveryUseCase<R>
where
    R: DeliveryRepository + Send + Sync,
{
    deliveries: R,
}

impl<R> UpdateDeliveryUseCase<R>
where
    R: DeliveryRepository + Send + Sync,
{
    pub fn new(deliveries: R) -> Self {
        Self { deliveries }
    }
}

#[async_trait]
impl<R> IUpdateDeliveryUseCase for UpdateDeliveryUseCase<R>
where
    R: DeliveryRepository + Send + Sync,
{
    async fn execute(
        &self,
        delivery_id: Uuid,
        status: DeliveryStatus,
    ) -> Result<Delivery, UpdateDeliveryError> {
        let delivery = if status.is_terminal() {
            // Delivered cascades to the request inside one transaction.
            self.deliveries
                .mark_delivered(delivery_id, chrono::Utc::now())
                .await?
        } else {
            self.deliveries.set_status(delivery_id, status).await?
        };

        info!(
            delivery_id = %delivery.id,
            status = delivery.status.as_str(),
            "Delivery status updated"
        );

        Ok(delivery)
    }
}
