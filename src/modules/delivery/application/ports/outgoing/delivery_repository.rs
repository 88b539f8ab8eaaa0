use crate::modules::delivery::application::domain::entities::{Delivery, DeliveryStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum UpdateDeliveryError {
    NotFound,
    /// The delivery is already Delivered; nothing moves backwards.
    InvalidTransition,
    Database(String),
}

#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Set a non-terminal status (Picked/InTransit) on a live delivery.
    async fn set_status(
        &self,
        delivery_id: Uuid,
        status: DeliveryStatus,
    ) -> Result<Delivery, UpdateDeliveryError>;

    /// Terminal transition, in one transaction: stamp the delivery time,
    /// set the delivery Delivered, and cascade the request to Delivered.
    async fn mark_delivered(
        &self,
        delivery_id: Uuid,
        delivered_at: DateTime<Utc>,
    ) -> Result<Delivery, UpdateDeliveryError>;
}
