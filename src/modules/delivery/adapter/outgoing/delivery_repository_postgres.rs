use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::delivery::application::domain::entities::{Delivery, DeliveryStatus};
use crate::modules::delivery::application::ports::outgoing::delivery_repository::{
    DeliveryRepository, UpdateDeliveryError,
};

use super::sea_orm_entity::deliveries::{Entity as DeliveryEntity, Model as DeliveryModel};

#[derive(Clone)]
pub struct DeliveryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DeliveryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_delivery(model: DeliveryModel) -> Result<Delivery, UpdateDeliveryError> {
        let status = model.status.parse::<DeliveryStatus>().map_err(|_| {
            UpdateDeliveryError::Database(format!("Unknown delivery status: {}", model.status))
        })?;

        Ok(Delivery {
            id: model.id,
            request_id: model.request_id,
            volunteer_id: model.volunteer_id,
            status,
            pickup_time: model.pickup_time.with_timezone(&chrono::Utc),
            delivery_time: model.delivery_time.map(|t| t.with_timezone(&chrono::Utc)),
        })
    }

    /// After a guarded update matched nothing: missing row or already
    /// delivered?
    async fn explain_miss(&self, delivery_id: Uuid) -> UpdateDeliveryError {
        match DeliveryEntity::find_by_id(delivery_id).one(&*self.db).await {
            Ok(Some(_)) => UpdateDeliveryError::InvalidTransition,
            Ok(None) => UpdateDeliveryError::NotFound,
            Err(e) => UpdateDeliveryError::Database(e.to_string()),
        }
    }
}

#[async_trait]
impl DeliveryRepository for DeliveryRepositoryPostgres {
    async fn set_status(
        &self,
        delivery_id: Uuid,
        status: DeliveryStatus,
    ) -> Result<Delivery, UpdateDeliveryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE deliveries SET status = $2
            WHERE id = $1 AND status <> 'Delivered'
            RETURNING id, request_id, volunteer_id, status, pickup_time, delivery_time
            "#,
            [delivery_id.into(), status.as_str().into()],
        );

        let updated = DeliveryModel::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(|e| UpdateDeliveryError::Database(e.to_string()))?;

        match updated {
            Some(model) => Self::map_to_delivery(model),
            None => Err(self.explain_miss(delivery_id).await),
        }
    }

    async fn mark_delivered(
        &self,
        delivery_id: Uuid,
        delivered_at: DateTime<Utc>,
    ) -> Result<Delivery, UpdateDeliveryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UpdateDeliveryError::Database(e.to_string()))?;

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE deliveries SET status = 'Delivered', delivery_time = $2
            WHERE id = $1 AND status <> 'Delivered'
            RETURNING id, request_id, volunteer_id, status, pickup_time, delivery_time
            "#,
            [delivery_id.into(), delivered_at.into()],
        );

        let updated = match DeliveryModel::find_by_statement(stmt).one(&txn).await {
            Ok(updated) => updated,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(UpdateDeliveryError::Database(e.to_string()));
            }
        };

        let model = match updated {
            Some(model) => model,
            None => {
                let _ = txn.rollback().await;
                return Err(self.explain_miss(delivery_id).await);
            }
        };

        // Cascade: the fulfilled request is Delivered too.
        let cascade = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE requests SET status = 'Delivered'
            WHERE id = $1 AND status = 'Assigned'
            "#,
            [model.request_id.into()],
        );

        match txn.execute(cascade).await {
            Ok(result) if result.rows_affected() == 1 => {}
            Ok(_) => {
                let _ = txn.rollback().await;
                return Err(UpdateDeliveryError::Database(
                    "Fulfilled request was not in Assigned state".to_string(),
                ));
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(UpdateDeliveryError::Database(e.to_string()));
            }
        }

        txn.commit()
            .await
            .map_err(|e| UpdateDeliveryError::Database(e.to_string()))?;

        Self::map_to_delivery(model)
    }
}
