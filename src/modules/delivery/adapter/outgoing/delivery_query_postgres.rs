use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::delivery::application::ports::outgoing::delivery_query::{
    DeliveryBoardRow, DeliveryQuery, DeliveryQueryError,
};

#[derive(Clone, Debug)]
pub struct DeliveryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DeliveryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct DeliveryBoardModel {
    delivery_id: Uuid,
    status: String,
    pickup_time: sea_orm::prelude::DateTimeWithTimeZone,
    delivery_time: Option<sea_orm::prelude::DateTimeWithTimeZone>,
    request_id: Uuid,
    request_status: Option<String>,
    proof_file: Option<String>,
    requester_name: Option<String>,
}

#[async_trait]
impl DeliveryQuery for DeliveryQueryPostgres {
    async fn list_deliveries(&self) -> Result<Vec<DeliveryBoardRow>, DeliveryQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                del.id AS delivery_id,
                del.status,
                del.pickup_time,
                del.delivery_time,
                del.request_id,
                r.status AS request_status,
                r.proof_file,
                u.name AS requester_name
            FROM deliveries del
            LEFT JOIN requests r ON r.id = del.request_id
            LEFT JOIN users u ON u.id = r.user_id
            ORDER BY del.pickup_time DESC
            "#,
            [],
        );

        let rows = DeliveryBoardModel::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| DeliveryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| DeliveryBoardRow {
                delivery_id: row.delivery_id,
                status: row.status,
                pickup_time: row.pickup_time.with_timezone(&chrono::Utc),
                delivery_time: row.delivery_time.map(|t| t.with_timezone(&chrono::Utc)),
                request_id: row.request_id,
                request_status: row.request_status,
                proof_file: row.proof_file,
                requester_name: row.requester_name,
            })
            .collect())
    }
}
