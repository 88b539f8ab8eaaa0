use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::food::FoodStatus;
use crate::modules::workflow::application::domain::request::RequestStatus;
use crate::modules::workflow::application::ports::outgoing::assignment::{
    Assignment, AssignmentError, AssignmentRepository,
};

#[derive(Clone)]
pub struct AssignmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

/// What the probe learns about the request before anything is written.
struct ProbeResult {
    request_status: String,
    food_id: Uuid,
    food_status: String,
    has_delivery: bool,
    volunteer_ok: bool,
}

impl AssignmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Deterministic probe, evaluated inside the transaction:
    /// - the request's and its food item's current status
    /// - whether a delivery row already exists for the request
    /// - whether the chosen volunteer exists
    fn probe_stmt(req_id: Uuid, volunteer_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              r.status AS request_status,
              r.food_id AS food_id,
              f.status AS food_status,
              EXISTS (
                SELECT 1 FROM deliveries d WHERE d.request_id = r.id
              ) AS has_delivery,
              EXISTS (
                SELECT 1 FROM volunteers v WHERE v.id = $2
              ) AS volunteer_ok
            FROM requests r
            JOIN food_items f ON f.id = r.food_id
            WHERE r.id = $1
            "#,
            [req_id.into(), volunteer_id.into()],
        )
    }

    fn insert_delivery_stmt(
        delivery_id: Uuid,
        req_id: Uuid,
        volunteer_id: Uuid,
        pickup_time: DateTime<Utc>,
    ) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO deliveries (id, request_id, volunteer_id, status, pickup_time)
            VALUES ($1, $2, $3, 'Picked', $4)
            "#,
            [
                delivery_id.into(),
                req_id.into(),
                volunteer_id.into(),
                pickup_time.into(),
            ],
        )
    }

    /// Still guarded on status: the probe ran in this transaction, but a
    /// concurrent committer may have moved the row since.
    fn advance_request_stmt(req_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE requests SET status = 'Assigned'
            WHERE id = $1 AND status = 'Approved'
            "#,
            [req_id.into()],
        )
    }

    fn claim_food_stmt(food_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE food_items SET status = 'Assigned'
            WHERE id = $1 AND status = 'Available'
            "#,
            [food_id.into()],
        )
    }

    async fn probe(
        txn: &DatabaseTransaction,
        req_id: Uuid,
        volunteer_id: Uuid,
    ) -> Result<Option<ProbeResult>, DbErr> {
        let row = match txn.query_one(Self::probe_stmt(req_id, volunteer_id)).await? {
            Some(row) => row,
            None => return Ok(None),
        };

        Ok(Some(ProbeResult {
            request_status: row.try_get("", "request_status")?,
            food_id: row.try_get("", "food_id")?,
            food_status: row.try_get("", "food_status")?,
            has_delivery: row.try_get("", "has_delivery")?,
            volunteer_ok: row.try_get("", "volunteer_ok")?,
        }))
    }

    fn map_db_err(e: DbErr) -> AssignmentError {
        AssignmentError::Database(e.to_string())
    }
}

#[async_trait]
impl AssignmentRepository for AssignmentRepositoryPostgres {
    async fn assign(
        &self,
        req_id: Uuid,
        volunteer_id: Uuid,
        pickup_time: DateTime<Utc>,
    ) -> Result<Assignment, AssignmentError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let probe = match Self::probe(&txn, req_id, volunteer_id).await {
            Ok(Some(probe)) => probe,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(AssignmentError::RequestNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if !probe.volunteer_ok {
            let _ = txn.rollback().await;
            return Err(AssignmentError::VolunteerNotFound);
        }

        if probe.has_delivery {
            let _ = txn.rollback().await;
            return Err(AssignmentError::AlreadyAssigned);
        }

        let current = match RequestStatus::parse(&probe.request_status) {
            Some(status) => status,
            None => {
                let _ = txn.rollback().await;
                return Err(AssignmentError::Database(format!(
                    "Unknown request status: {}",
                    probe.request_status
                )));
            }
        };

        if !current.can_transition_to(RequestStatus::Assigned) {
            let _ = txn.rollback().await;
            return Err(AssignmentError::RequestNotApproved { current });
        }

        if probe.food_status != FoodStatus::Available.as_str() {
            let _ = txn.rollback().await;
            return Err(AssignmentError::FoodUnavailable);
        }

        let delivery_id = Uuid::new_v4();
        let steps = [
            Self::insert_delivery_stmt(delivery_id, req_id, volunteer_id, pickup_time),
            Self::advance_request_stmt(req_id),
            Self::claim_food_stmt(probe.food_id),
        ];

        for stmt in steps {
            match txn.execute(stmt).await {
                Ok(result) if result.rows_affected() == 1 => {}
                Ok(_) => {
                    let _ = txn.rollback().await;
                    return Err(AssignmentError::Database(
                        "Request or food item changed during assignment".to_string(),
                    ));
                }
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(Self::map_db_err(e));
                }
            }
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(Assignment {
            delivery_id,
            request_id: req_id,
            volunteer_id,
            pickup_time,
        })
    }
}
