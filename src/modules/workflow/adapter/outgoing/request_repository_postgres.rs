use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Set,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::workflow::application::domain::request::{
    Request, RequestDecision, RequestStatus,
};
use crate::modules::workflow::application::ports::outgoing::request_repository::{
    DecideError, NewRequest, RequestRepository, RequestRepositoryError,
};

use super::sea_orm_entity::requests::{
    ActiveModel as RequestActiveModel, Entity as RequestEntity, Model as RequestModel,
};

#[derive(Clone, Debug)]
pub struct RequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_request(model: RequestModel) -> Result<Request, String> {
        let status = RequestStatus::parse(&model.status)
            .ok_or_else(|| format!("Unknown request status: {}", model.status))?;

        Ok(Request {
            id: model.id,
            user_id: model.user_id,
            food_id: model.food_id,
            proof_file: model.proof_file,
            request_date: model.request_date.with_timezone(&chrono::Utc),
            status,
            verified: model.verified,
        })
    }
}

#[async_trait]
impl RequestRepository for RequestRepositoryPostgres {
    async fn insert(&self, new: NewRequest) -> Result<Request, RequestRepositoryError> {
        let active = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            food_id: Set(new.food_id),
            proof_file: Set(new.proof_file),
            request_date: Set(new.request_date.into()),
            status: Set(RequestStatus::Pending.as_str().to_string()),
            verified: Set(false),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| RequestRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_request(inserted).map_err(RequestRepositoryError::DatabaseError)
    }

    async fn find_by_id(&self, req_id: Uuid) -> Result<Option<Request>, RequestRepositoryError> {
        let model = RequestEntity::find_by_id(req_id)
            .one(&*self.db)
            .await
            .map_err(|e| RequestRepositoryError::DatabaseError(e.to_string()))?;

        model
            .map(Self::map_to_request)
            .transpose()
            .map_err(RequestRepositoryError::DatabaseError)
    }

    async fn apply_decision(
        &self,
        req_id: Uuid,
        decision: RequestDecision,
    ) -> Result<Request, DecideError> {
        // Guarded update: only a still-Pending row is touched, so two admins
        // deciding at once cannot both win.
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE requests
            SET status = $2, verified = $3
            WHERE id = $1 AND status = 'Pending'
            RETURNING id, user_id, food_id, proof_file, request_date, status, verified
            "#,
            [
                req_id.into(),
                decision.target_status().as_str().into(),
                decision.verified_flag().into(),
            ],
        );

        let updated = RequestModel::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(|e| DecideError::Database(e.to_string()))?;

        if let Some(model) = updated {
            return Self::map_to_request(model).map_err(DecideError::Database);
        }

        // Nothing matched: distinguish a missing row from a stale one.
        match self.find_by_id(req_id).await {
            Ok(Some(request)) => Err(DecideError::NotPending {
                current: request.status,
            }),
            Ok(None) => Err(DecideError::NotFound),
            Err(RequestRepositoryError::DatabaseError(e)) => Err(DecideError::Database(e)),
        }
    }
}
