use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::donors::Entity as DonorEntity;
use crate::modules::delivery::adapter::outgoing::sea_orm_entity::volunteers::Entity as VolunteerEntity;
use crate::modules::workflow::application::domain::request::RequestStatus;
use crate::modules::workflow::application::ports::outgoing::dashboard_query::{
    AdminDashboardQuery, DashboardQueryError, DonorRow, RequestOverviewRow, UserRow, VolunteerRow,
};

#[derive(Clone, Debug)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct RequestOverviewModel {
    req_id: Uuid,
    requester: Option<String>,
    food_name: Option<String>,
    donor_name: Option<String>,
    status: String,
    verified: bool,
    request_date: sea_orm::prelude::DateTimeWithTimeZone,
    proof_file: Option<String>,
}

#[async_trait]
impl AdminDashboardQuery for DashboardQueryPostgres {
    async fn list_requests(&self) -> Result<Vec<RequestOverviewRow>, DashboardQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id AS req_id,
                u.name AS requester,
                f.food_name AS food_name,
                d.name AS donor_name,
                r.status,
                r.verified,
                r.request_date,
                r.proof_file
            FROM requests r
            LEFT JOIN users u ON u.id = r.user_id
            LEFT JOIN food_items f ON f.id = r.food_id
            LEFT JOIN donors d ON d.id = f.donor_id
            ORDER BY r.request_date DESC
            "#,
            [],
        );

        let rows = RequestOverviewModel::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let status = RequestStatus::parse(&row.status).ok_or_else(|| {
                    DashboardQueryError::DatabaseError(format!(
                        "Unknown request status: {}",
                        row.status
                    ))
                })?;

                Ok(RequestOverviewRow {
                    req_id: row.req_id,
                    requester: row.requester,
                    food_name: row.food_name,
                    donor_name: row.donor_name,
                    status,
                    verified: row.verified,
                    request_date: row.request_date.with_timezone(&chrono::Utc),
                    proof_file: row.proof_file,
                })
            })
            .collect()
    }

    async fn list_volunteers(&self) -> Result<Vec<VolunteerRow>, DashboardQueryError> {
        let volunteers = VolunteerEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?;

        Ok(volunteers
            .into_iter()
            .map(|model| VolunteerRow {
                id: model.id,
                name: model.name,
                contact_number: model.contact_number,
                ngo_id: model.ngo_id,
            })
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<UserRow>, DashboardQueryError> {
        let users = UserEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?;

        Ok(users
            .into_iter()
            .map(|model| UserRow {
                id: model.id,
                user_type: model.user_type,
                name: model.name,
                contact_number: model.contact_number,
                email: model.email,
                username: model.username,
            })
            .collect())
    }

    async fn list_donors(&self) -> Result<Vec<DonorRow>, DashboardQueryError> {
        let donors = DonorEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?;

        Ok(donors
            .into_iter()
            .map(|model| DonorRow {
                id: model.id,
                name: model.name,
                contact_number: model.contact_number,
                address: model.address,
            })
            .collect())
    }
}
