use crate::modules::workflow::application::ports::outgoing::dashboard_query::{
    AdminDashboardQuery, DashboardQueryError, DonorRow, RequestOverviewRow, UserRow, VolunteerRow,
};
use async_trait::async_trait;

/// Everything the admin dashboard renders in one payload.
#[derive(Debug, Clone)]
pub struct AdminOverview {
    pub requests: Vec<RequestOverviewRow>,
    pub volunteers: Vec<VolunteerRow>,
    pub users: Vec<UserRow>,
    pub donors: Vec<DonorRow>,
}

#[derive(Debug, Clone)]
pub enum AdminOverviewError {
    QueryError(String),
}

#[async_trait]
pub trait IAdminOverviewUseCase: Send + Sync {
    async fn execute(&self) -> Result<AdminOverview, AdminOverviewError>;
}

pub struct AdminOverviewUseCase<Q>
where
    Q: AdminDashboardQuery + Send + Sync,
{
    query: Q,
}

impl<Q> AdminOverviewUseCase<Q>
where
    Q: AdminDashboardQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IAdminOverviewUseCase for AdminOverviewUseCase<Q>
where
    Q: AdminDashboardQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AdminOverview, AdminOverviewError> {
        let map_err = |DashboardQueryError::DatabaseError(e)| AdminOverviewError::QueryError(e);

        Ok(AdminOverview {
            requests: self.query.list_requests().await.map_err(map_err)?,
            volunteers: self.query.list_volunteers().await.map_err(map_err)?,
            users: self.query.list_users().await.map_err(map_err)?,
            donors: self.query.list_donors().await.map_err(map_err)?,
        })
    }
}
