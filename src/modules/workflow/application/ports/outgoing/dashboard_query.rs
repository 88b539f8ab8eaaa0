use crate::modules::workflow::application::domain::request::RequestStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One request row on the admin dashboard. The joined names are optional
/// because the joins are outer: a dangling reference still renders.
#[derive(Debug, Clone)]
pub struct RequestOverviewRow {
    pub req_id: Uuid,
    pub requester: Option<String>,
    pub food_name: Option<String>,
    pub donor_name: Option<String>,
    pub status: RequestStatus,
    pub verified: bool,
    pub request_date: DateTime<Utc>,
    pub proof_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VolunteerRow {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub ngo_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub user_type: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct DonorRow {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub address: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only joins behind the admin dashboard. No business rules live here.
#[async_trait]
pub trait AdminDashboardQuery: Send + Sync {
    async fn list_requests(&self) -> Result<Vec<RequestOverviewRow>, DashboardQueryError>;
    async fn list_volunteers(&self) -> Result<Vec<VolunteerRow>, DashboardQueryError>;
    async fn list_users(&self) -> Result<Vec<UserRow>, DashboardQueryError>;
    async fn list_donors(&self) -> Result<Vec<DonorRow>, DashboardQueryError>;
}
