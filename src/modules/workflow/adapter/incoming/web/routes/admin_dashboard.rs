use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RequestOverviewView {
    pub req_id: String,
    pub requester: Option<String>,
    pub food_name: Option<String>,
    pub donor_name: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
    pub verified: bool,
    pub request_date: DateTime<Utc>,
    pub proof_file: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VolunteerView {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub ngo_id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserView {
    pub id: String,
    pub user_type: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub username: String,
}

#[derive(Serialize, ToSchema)]
pub struct DonorView {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub address: String,
}

#[derive(Serialize, ToSchema)]
pub struct AdminDashboardResponse {
    pub requests: Vec<RequestOverviewView>,
    pub volunteers: Vec<VolunteerView>,
    pub users: Vec<UserView>,
    pub donors: Vec<DonorView>,
}

/// Admin dashboard
///
/// Every request (newest first, with requester/food/donor names) plus the
/// volunteer, user, and donor listings.
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "workflow",
    responses(
        (status = 200, description = "Aggregate view", body = inline(SuccessResponse<AdminDashboardResponse>)),
        (status = 303, description = "No admin session; redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/admin/dashboard")]
pub async fn admin_dashboard_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin_overview_use_case.execute().await {
        Ok(overview) => ApiResponse::success(AdminDashboardResponse {
            requests: overview
                .requests
                .into_iter()
                .map(|row| RequestOverviewView {
                    req_id: row.req_id.to_string(),
                    requester: row.requester,
                    food_name: row.food_name,
                    donor_name: row.donor_name,
                    status: row.status.as_str().to_string(),
                    verified: row.verified,
                    request_date: row.request_date,
                    proof_file: row.proof_file,
                })
                .collect(),
            volunteers: overview
                .volunteers
                .into_iter()
                .map(|row| VolunteerView {
                    id: row.id.to_string(),
                    name: row.name,
                    contact_number: row.contact_number,
                    ngo_id: row.ngo_id,
                })
                .collect(),
            users: overview
                .users
                .into_iter()
                .map(|row| UserView {
                    id: row.id.to_string(),
                    user_type: row.user_type,
                    name: row.name,
                    contact_number: row.contact_number,
                    email: row.email,
                    username: row.username,
                })
                .collect(),
            donors: overview
                .donors
                .into_iter()
                .map(|row| DonorView {
                    id: row.id.to_string(),
                    name: row.name,
                    contact_number: row.contact_number,
                    address: row.address,
                })
                .collect(),
        }),
        Err(e) => {
            error!(error = ?e, "Admin overview failed");
            ApiResponse::internal_error()
        }
    }
}
