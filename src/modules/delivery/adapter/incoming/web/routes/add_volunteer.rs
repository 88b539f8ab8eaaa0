use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::delivery::application::ports::outgoing::volunteer_repository::NewVolunteer;
use crate::modules::delivery::application::use_cases::add_volunteer::AddVolunteerError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AddVolunteerForm {
    pub name: String,
    pub contact: String,
    pub ngoid: Option<String>,
}

/// Add a delivery volunteer
#[utoipa::path(
    post,
    path = "/admin/add_volunteer",
    tag = "delivery",
    request_body(content = AddVolunteerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Volunteer added; redirect to /admin/dashboard"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/add_volunteer")]
pub async fn add_volunteer_handler(
    session: AdminSession,
    form: web::Form<AddVolunteerForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    info!(admin_id = %session.admin_id, name = %form.name, "Adding volunteer");

    let result = data
        .add_volunteer_use_case
        .execute(NewVolunteer {
            name: form.name,
            contact_number: form.contact,
            ngo_id: form.ngoid,
        })
        .await;

    match result {
        Ok(_) => ApiResponse::see_other("/admin/dashboard"),
        Err(AddVolunteerError::RepositoryError(ref e)) => {
            error!(error = %e, "Volunteer insert failed");
            ApiResponse::internal_error()
        }
    }
}
