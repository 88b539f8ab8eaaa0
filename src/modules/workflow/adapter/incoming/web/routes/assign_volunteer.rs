use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::workflow::application::ports::outgoing::assignment::AssignmentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct AssignVolunteerForm {
    pub reqid: Uuid,
    pub volid: Uuid,
}

/// Assign a volunteer to an approved request
///
/// One transaction: creates the delivery (Picked, pickup stamped), moves the
/// request to Assigned, and claims the food item. Any violated guard rolls
/// the whole thing back.
#[utoipa::path(
    post,
    path = "/admin/assign_volunteer",
    tag = "workflow",
    request_body(content = AssignVolunteerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Delivery created; redirect to /admin/dashboard"),
        (status = 404, description = "Request or volunteer not found", body = ErrorResponse),
        (status = 409, description = "Guard violated (not approved, already assigned, item taken)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/assign_volunteer")]
pub async fn assign_volunteer_handler(
    session: AdminSession,
    form: web::Form<AssignVolunteerForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    info!(
        admin_id = %session.admin_id,
        request_id = %form.reqid,
        volunteer_id = %form.volid,
        "Volunteer assignment"
    );

    match data
        .assign_volunteer_use_case
        .execute(form.reqid, form.volid)
        .await
    {
        Ok(_assignment) => ApiResponse::see_other("/admin/dashboard"),

        Err(AssignmentError::RequestNotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "No such request")
        }

        Err(AssignmentError::VolunteerNotFound) => {
            ApiResponse::not_found("VOLUNTEER_NOT_FOUND", "No such volunteer")
        }

        Err(AssignmentError::AlreadyAssigned) => {
            warn!("Assignment refused: delivery already exists");
            ApiResponse::conflict("ALREADY_ASSIGNED", "A delivery already exists for this request")
        }

        Err(AssignmentError::RequestNotApproved { current }) => {
            warn!(current = current.as_str(), "Assignment refused: not approved");
            ApiResponse::conflict(
                "REQUEST_NOT_APPROVED",
                &format!("Request is {}, not Approved", current.as_str()),
            )
        }

        Err(AssignmentError::FoodUnavailable) => {
            warn!("Assignment refused: food item no longer available");
            ApiResponse::conflict("FOOD_UNAVAILABLE", "Food item is no longer available")
        }

        Err(AssignmentError::Database(ref e)) => {
            error!(error = %e, "Assignment transaction failed");
            ApiResponse::internal_error()
        }
    }
}
