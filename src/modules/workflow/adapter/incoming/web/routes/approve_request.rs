use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::workflow::application::domain::request::RequestDecision;
use crate::modules::workflow::application::use_cases::decide_request::DecideRequestError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct ApproveForm {
    /// "approve" or "reject"
    #[schema(example = "approve")]
    pub action: String,
}

/// Approve or reject a pending request
///
/// Approval also flips the request's verified flag. The linked food item is
/// untouched at this step; it is claimed at assignment time.
#[utoipa::path(
    post,
    path = "/admin/approve/{req_id}",
    tag = "workflow",
    params(("req_id" = Uuid, Path, description = "Request to decide")),
    request_body(content = ApproveForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Decision applied; redirect to /admin/dashboard"),
        (status = 400, description = "Unknown action value", body = ErrorResponse),
        (status = 404, description = "No such request", body = ErrorResponse),
        (status = 409, description = "Request is no longer pending", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/approve/{req_id}")]
pub async fn approve_request_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    form: web::Form<ApproveForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req_id = path.into_inner();

    let decision = match RequestDecision::from_form_value(&form.action) {
        Some(decision) => decision,
        None => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "action must be \"approve\" or \"reject\"",
            );
        }
    };

    info!(admin_id = %session.admin_id, %req_id, ?decision, "Request decision");

    match data.decide_request_use_case.execute(req_id, decision).await {
        Ok(request) => {
            info!(request_id = %request.id, status = request.status.as_str(), "Request decided");
            ApiResponse::see_other("/admin/dashboard")
        }

        Err(DecideRequestError::RequestNotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "No such request")
        }

        Err(DecideRequestError::InvalidTransition { current }) => {
            warn!(current = current.as_str(), "Decision on a non-pending request");
            ApiResponse::conflict(
                "INVALID_TRANSITION",
                &format!("Request is {}, not Pending", current.as_str()),
            )
        }

        Err(DecideRequestError::RepositoryError(ref e)) => {
            error!(error = %e, "Request decision failed");
            ApiResponse::internal_error()
        }
    }
}
