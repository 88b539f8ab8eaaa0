use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Signup form, field names matching the rendered page.
#[derive(Deserialize, ToSchema)]
pub struct SignupForm {
    /// Requesting user category, free text from the form
    #[schema(example = "Individual")]
    pub usertype: String,
    pub name: String,
    pub contact: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub address: String,
    pub proof_type: Option<String>,
    pub proof_number: Option<String>,
    pub username: String,
    pub password: String,
}

/// User signup
///
/// Creates a requesting-user account and redirects to the login page, the
/// way the rendered signup form does.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created; redirect to /login"),
        (status = 400, description = "Invalid email or weak password", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/signup")]
pub async fn signup_handler(
    form: web::Form<SignupForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    info!(username = %form.username, "Signup attempt");

    let result = data
        .register_user_use_case
        .execute(RegisterUserInput {
            user_type: form.usertype,
            name: form.name,
            contact_number: form.contact,
            email: form.email,
            address: form.address,
            proof_type: form.proof_type,
            proof_number: form.proof_number,
            username: form.username,
            password: form.password,
        })
        .await;

    match result {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "Account created");
            ApiResponse::see_other("/login")
        }

        Err(RegisterUserError::UsernameTaken) => {
            warn!("Signup failed: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken.")
        }

        Err(RegisterUserError::EmailTaken) => {
            warn!("Signup failed: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered.")
        }

        Err(RegisterUserError::InvalidEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email address")
        }

        Err(RegisterUserError::WeakPassword(_)) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Password must be between 8 and 128 characters",
        ),

        Err(RegisterUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::internal_error()
        }
    }
}
