use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::services::session::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::login::{LoginError, LoginRole};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{http::header, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    /// "user" (default) or "admin"
    #[schema(example = "user")]
    pub role: Option<String>,
    pub username: String,
    pub password: String,
}

/// Login
///
/// Verifies credentials against the role-appropriate table, issues an opaque
/// session token as an HttpOnly cookie, and redirects to the role dashboard.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Session established; redirect to the role dashboard"),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_handler(
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();
    let role = LoginRole::from_form_value(form.role.as_deref());

    info!(username = %form.username, ?role, "Login attempt");

    let result = data
        .login_use_case
        .execute(role, &form.username, &form.password)
        .await;

    match result {
        Ok(outcome) => {
            info!(name = %outcome.display_name, "Login succeeded");

            let cookie = Cookie::build(SESSION_COOKIE, outcome.token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();

            let location = match outcome.principal {
                Principal::Admin { .. } => "/admin/dashboard",
                Principal::User { .. } => "/user/dashboard",
            };

            HttpResponse::SeeOther()
                .cookie(cookie)
                .insert_header((header::LOCATION, location))
                .finish()
        }

        // One message for unknown usernames and wrong passwords alike.
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::SessionFailed(ref e)) => {
            error!(error = %e, "Session issuance failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Credential lookup failed");
            ApiResponse::internal_error()
        }
    }
}
