use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::UserSession;
use crate::modules::feedback::application::use_cases::submit_feedback::{
    SubmitFeedbackError, SubmitFeedbackInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct FeedbackForm {
    /// 1 to 5
    #[schema(example = 5)]
    pub rating: i16,
    pub comments: String,
}

/// Leave feedback for a donor
#[utoipa::path(
    post,
    path = "/feedback/{donor_id}",
    tag = "feedback",
    params(("donor_id" = Uuid, Path, description = "Donor being rated")),
    request_body(content = FeedbackForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Feedback stored; redirect to /user/dashboard"),
        (status = 400, description = "Rating out of range", body = ErrorResponse),
        (status = 404, description = "No such donor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/feedback/{donor_id}")]
pub async fn feedback_handler(
    session: UserSession,
    path: web::Path<Uuid>,
    form: web::Form<FeedbackForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let donor_id = path.into_inner();
    let form = form.into_inner();

    info!(user_id = %session.user_id, %donor_id, rating = form.rating, "Feedback submission");

    let result = data
        .submit_feedback_use_case
        .execute(SubmitFeedbackInput {
            user_id: session.user_id,
            donor_id,
            rating: form.rating,
            comments: form.comments,
        })
        .await;

    match result {
        Ok(_) => ApiResponse::see_other("/user/dashboard"),

        Err(SubmitFeedbackError::InvalidRating) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Rating must be between 1 and 5")
        }

        Err(SubmitFeedbackError::DonorNotFound) => {
            ApiResponse::not_found("DONOR_NOT_FOUND", "No such donor")
        }

        Err(SubmitFeedbackError::RepositoryError(ref e)) => {
            error!(error = %e, "Feedback insert failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::{data_sessions, user_session_cookie};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_feedback_redirects_to_dashboard() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let sessions = data_sessions();
        let cookie = user_session_cookie(&sessions, Uuid::new_v4()).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(sessions)
                .service(feedback_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri(&format!("/feedback/{}", Uuid::new_v4()))
            .cookie(cookie)
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("rating=5&comments=thank+you")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("location").unwrap(), "/user/dashboard");
    }

    #[actix_web::test]
    async fn test_feedback_requires_user_session() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let sessions = data_sessions();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(sessions)
                .service(feedback_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri(&format!("/feedback/{}", Uuid::new_v4()))
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("rating=5&comments=thank+you")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("location").unwrap(), "/login");
    }
}
