use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::UserSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct FoodItemView {
    pub food_id: String,
    pub food_name: String,
    pub quantity: String,
    pub posted_at: DateTime<Utc>,
    pub donor_name: Option<String>,
    pub donor_address: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserDashboardResponse {
    pub food: Vec<FoodItemView>,
}

/// User dashboard
///
/// Available food items with donor info, newest first. Requires a user
/// session; anonymous callers are redirected to /login.
#[utoipa::path(
    get,
    path = "/user/dashboard",
    tag = "catalog",
    responses(
        (status = 200, description = "Available food items", body = inline(SuccessResponse<UserDashboardResponse>)),
        (status = 303, description = "No user session; redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/user/dashboard")]
pub async fn user_dashboard_handler(
    _session: UserSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_available_food_use_case.execute().await {
        Ok(rows) => ApiResponse::success(UserDashboardResponse {
            food: rows
                .into_iter()
                .map(|row| FoodItemView {
                    food_id: row.food_id.to_string(),
                    food_name: row.food_name,
                    quantity: row.quantity,
                    posted_at: row.posted_at,
                    donor_name: row.donor_name,
                    donor_address: row.donor_address,
                })
                .collect(),
        }),
        Err(e) => {
            error!(error = ?e, "Listing available food failed");
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
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_anonymous_access_redirects_to_login() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let sessions = data_sessions();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(sessions)
                .service(user_dashboard_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get().uri("/user/dashboard").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("location").unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_logged_in_user_sees_food_list() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let sessions = data_sessions();
        let cookie = user_session_cookie(&sessions, Uuid::new_v4()).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(sessions)
                .service(user_dashboard_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/user/dashboard")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["food"].is_array());
    }
}
