use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DeliveryBoardView {
    pub delivery_id: String,
    pub status: String,
    pub pickup_time: DateTime<Utc>,
    pub delivery_time: Option<DateTime<Utc>>,
    pub request_id: String,
    pub request_status: Option<String>,
    pub proof_file: Option<String>,
    pub requester_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VolunteerDashboardResponse {
    pub deliveries: Vec<DeliveryBoardView>,
}

/// Volunteer dashboard
///
/// All deliveries with their request context, newest pickup first.
#[utoipa::path(
    get,
    path = "/volunteer/dashboard",
    tag = "delivery",
    responses(
        (status = 200, description = "Delivery listing", body = inline(SuccessResponse<VolunteerDashboardResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/volunteer/dashboard")]
pub async fn volunteer_dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_deliveries_use_case.execute().await {
        Ok(rows) => ApiResponse::success(VolunteerDashboardResponse {
            deliveries: rows
                .into_iter()
                .map(|row| DeliveryBoardView {
                    delivery_id: row.delivery_id.to_string(),
                    status: row.status,
                    pickup_time: row.pickup_time,
                    delivery_time: row.delivery_time,
                    request_id: row.request_id.to_string(),
                    request_status: row.request_status,
                    proof_file: row.proof_file,
                    requester_name: row.requester_name,
                })
                .collect(),
        }),
        Err(e) => {
            error!(error = ?e, "Listing deliveries failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_dashboard_lists_deliveries() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(volunteer_dashboard_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/volunteer/dashboard")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["deliveries"].is_array());
    }
}
