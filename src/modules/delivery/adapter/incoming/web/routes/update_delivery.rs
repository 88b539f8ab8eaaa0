use crate::api::schemas::ErrorResponse;
use crate::modules::delivery::application::domain::entities::DeliveryStatus;
use crate::modules::delivery::application::ports::outgoing::delivery_repository::UpdateDeliveryError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct UpdateDeliveryForm {
    /// One of Picked, InTransit, Delivered
    #[schema(example = "Delivered")]
    pub status: String,
}

/// Update a delivery's status
///
/// The status is parsed against the closed enum before anything is written.
/// Delivered stamps the delivery time and cascades the request; the other
/// statuses touch the delivery row only.
///
/// Volunteers have no credential table, so this endpoint is reachable
/// without a session, as is the volunteer dashboard.
#[utoipa::path(
    post,
    path = "/volunteer/update/{delivery_id}",
    tag = "delivery",
    params(("delivery_id" = Uuid, Path, description = "Delivery to update")),
    request_body(content = UpdateDeliveryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Status updated; redirect to /volunteer/dashboard"),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 404, description = "No such delivery", body = ErrorResponse),
        (status = 409, description = "Delivery already delivered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/volunteer/update/{delivery_id}")]
pub async fn update_delivery_handler(
    path: web::Path<Uuid>,
    form: web::Form<UpdateDeliveryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let delivery_id = path.into_inner();

    let status: DeliveryStatus = match form.status.parse() {
        Ok(status) => status,
        Err(()) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "status must be one of Picked, InTransit, Delivered",
            );
        }
    };

    info!(%delivery_id, status = status.as_str(), "Delivery status update");

    match data
        .update_delivery_use_case
        .execute(delivery_id, status)
        .await
    {
        Ok(_) => ApiResponse::see_other("/volunteer/dashboard"),

        Err(UpdateDeliveryError::NotFound) => {
            ApiResponse::not_found("DELIVERY_NOT_FOUND", "No such delivery")
        }

        Err(UpdateDeliveryError::InvalidTransition) => ApiResponse::conflict(
            "INVALID_TRANSITION",
            "Delivery is already Delivered",
        ),

        Err(UpdateDeliveryError::Database(ref e)) => {
            error!(error = %e, "Delivery update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::delivery::application::domain::entities::Delivery;
    use crate::modules::delivery::application::use_cases::update_delivery::IUpdateDeliveryUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    struct RecordingUpdateUseCase {
        seen: Mutex<Vec<DeliveryStatus>>,
    }

    #[async_trait]
    impl IUpdateDeliveryUseCase for RecordingUpdateUseCase {
        async fn execute(
            &self,
            delivery_id: Uuid,
            status: DeliveryStatus,
        ) -> Result<Delivery, UpdateDeliveryError> {
            self.seen.lock().unwrap().push(status);
            Ok(Delivery {
                id: delivery_id,
                request_id: Uuid::new_v4(),
                volunteer_id: Uuid::new_v4(),
                status,
                pickup_time: Utc::now(),
                delivery_time: status.is_terminal().then(Utc::now),
            })
        }
    }

    async fn call(body: &'static str) -> (actix_web::dev::ServiceResponse, Arc<RecordingUpdateUseCase>) {
        let use_case = Arc::new(RecordingUpdateUseCase {
            seen: Mutex::new(vec![]),
        });
        let state = TestAppStateBuilder::default()
            .with_update_delivery(Arc::clone(&use_case) as Arc<dyn IUpdateDeliveryUseCase>)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(update_delivery_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/volunteer/update/{}", Uuid::new_v4()))
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(body)
            .to_request();
        (test::call_service(&app, req).await, use_case)
    }

    #[actix_web::test]
    async fn test_delivered_status_is_accepted() {
        let (resp, use_case) = call("status=Delivered").await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            "/volunteer/dashboard"
        );
        assert_eq!(
            use_case.seen.lock().unwrap().as_slice(),
            &[DeliveryStatus::Delivered]
        );
    }

    #[actix_web::test]
    async fn test_free_text_status_never_reaches_the_store() {
        let (resp, use_case) = call("status=lost+in+the+rain").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(use_case.seen.lock().unwrap().is_empty());
    }
}
