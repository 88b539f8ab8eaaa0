use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::UserSession;
use crate::modules::workflow::application::use_cases::submit_request::{
    ProofUpload, SubmitRequestError, SubmitRequestInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use tracing::{error, info};
use uuid::Uuid;

const MAX_PROOF_BYTES: usize = 50 * 1024 * 1024;

/// Submit a donation request
///
/// Creates a Pending request for a food item, optionally attaching a
/// proof-of-need file from the multipart field `proof`.
#[utoipa::path(
    post,
    path = "/request/new/{food_id}",
    tag = "workflow",
    params(("food_id" = Uuid, Path, description = "Requested food item")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Request submitted; redirect to /user/dashboard"),
        (status = 400, description = "Malformed upload", body = ErrorResponse),
        (status = 404, description = "Food item does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/request/new/{food_id}")]
pub async fn new_request_handler(
    session: UserSession,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let food_id = path.into_inner();

    let proof = match read_proof_field(payload).await {
        Ok(proof) => proof,
        Err(response) => return response,
    };

    info!(user_id = %session.user_id, %food_id, "Request submission");

    let result = data
        .submit_request_use_case
        .execute(SubmitRequestInput {
            user_id: session.user_id,
            food_id,
            proof,
        })
        .await;

    match result {
        Ok(request) => {
            info!(request_id = %request.id, "Request created, waiting for approval");
            ApiResponse::see_other("/user/dashboard")
        }

        Err(SubmitRequestError::FoodNotFound) => {
            ApiResponse::not_found("FOOD_NOT_FOUND", "No such food item")
        }

        Err(SubmitRequestError::ProofStorageFailed(ref e)) => {
            error!(error = %e, "Proof upload failed");
            ApiResponse::internal_error()
        }

        Err(SubmitRequestError::QueryError(ref e))
        | Err(SubmitRequestError::RepositoryError(ref e)) => {
            error!(error = %e, "Request submission failed");
            ApiResponse::internal_error()
        }
    }
}

/// Pulls the optional `proof` file out of the multipart body. Other fields
/// are drained and ignored.
async fn read_proof_field(mut payload: Multipart) -> Result<Option<ProofUpload>, HttpResponse> {
    let mut proof: Option<ProofUpload> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                return Err(ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    &format!("Malformed multipart payload: {e}"),
                ));
            }
        };

        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(|s| s.to_string()),
                cd.get_filename().map(|s| s.to_string()),
            ),
            None => (None, None),
        };

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    return Err(ApiResponse::bad_request(
                        "VALIDATION_ERROR",
                        &format!("Upload read failed: {e}"),
                    ));
                }
            };

            if bytes.len() + chunk.len() > MAX_PROOF_BYTES {
                return Err(ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Proof file exceeds the 50MB limit",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        if name.as_deref() == Some("proof") && !bytes.is_empty() {
            proof = Some(ProofUpload {
                original_name: filename.unwrap_or_else(|| "proof".to_string()),
                bytes,
            });
        }
    }

    Ok(proof)
}
