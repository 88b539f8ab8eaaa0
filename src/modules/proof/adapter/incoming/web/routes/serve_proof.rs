use crate::api::schemas::ErrorResponse;
use crate::modules::proof::application::ports::outgoing::proof_store::{
    ProofStore, ProofStoreError,
};
use crate::shared::api::ApiResponse;
use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::error;

/// Serve an uploaded proof file
///
/// Streams back a previously stored proof document by its stored name.
#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    tag = "proof",
    params(("filename" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents"),
        (status = 404, description = "No such file", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/uploads/{filename}")]
pub async fn serve_proof_handler(
    path: web::Path<String>,
    store: web::Data<Arc<dyn ProofStore>>,
) -> impl Responder {
    let filename = path.into_inner();

    match store.load(&filename).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/octet-stream")
            .body(bytes),

        Err(ProofStoreError::NotFound) | Err(ProofStoreError::InvalidName) => {
            ApiResponse::not_found("FILE_NOT_FOUND", "No such file")
        }

        Err(ProofStoreError::Io(ref e)) => {
            error!(error = %e, "Proof file read failed");
            ApiResponse::internal_error()
        }
    }
}
