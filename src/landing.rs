use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct LandingResponse {
    service: &'static str,
    docs: &'static str,
}

/// Landing page payload. The rendered page lives elsewhere; this carries
/// what it shows.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(LandingResponse {
        service: "foodbridge",
        docs: "/swagger-ui/",
    })
}
