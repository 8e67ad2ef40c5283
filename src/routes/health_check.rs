use actix_web::{get, HttpResponse};

/// Liveness probe. Answers 200 with an empty body as long as the server is
/// up; deployment tooling polls it.
#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
