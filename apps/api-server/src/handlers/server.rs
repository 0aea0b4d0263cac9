//! Service-level endpoints.

use actix_web::HttpResponse;

use blog_shared::ApiResponse;

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::new("Welcome to the Blog API."))
}

/// GET /ping
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::new("Pong"))
}
